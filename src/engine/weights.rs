use super::validator::ValidatedScore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Weight per criterion, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CriteriaWeights {
    weights: BTreeMap<String, f64>,
}

/// A row's normalized score on the 0-10 scale and the weight it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedScore {
    pub score: f64,
    pub weight_sum: f64,
}

impl CriteriaWeights {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            weights: entries
                .into_iter()
                .map(|(name, weight)| (name.into(), weight))
                .collect(),
        }
    }

    pub fn criteria(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn weight(&self, criterion: &str) -> Option<f64> {
        self.weights.get(criterion).copied()
    }

    /// Weighted mean over the criteria that validated. Criteria outside the
    /// table are ignored; `None` when no weight was applied at all.
    pub fn weighted_score(&self, scores: &[ValidatedScore]) -> Option<WeightedScore> {
        let mut total = 0.0;
        let mut weight_sum = 0.0;
        for score in scores {
            if let Some(weight) = self.weight(score.criterion()) {
                total += score.value() * weight;
                weight_sum += weight;
            }
        }

        if weight_sum > 0.0 {
            Some(WeightedScore {
                score: total / weight_sum,
                weight_sum,
            })
        } else {
            None
        }
    }
}
