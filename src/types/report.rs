use crate::engine::weights::CriteriaWeights;
use crate::engine::Tally;
use crate::types::score::{TeamIdentity, Warning};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Final score of a team. Unscored teams never carry a numeric placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum TeamScore {
    Scored(f64),
    Unscored,
}

impl TeamScore {
    pub fn mean_of(contributions: &[f64]) -> Self {
        if contributions.is_empty() {
            return Self::Unscored;
        }
        Self::Scored(contributions.iter().sum::<f64>() / contributions.len() as f64)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Scored(value) => Some(*value),
            Self::Unscored => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Scored(_))
    }
}

impl fmt::Display for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored(value) => write!(f, "{value:.2}"),
            Self::Unscored => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub team: TeamIdentity,
    /// Weighted row scores in the order they were accumulated.
    pub contributions: Vec<f64>,
    pub score: TeamScore,
    pub rejected_cells: usize,
    pub criterion_means: BTreeMap<String, f64>,
}

impl TeamAggregate {
    pub fn reviews(&self) -> usize {
        self.contributions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub team: TeamIdentity,
    pub score: TeamScore,
    pub reviews: usize,
    pub rejected_cells: usize,
    pub criterion_means: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewShortfall {
    pub team: TeamIdentity,
    pub reviews: usize,
    pub required: u32,
}

impl fmt::Display for ReviewShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team {} ({}) has only {} review(s), minimum required is {}",
            self.team.number, self.team.name, self.reviews, self.required
        )
    }
}

/// Where a sheet came from, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSource {
    pub id: String,
    pub path: String,
    pub sha256: String,
    pub rows: usize,
}

/// A sheet that was found but could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSheet {
    pub id: String,
    pub path: String,
    pub reason: String,
}

impl fmt::Display for SkippedSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not process {}: {}", self.path, self.reason)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JudgingReport {
    pub generated_at: String,
    pub weights: CriteriaWeights,
    pub sheets: Vec<SheetSource>,
    pub skipped_sheets: Vec<SkippedSheet>,
    pub ranking: Vec<RankedEntry>,
    pub warnings: Vec<Warning>,
    pub review_shortfalls: Vec<ReviewShortfall>,
}

impl JudgingReport {
    pub fn new(
        weights: CriteriaWeights,
        sheets: Vec<SheetSource>,
        skipped_sheets: Vec<SkippedSheet>,
        tally: Tally,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            weights,
            sheets,
            skipped_sheets,
            ranking: tally.ranking,
            warnings: tally.warnings,
            review_shortfalls: tally.shortfalls,
        }
    }

    pub fn scored_teams(&self) -> usize {
        self.ranking
            .iter()
            .filter(|entry| entry.score.is_scored())
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.warnings.is_empty()
            || !self.review_shortfalls.is_empty()
            || !self.skipped_sheets.is_empty()
    }

    /// First `top` ranked entries; `0` means all of them.
    pub fn top(&self, top: usize) -> &[RankedEntry] {
        if top == 0 || top >= self.ranking.len() {
            &self.ranking
        } else {
            &self.ranking[..top]
        }
    }
}
