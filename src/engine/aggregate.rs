use crate::types::report::{TeamAggregate, TeamScore};
use crate::types::score::{RowResult, TeamIdentity, TeamNumber};
use std::collections::BTreeMap;

#[derive(Debug)]
struct TeamEntry {
    identity: TeamIdentity,
    contributions: Vec<f64>,
    rejected_cells: usize,
    criterion_totals: BTreeMap<String, (f64, usize)>,
}

impl TeamEntry {
    fn new(identity: TeamIdentity) -> Self {
        Self {
            identity,
            contributions: Vec::new(),
            rejected_cells: 0,
            criterion_totals: BTreeMap::new(),
        }
    }
}

/// The one piece of cross-sheet state in a run. `finalize` consumes it, so a
/// run cannot keep accumulating after the ranking has been built.
#[derive(Debug, Default)]
pub struct TeamAggregator {
    teams: BTreeMap<TeamNumber, TeamEntry>,
}

impl TeamAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes a team known before any sheet mentions it.
    pub fn register(&mut self, team: TeamIdentity) {
        self.teams
            .entry(team.number)
            .or_insert_with(|| TeamEntry::new(team));
    }

    /// The first name seen for a team number is kept.
    pub fn accumulate(&mut self, result: RowResult) {
        let entry = self
            .teams
            .entry(result.team.number)
            .or_insert_with(|| TeamEntry::new(result.team.clone()));

        entry.rejected_cells += result.rejected.len();
        if let Some(weighted) = result.score {
            entry.contributions.push(weighted.score);
        }
        for score in &result.validated {
            let total = entry
                .criterion_totals
                .entry(score.criterion().to_string())
                .or_insert((0.0, 0));
            total.0 += score.value();
            total.1 += 1;
        }
    }

    pub fn finalize(self) -> BTreeMap<TeamNumber, TeamAggregate> {
        self.teams
            .into_iter()
            .map(|(number, entry)| {
                let criterion_means = entry
                    .criterion_totals
                    .into_iter()
                    .map(|(criterion, (sum, count))| (criterion, sum / count as f64))
                    .collect();
                let aggregate = TeamAggregate {
                    team: entry.identity,
                    score: TeamScore::mean_of(&entry.contributions),
                    contributions: entry.contributions,
                    rejected_cells: entry.rejected_cells,
                    criterion_means,
                };
                (number, aggregate)
            })
            .collect()
    }
}
