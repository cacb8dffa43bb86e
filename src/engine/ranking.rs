use crate::types::report::{RankedEntry, TeamAggregate, TeamScore};
use crate::types::score::TeamNumber;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Highest score first; ties and the unscored tail go by ascending team number.
pub fn build(aggregates: &BTreeMap<TeamNumber, TeamAggregate>) -> Vec<RankedEntry> {
    let mut ordered: Vec<&TeamAggregate> = aggregates.values().collect();
    ordered.sort_by(|a, b| {
        compare_scores(&a.score, &b.score).then_with(|| a.team.number.cmp(&b.team.number))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, aggregate)| RankedEntry {
            rank: index + 1,
            team: aggregate.team.clone(),
            score: aggregate.score,
            reviews: aggregate.reviews(),
            rejected_cells: aggregate.rejected_cells,
            criterion_means: aggregate.criterion_means.clone(),
        })
        .collect()
}

fn compare_scores(a: &TeamScore, b: &TeamScore) -> Ordering {
    match (a, b) {
        (TeamScore::Scored(a), TeamScore::Scored(b)) => b.total_cmp(a),
        (TeamScore::Scored(_), TeamScore::Unscored) => Ordering::Less,
        (TeamScore::Unscored, TeamScore::Scored(_)) => Ordering::Greater,
        (TeamScore::Unscored, TeamScore::Unscored) => Ordering::Equal,
    }
}
