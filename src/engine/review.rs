use crate::types::report::{ReviewShortfall, TeamAggregate};
use crate::types::score::TeamNumber;
use std::collections::BTreeMap;

/// Teams with fewer valid reviews than `min_reviews`, by team number.
pub fn review_shortfalls(
    aggregates: &BTreeMap<TeamNumber, TeamAggregate>,
    min_reviews: u32,
) -> Vec<ReviewShortfall> {
    aggregates
        .values()
        .filter(|aggregate| aggregate.reviews() < min_reviews as usize)
        .map(|aggregate| ReviewShortfall {
            team: aggregate.team.clone(),
            reviews: aggregate.reviews(),
            required: min_reviews,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::TeamScore;
    use crate::types::score::TeamIdentity;

    fn aggregate(number: TeamNumber, reviews: usize) -> (TeamNumber, TeamAggregate) {
        let contributions = vec![5.0; reviews];
        (
            number,
            TeamAggregate {
                team: TeamIdentity::new(number, "Team"),
                score: TeamScore::mean_of(&contributions),
                contributions,
                rejected_cells: 0,
                criterion_means: BTreeMap::new(),
            },
        )
    }

    #[test]
    fn flags_teams_below_minimum() {
        let aggregates = BTreeMap::from([aggregate(1, 2), aggregate(2, 1), aggregate(3, 0)]);
        let shortfalls = review_shortfalls(&aggregates, 2);
        let numbers: Vec<_> = shortfalls.iter().map(|s| s.team.number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(shortfalls[0].reviews, 1);
        assert_eq!(shortfalls[0].required, 2);
    }

    #[test]
    fn zero_minimum_disables_the_check() {
        let aggregates = BTreeMap::from([aggregate(1, 0)]);
        assert!(review_shortfalls(&aggregates, 0).is_empty());
    }
}
