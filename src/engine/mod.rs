pub mod aggregate;
pub mod ranking;
pub mod review;
pub mod sheet;
pub mod validator;
pub mod weights;

use crate::types::report::{RankedEntry, ReviewShortfall};
use crate::types::score::{Sheet, TeamIdentity, Warning};
use aggregate::TeamAggregator;
use sheet::SheetProcessor;
use tracing::info;
use weights::CriteriaWeights;

/// Immutable inputs of one run, built once from the loaded config.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub weights: CriteriaWeights,
    pub roster: Vec<TeamIdentity>,
    pub min_reviews: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub ranking: Vec<RankedEntry>,
    /// In generation order: by sheet, then by row within the sheet.
    pub warnings: Vec<Warning>,
    pub shortfalls: Vec<ReviewShortfall>,
}

/// Runs every sheet through validation and weighting in order, then
/// aggregates per team and ranks.
pub fn tally(sheets: &[Sheet], settings: &RunSettings) -> Tally {
    let processor = SheetProcessor::new(&settings.weights);
    let mut aggregator = TeamAggregator::new();
    for team in &settings.roster {
        aggregator.register(team.clone());
    }

    let mut warnings = Vec::new();
    for sheet in sheets {
        let outcome = processor.process(&sheet.id, &sheet.rows);
        warnings.extend(outcome.warnings);
        for result in outcome.results {
            aggregator.accumulate(result);
        }
    }

    let aggregates = aggregator.finalize();
    let shortfalls = review::review_shortfalls(&aggregates, settings.min_reviews);
    let ranking = ranking::build(&aggregates);

    info!(
        sheets = sheets.len(),
        teams = ranking.len(),
        warnings = warnings.len(),
        shortfalls = shortfalls.len(),
        "tally complete"
    );

    Tally {
        ranking,
        warnings,
        shortfalls,
    }
}
