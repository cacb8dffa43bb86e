use super::validator::validate;
use super::weights::CriteriaWeights;
use crate::types::score::{RowResult, SheetRow, TeamIdentity, TeamNumber, Warning, WarningReason};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetOutcome {
    pub results: Vec<RowResult>,
    pub warnings: Vec<Warning>,
}

/// Validates and weights the rows of one sheet. Holds no state between sheets.
pub struct SheetProcessor<'a> {
    weights: &'a CriteriaWeights,
}

impl<'a> SheetProcessor<'a> {
    pub fn new(weights: &'a CriteriaWeights) -> Self {
        Self { weights }
    }

    /// Rows are handled in input order. Duplicate team rows stay separate
    /// results; merging them is the aggregator's job.
    pub fn process(&self, sheet_id: &str, rows: &[SheetRow]) -> SheetOutcome {
        let mut outcome = SheetOutcome::default();
        let mut seen = HashSet::new();

        for row in rows {
            let Some(number) = parse_team_number(&row.team_number) else {
                debug!(sheet = sheet_id, row = row.row, raw = %row.team_number, "invalid team number");
                outcome.warnings.push(Warning::for_row(
                    sheet_id,
                    row.row,
                    None,
                    WarningReason::InvalidTeamNumber,
                    Some(row.team_number.clone()),
                ));
                continue;
            };

            if !seen.insert(number) {
                outcome.warnings.push(Warning::for_row(
                    sheet_id,
                    row.row,
                    Some(number),
                    WarningReason::DuplicateTeam,
                    None,
                ));
            }

            let mut validated = Vec::new();
            let mut rejected = Vec::new();
            for criterion in self.weights.criteria() {
                match validate(row.cell(criterion), criterion) {
                    Ok(score) => validated.push(score),
                    Err(rejection) => {
                        debug!(
                            sheet = sheet_id,
                            row = row.row,
                            team = number,
                            criterion,
                            reason = ?rejection.reason,
                            "rejected score cell"
                        );
                        outcome.warnings.push(Warning::for_rejection(
                            sheet_id, row.row, number, &rejection,
                        ));
                        rejected.push(rejection);
                    }
                }
            }

            let score = self.weights.weighted_score(&validated);
            if score.is_none() {
                outcome.warnings.push(Warning::for_row(
                    sheet_id,
                    row.row,
                    Some(number),
                    WarningReason::NoValidCriteria,
                    None,
                ));
            }

            outcome.results.push(RowResult {
                sheet: sheet_id.to_string(),
                row: row.row,
                team: TeamIdentity::new(number, row.team_name.trim()),
                score,
                validated,
                rejected,
            });
        }

        info!(
            sheet = sheet_id,
            rows = rows.len(),
            scored = outcome.results.iter().filter(|r| r.score.is_some()).count(),
            warnings = outcome.warnings.len(),
            "processed sheet"
        );
        outcome
    }
}

/// Accepts plain integers and integral decimals such as `7.0`, which
/// spreadsheet exports tend to produce.
pub fn parse_team_number(raw: &str) -> Option<TeamNumber> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(number) = trimmed.parse::<TeamNumber>() {
        return Some(number);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(TeamNumber::MAX)).contains(&value)
    {
        Some(value as TeamNumber)
    } else {
        None
    }
}
