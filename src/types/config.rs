use crate::engine::weights::CriteriaWeights;
use crate::error::JudgingError;
use crate::scan::csv_sheet::{normalize_column_name, SheetLayout};
use crate::types::score::{TeamIdentity, TeamNumber};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JudgingConfig {
    pub criteria: Option<BTreeMap<String, f64>>,
    pub review: Option<ReviewConfig>,
    pub report: Option<ReportConfig>,
    pub sheets: Option<SheetsConfig>,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    pub min_reviews: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    pub team_number_column: Option<String>,
    pub team_name_column: Option<String>,
    pub skip_rows: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub number: TeamNumber,
    pub name: String,
}

pub const DEFAULT_MIN_REVIEWS: u32 = 2;
pub const DEFAULT_TOP: usize = 3;
pub const DEFAULT_TEAM_NUMBER_COLUMN: &str = "team number";
pub const DEFAULT_TEAM_NAME_COLUMN: &str = "team name";
/// The judging template keeps instructions on the line under the header.
pub const DEFAULT_SKIP_ROWS: usize = 1;

impl JudgingConfig {
    pub fn default_weights() -> CriteriaWeights {
        CriteriaWeights::new([
            ("design", 1.0),
            ("originality", 1.0),
            ("impact", 1.5),
            ("technical", 1.5),
        ])
    }

    pub fn weights(&self) -> CriteriaWeights {
        match &self.criteria {
            Some(criteria) => CriteriaWeights::new(
                criteria
                    .iter()
                    .map(|(name, weight)| (normalize_column_name(name), *weight)),
            ),
            None => Self::default_weights(),
        }
    }

    pub fn min_reviews(&self) -> u32 {
        self.review
            .as_ref()
            .and_then(|review| review.min_reviews)
            .unwrap_or(DEFAULT_MIN_REVIEWS)
    }

    pub fn top(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.top)
            .unwrap_or(DEFAULT_TOP)
    }

    pub fn sheet_layout(&self) -> SheetLayout {
        let sheets = self.sheets.as_ref();
        SheetLayout {
            team_number_column: sheets
                .and_then(|sheets| sheets.team_number_column.as_deref())
                .map(normalize_column_name)
                .unwrap_or_else(|| DEFAULT_TEAM_NUMBER_COLUMN.to_string()),
            team_name_column: sheets
                .and_then(|sheets| sheets.team_name_column.as_deref())
                .map(normalize_column_name)
                .unwrap_or_else(|| DEFAULT_TEAM_NAME_COLUMN.to_string()),
            skip_rows: sheets
                .and_then(|sheets| sheets.skip_rows)
                .unwrap_or(DEFAULT_SKIP_ROWS),
        }
    }

    pub fn roster(&self) -> Vec<TeamIdentity> {
        self.roster
            .iter()
            .map(|entry| TeamIdentity::new(entry.number, entry.name.trim()))
            .collect()
    }

    pub fn validate(&self) -> Result<(), JudgingError> {
        if let Some(criteria) = &self.criteria {
            if criteria.is_empty() {
                return Err(JudgingError::ConfigParse(
                    "criteria must define at least one weighted criterion".to_string(),
                ));
            }

            let mut seen = HashSet::new();
            for (name, weight) in criteria {
                let normalized = normalize_column_name(name);
                if normalized.is_empty() {
                    return Err(JudgingError::ConfigParse(
                        "criteria names must be non-empty".to_string(),
                    ));
                }
                if !seen.insert(normalized.clone()) {
                    return Err(JudgingError::ConfigParse(format!(
                        "criteria contains duplicate criterion: {normalized}"
                    )));
                }
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(JudgingError::ConfigParse(format!(
                        "criteria.{name} must be a non-negative number (found {weight})"
                    )));
                }
            }

            if criteria.values().all(|weight| *weight == 0.0) {
                return Err(JudgingError::ConfigParse(
                    "criteria weights cannot all be zero".to_string(),
                ));
            }

            let layout = self.sheet_layout();
            for column in [&layout.team_number_column, &layout.team_name_column] {
                if seen.contains(column) {
                    return Err(JudgingError::ConfigParse(format!(
                        "criterion '{column}' collides with a team column"
                    )));
                }
            }
        }

        if let Some(sheets) = &self.sheets {
            for (key, column) in [
                ("team_number_column", &sheets.team_number_column),
                ("team_name_column", &sheets.team_name_column),
            ] {
                if column
                    .as_deref()
                    .is_some_and(|column| normalize_column_name(column).is_empty())
                {
                    return Err(JudgingError::ConfigParse(format!(
                        "sheets.{key} must be non-empty"
                    )));
                }
            }
        }

        let mut numbers = HashSet::new();
        for entry in &self.roster {
            if !numbers.insert(entry.number) {
                return Err(JudgingError::ConfigParse(format!(
                    "roster contains duplicate team number: {}",
                    entry.number
                )));
            }
        }

        Ok(())
    }
}
