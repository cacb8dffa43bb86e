use crate::engine::validator::{RejectReason, Rejection, ValidatedScore};
use crate::engine::weights::WeightedScore;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub type TeamNumber = u32;

/// Teams are matched by number only; the name is descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamIdentity {
    pub number: TeamNumber,
    pub name: String,
}

impl TeamIdentity {
    pub fn new(number: TeamNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// One data row of a sheet, still unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    /// Line number in the source file, used to point organizers at the cell.
    pub row: usize,
    pub team_number: String,
    pub team_name: String,
    /// Raw cell text keyed by normalized column name.
    pub cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn cell(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub id: String,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub sheet: String,
    pub row: usize,
    pub team: TeamIdentity,
    /// `None` when no configured criterion validated on this row.
    pub score: Option<WeightedScore>,
    pub validated: Vec<ValidatedScore>,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    Unparsable,
    OutOfRange,
    NoValidCriteria,
    InvalidTeamNumber,
    DuplicateTeam,
}

impl From<RejectReason> for WarningReason {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Unparsable => Self::Unparsable,
            RejectReason::OutOfRange => Self::OutOfRange,
        }
    }
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unparsable => "missing or non-numeric score",
            Self::OutOfRange => "score outside 0-10",
            Self::NoValidCriteria => "no valid criterion scores",
            Self::InvalidTeamNumber => "invalid team number",
            Self::DuplicateTeam => "team appears more than once in sheet",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub sheet: String,
    pub row: usize,
    pub team: Option<TeamNumber>,
    pub criterion: Option<String>,
    pub reason: WarningReason,
    pub raw: Option<String>,
}

impl Warning {
    pub fn for_rejection(sheet: &str, row: usize, team: TeamNumber, rejection: &Rejection) -> Self {
        Self {
            sheet: sheet.to_string(),
            row,
            team: Some(team),
            criterion: Some(rejection.criterion.clone()),
            reason: rejection.reason.into(),
            raw: Some(rejection.raw.clone()),
        }
    }

    pub fn for_row(
        sheet: &str,
        row: usize,
        team: Option<TeamNumber>,
        reason: WarningReason,
        raw: Option<String>,
    ) -> Self {
        Self {
            sheet: sheet.to_string(),
            row,
            team,
            criterion: None,
            reason,
            raw,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} row {}", self.sheet, self.row)?;
        if let Some(team) = self.team {
            write!(f, ", team {team}")?;
        }
        if let Some(criterion) = &self.criterion {
            write!(f, ", {criterion}")?;
        }
        write!(f, ": {}", self.reason)?;
        if let Some(raw) = &self.raw {
            write!(f, " ('{raw}')")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_names_sheet_row_team_and_raw_value() {
        let warning = Warning {
            sheet: "alice".to_string(),
            row: 4,
            team: Some(7),
            criterion: Some("impact".to_string()),
            reason: WarningReason::OutOfRange,
            raw: Some("15".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "alice row 4, team 7, impact: score outside 0-10 ('15')"
        );
    }

    #[test]
    fn row_warning_omits_missing_parts() {
        let warning = Warning::for_row("bob", 9, None, WarningReason::InvalidTeamNumber, None);
        assert_eq!(warning.to_string(), "bob row 9: invalid team number");
    }

    #[test]
    fn sheet_row_cell_defaults_to_empty() {
        let row = SheetRow::default();
        assert_eq!(row.cell("design"), "");
    }
}
