use crate::engine::sheet::parse_team_number;
use crate::engine::weights::CriteriaWeights;
use crate::error::{JudgingError, Result};
use crate::types::score::{Sheet, SheetRow, TeamNumber};
use std::collections::HashMap;
use tracing::warn;

/// Column names are compared after [`normalize_column_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub team_number_column: String,
    pub team_name_column: String,
    /// Data rows directly under the header that are not scores.
    pub skip_rows: usize,
}

/// Trims, drops a trailing annotation such as ` (/10)` and lowercases.
pub fn normalize_column_name(name: &str) -> String {
    let trimmed = name.trim().trim_start_matches('\u{feff}').trim();
    let base = match trimmed.rfind('(') {
        Some(idx) if idx > 0 && trimmed.ends_with(')') => &trimmed[..idx],
        _ => trimmed,
    };
    base.trim().to_lowercase()
}

pub fn parse_sheet(
    id: &str,
    text: &str,
    layout: &SheetLayout,
    criteria: &CriteriaWeights,
) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_column_name)
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| JudgingError::MissingColumn {
                sheet: id.to_string(),
                column: name.to_string(),
            })
    };
    let number_idx = column(&layout.team_number_column)?;
    let name_idx = column(&layout.team_name_column)?;

    for criterion in criteria.criteria() {
        if !headers.iter().any(|header| header == criterion) {
            warn!(sheet = id, criterion, "criterion column missing; its cells count as empty");
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index < layout.skip_rows {
            if let Some(team) = skipped_team_number(&record, number_idx) {
                warn!(
                    sheet = id,
                    line = record.position().map(|position| position.line()),
                    team,
                    "skipped row holds a team number; sheet may lack its instruction row"
                );
            }
            continue;
        }
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(index + 2);
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        let mut cells = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == number_idx || idx == name_idx {
                continue;
            }
            cells.entry(header.clone()).or_insert_with(|| field(idx));
        }

        rows.push(SheetRow {
            row: line,
            team_number: field(number_idx),
            team_name: field(name_idx),
            cells,
        });
    }

    Ok(Sheet {
        id: id.to_string(),
        rows,
    })
}

/// Team number of a record dropped by `skip_rows`, if it looks like a real row.
fn skipped_team_number(record: &csv::StringRecord, number_idx: usize) -> Option<TeamNumber> {
    record.get(number_idx).and_then(parse_team_number)
}
