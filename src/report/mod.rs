pub mod export;
pub mod json;
pub mod md;
pub mod table;

use crate::error::JudgingError;
use crate::types::report::{JudgingReport, RankedEntry};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Md,
    Json,
}

pub fn render(
    report: &JudgingReport,
    format: OutputFormat,
    top: usize,
) -> Result<String, JudgingError> {
    match format {
        OutputFormat::Table => Ok(table::to_table(report, top)),
        OutputFormat::Md => Ok(md::to_markdown(report, top)),
        OutputFormat::Json => json::to_json(report).map_err(JudgingError::Json),
    }
}

/// Header cells shared by the table and Markdown renderers.
pub(crate) fn column_titles(report: &JudgingReport) -> Vec<String> {
    let mut titles = vec![
        "Rank".to_string(),
        "Team #".to_string(),
        "Team Name".to_string(),
        "# Reviews".to_string(),
        "Final Score".to_string(),
    ];
    titles.extend(report.weights.criteria().map(title_case));
    titles
}

pub(crate) fn row_cells(report: &JudgingReport, entry: &RankedEntry) -> Vec<String> {
    let mut cells = vec![
        entry.rank.to_string(),
        entry.team.number.to_string(),
        entry.team.name.clone(),
        entry.reviews.to_string(),
        entry.score.to_string(),
    ];
    cells.extend(report.weights.criteria().map(|criterion| {
        entry
            .criterion_means
            .get(criterion)
            .map(|mean| format!("{mean:.2}"))
            .unwrap_or_else(|| "-".to_string())
    }));
    cells
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
