use super::{column_titles, row_cells};
use crate::types::report::JudgingReport;

pub fn to_markdown(report: &JudgingReport, top: usize) -> String {
    let mut output = String::new();
    output.push_str("# Hackathon Results\n\n");
    output.push_str(&format!(
        "Sheets: {} | Teams: {} | Scored: {}\n\n",
        report.sheets.len(),
        report.ranking.len(),
        report.scored_teams()
    ));

    output.push_str("## Ranking\n\n");
    let titles = column_titles(report);
    output.push_str(&format!("| {} |\n", titles.join(" | ")));
    output.push_str(&format!("|{}\n", "---|".repeat(titles.len())));
    for entry in report.top(top) {
        let cells: Vec<String> = row_cells(report, entry)
            .into_iter()
            .map(|cell| cell.replace('|', "\\|"))
            .collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    output.push('\n');

    if !report.skipped_sheets.is_empty() {
        output.push_str("## Skipped Sheets\n\n");
        for skipped in &report.skipped_sheets {
            output.push_str(&format!("- {skipped}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Warnings\n\n");
    if report.warnings.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for warning in &report.warnings {
            output.push_str(&format!("- {warning}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Review Shortfalls\n\n");
    if report.review_shortfalls.is_empty() {
        output.push_str("- none\n");
    } else {
        for shortfall in &report.review_shortfalls {
            output.push_str(&format!("- {shortfall}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;
    use crate::types::report::SkippedSheet;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report(), 3);
        assert!(rendered.contains("# Hackathon Results"));
        assert!(rendered.contains("## Ranking"));
        assert!(rendered.contains("| Rank | Team # | Team Name | # Reviews | Final Score | Design | Impact |"));
        assert!(rendered.contains("| 1 | 1 | Rustaceans | 2 | 7.20 | 7.00 | 6.00 |"));
        assert!(rendered.contains("| 2 | 4 | Night Owls | 0 | - | - | - |"));
        assert!(rendered.contains("## Warnings"));
        assert!(rendered.contains("## Review Shortfalls"));
    }

    #[test]
    fn skipped_sheets_get_their_own_section() {
        let mut report = sample_report();
        assert!(!to_markdown(&report, 0).contains("## Skipped Sheets"));

        report.skipped_sheets.push(SkippedSheet {
            id: "carol".to_string(),
            path: "scores/carol.csv".to_string(),
            reason: "missing column 'team number' in carol".to_string(),
        });
        let rendered = to_markdown(&report, 0);
        assert!(rendered.contains("## Skipped Sheets"));
        assert!(rendered.contains("- could not process scores/carol.csv"));
    }

    #[test]
    fn pipes_in_team_names_are_escaped() {
        let mut report = sample_report();
        report.ranking[0].team.name = "A|B".to_string();
        let rendered = to_markdown(&report, 0);
        assert!(rendered.contains("A\\|B"));
    }
}
