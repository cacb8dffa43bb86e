use super::{column_titles, row_cells};
use crate::types::report::JudgingReport;

pub fn to_table(report: &JudgingReport, top: usize) -> String {
    let shown = report.top(top);
    let titles = column_titles(report);
    let rows: Vec<Vec<String>> = shown.iter().map(|entry| row_cells(report, entry)).collect();

    let mut widths: Vec<usize> = titles.iter().map(|title| title.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Hackathon Results (top {} of {} teams)\n",
        shown.len(),
        report.ranking.len()
    ));
    output.push_str(&border(&widths, '-'));
    output.push_str(&line(&widths, &titles));
    output.push_str(&border(&widths, '='));
    for row in &rows {
        output.push_str(&line(&widths, row));
    }
    output.push_str(&border(&widths, '-'));

    if !report.skipped_sheets.is_empty() {
        output.push_str(&format!(
            "\nSkipped sheets ({}):\n",
            report.skipped_sheets.len()
        ));
        for skipped in &report.skipped_sheets {
            output.push_str(&format!("  - {skipped}\n"));
        }
    }
    if !report.warnings.is_empty() {
        output.push_str(&format!("\nWarnings ({}):\n", report.warnings.len()));
        for warning in &report.warnings {
            output.push_str(&format!("  - {warning}\n"));
        }
    }
    if !report.review_shortfalls.is_empty() {
        output.push_str(&format!(
            "\nReview shortfalls ({}):\n",
            report.review_shortfalls.len()
        ));
        for shortfall in &report.review_shortfalls {
            output.push_str(&format!("  - {shortfall}\n"));
        }
    }

    output
}

fn border(widths: &[usize], fill: char) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.extend(std::iter::repeat(fill).take(width + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let mut out = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.extend(std::iter::repeat(' ').take(pad + 1));
        out.push('|');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;
    use crate::types::report::SkippedSheet;

    #[test]
    fn table_lists_ranked_teams_and_issues() {
        let rendered = to_table(&sample_report(), 0);
        assert!(rendered.contains("Hackathon Results (top 2 of 2 teams)"));
        assert!(rendered.contains("| Rank | Team # | Team Name  |"));
        assert!(rendered.contains("Rustaceans"));
        assert!(rendered.contains("7.20"));
        assert!(rendered.contains("Warnings (1):"));
        assert!(rendered.contains("alice row 3, team 4, impact: score outside 0-10 ('15')"));
        assert!(rendered.contains("Review shortfalls (1):"));
    }

    #[test]
    fn table_lists_skipped_sheets() {
        let mut report = sample_report();
        assert!(!to_table(&report, 0).contains("Skipped sheets"));

        report.skipped_sheets.push(SkippedSheet {
            id: "carol".to_string(),
            path: "scores/carol.csv".to_string(),
            reason: "missing column 'team number' in carol".to_string(),
        });
        let rendered = to_table(&report, 0);
        assert!(rendered.contains("Skipped sheets (1):"));
        assert!(rendered.contains("  - could not process scores/carol.csv: missing column"));
    }

    #[test]
    fn table_respects_top_limit() {
        let rendered = to_table(&sample_report(), 1);
        assert!(rendered.contains("top 1 of 2 teams"));
        assert!(!rendered.contains("| Night Owls"));
    }

    #[test]
    fn rows_line_up_with_header() {
        let rendered = to_table(&sample_report(), 0);
        let widths: Vec<_> = rendered
            .lines()
            .filter(|line| line.starts_with('|') || line.starts_with('+'))
            .map(|line| line.chars().count())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
