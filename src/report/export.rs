use crate::error::Result;
use crate::types::report::JudgingReport;
use std::io;
use std::path::Path;

/// Writes the whole ranking, unscored teams included, as CSV.
pub fn write_csv(path: &Path, report: &JudgingReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(writer: &mut csv::Writer<W>, report: &JudgingReport) -> Result<()> {
    let mut header = vec![
        "rank".to_string(),
        "team_number".to_string(),
        "team_name".to_string(),
        "reviews".to_string(),
        "final_score".to_string(),
        "rejected_cells".to_string(),
    ];
    header.extend(report.weights.criteria().map(str::to_string));
    writer.write_record(&header)?;

    for entry in &report.ranking {
        let mut record = vec![
            entry.rank.to_string(),
            entry.team.number.to_string(),
            entry.team.name.clone(),
            entry.reviews.to_string(),
            entry
                .score
                .value()
                .map(|score| score.to_string())
                .unwrap_or_default(),
            entry.rejected_cells.to_string(),
        ];
        record.extend(report.weights.criteria().map(|criterion| {
            entry
                .criterion_means
                .get(criterion)
                .map(|mean| mean.to_string())
                .unwrap_or_default()
        }));
        writer.write_record(&record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn export_writes_every_team_with_blank_for_unscored() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("results.csv");
        write_csv(&path, &sample_report()).expect("export should succeed");

        let written = fs::read_to_string(&path).expect("export should be readable");
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                "rank,team_number,team_name,reviews,final_score,rejected_cells,design,impact",
                "1,1,Rustaceans,2,7.2,0,7,6",
                "2,4,Night Owls,0,,2,,",
            ]
        );
    }
}
