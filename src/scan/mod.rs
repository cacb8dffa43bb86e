pub mod csv_sheet;
pub mod filesystem;

use crate::engine::weights::CriteriaWeights;
use crate::error::{JudgingError, Result};
use crate::types::report::{SheetSource, SkippedSheet};
use crate::types::score::Sheet;
use csv_sheet::SheetLayout;
use filesystem::{list_csv_files, sha256_hex, sheet_id};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct LoadedSheets {
    pub sheets: Vec<Sheet>,
    pub sources: Vec<SheetSource>,
    pub skipped: Vec<SkippedSheet>,
}

/// Reads every CSV sheet in `folder`. Unreadable sheets are recorded in
/// `skipped`; the call fails only when nothing usable remains.
pub fn discover(
    folder: &Path,
    layout: &SheetLayout,
    criteria: &CriteriaWeights,
) -> Result<LoadedSheets> {
    if !folder.exists() {
        return Err(JudgingError::PathNotFound(folder.display().to_string()));
    }
    if !folder.is_dir() {
        return Err(JudgingError::NotADirectory(folder.display().to_string()));
    }

    let files = list_csv_files(folder);
    if files.is_empty() {
        return Err(JudgingError::NoSheetsFound(folder.display().to_string()));
    }

    let mut loaded = LoadedSheets::default();
    for path in files {
        let id = sheet_id(&path);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                loaded.skipped.push(SkippedSheet {
                    id,
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        match csv_sheet::parse_sheet(&id, &text, layout, criteria) {
            Ok(sheet) => {
                debug!(sheet = %id, rows = sheet.rows.len(), "loaded sheet");
                loaded.sources.push(SheetSource {
                    id,
                    path: path.display().to_string(),
                    sha256: sha256_hex(&bytes),
                    rows: sheet.rows.len(),
                });
                loaded.sheets.push(sheet);
            }
            Err(e) => {
                warn!("could not process {}: {}", path.display(), e);
                loaded.skipped.push(SkippedSheet {
                    id,
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if loaded.sheets.is_empty() {
        return Err(JudgingError::NoUsableSheets(folder.display().to_string()));
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::JudgingConfig;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "Team Number,Team Name,Design (/10),Originality (/10),Impact (/10),Technical (/10),Notes\n";

    #[test]
    fn discover_loads_sheets_and_skips_broken_ones() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("alice.csv"),
            format!("{HEADER}instructions,,,,,,\n1,Rustaceans,8,9,7,10,\n"),
        )
        .expect("alice should write");
        fs::write(dir.path().join("broken.csv"), "who,what\n1,2\n").expect("broken should write");

        let cfg = JudgingConfig::default();
        let loaded = discover(dir.path(), &cfg.sheet_layout(), &cfg.weights())
            .expect("discover should succeed");

        assert_eq!(loaded.sheets.len(), 1);
        assert_eq!(loaded.sheets[0].id, "alice");
        assert_eq!(loaded.sheets[0].rows.len(), 1);
        assert_eq!(loaded.sources[0].rows, 1);
        assert_eq!(loaded.sources[0].sha256.len(), 64);

        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].id, "broken");
        assert!(loaded.skipped[0].reason.contains("team number"));
    }

    #[test]
    fn discover_requires_csv_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = JudgingConfig::default();
        let err = discover(dir.path(), &cfg.sheet_layout(), &cfg.weights())
            .expect_err("empty folder should fail");
        assert!(matches!(err, JudgingError::NoSheetsFound(_)));
    }

    #[test]
    fn discover_fails_when_no_sheet_is_usable() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("broken.csv"), "who,what\n1,2\n").expect("broken should write");
        let cfg = JudgingConfig::default();
        let err = discover(dir.path(), &cfg.sheet_layout(), &cfg.weights())
            .expect_err("unusable folder should fail");
        assert!(matches!(err, JudgingError::NoUsableSheets(_)));
    }

    #[test]
    fn discover_rejects_missing_folder() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = JudgingConfig::default();
        let err = discover(&dir.path().join("nope"), &cfg.sheet_layout(), &cfg.weights())
            .expect_err("missing folder should fail");
        assert!(matches!(err, JudgingError::PathNotFound(_)));
    }
}
