use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{JudgingError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Weight per criterion. Names match CSV headers case-insensitively,
# ignoring a trailing annotation such as " (/10)".
[criteria]
design = 1.0
originality = 1.0
impact = 1.5
technical = 1.5

[review]
# Teams with fewer valid reviews are reported for follow-up.
min_reviews = 2

[report]
# Entries shown by the table and markdown formats; 0 shows all.
top = 3

[sheets]
team_number_column = "team number"
team_name_column = "team name"
# Rows under the header that hold instructions rather than scores.
skip_rows = 1

# Expected teams; listed teams that nobody scored are reported as unscored.
# [[roster]]
# number = 1
# name = "Example Team"
"#;

pub fn write_default_config(folder: &Path, force: bool) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(JudgingError::NotADirectory(folder.display().to_string()));
    }
    let path = folder.join(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        return Err(JudgingError::AlreadyExists(path.display().to_string()));
    }
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::JudgingConfig;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_the_built_in_defaults() {
        let cfg: JudgingConfig =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weights(), JudgingConfig::default_weights());
        assert_eq!(cfg.sheet_layout(), JudgingConfig::default().sheet_layout());
        assert_eq!(cfg.min_reviews(), JudgingConfig::default().min_reviews());
        assert_eq!(cfg.top(), JudgingConfig::default().top());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[report]\ntop = 9\n")
            .expect("existing config should write");

        let err = write_default_config(dir.path(), false).expect_err("overwrite should fail");
        assert!(matches!(err, JudgingError::AlreadyExists(_)));

        let path = write_default_config(dir.path(), true).expect("forced write should succeed");
        let written = fs::read_to_string(path).expect("config should be readable");
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }
}
