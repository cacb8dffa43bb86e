use crate::error::{JudgingError, Result};
use crate::types::config::JudgingConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "judging.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".judging/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/judging/config.toml";

/// Loads and merges global, folder (or explicit) and local config layers.
/// Returns `None` when no layer exists.
pub fn load_config(folder: &Path, explicit: Option<&Path>) -> Result<Option<JudgingConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(folder, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    folder: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<JudgingConfig>> {
    let primary = match explicit {
        Some(path) if !path.exists() => {
            return Err(JudgingError::PathNotFound(path.display().to_string()));
        }
        Some(path) if !path.is_file() => {
            return Err(JudgingError::ConfigParse(format!(
                "{} is not a file",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => folder.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &primary)?;
    found |= merge_file_if_exists(&mut merged, &folder.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }

    let cfg: JudgingConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| JudgingError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| JudgingError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
