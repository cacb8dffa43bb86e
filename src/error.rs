use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgingError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("no CSV files found in {0}")]
    NoSheetsFound(String),

    #[error("no valid data found in CSV files under {0}")]
    NoUsableSheets(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("missing column '{column}' in {sheet}")]
    MissingColumn { sheet: String, column: String },

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, JudgingError>;
