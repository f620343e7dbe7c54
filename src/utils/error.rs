use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("sheet '{sheet}' row {row}: schema needs at least {expected} columns, row has {actual}")]
    MalformedRowError {
        sheet: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("sheet service returned HTTP {status} for '{sheet}': {body}")]
    SourceUnavailableError {
        sheet: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, SyncError>;
