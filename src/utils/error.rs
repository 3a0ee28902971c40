use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("page fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("availability row has {found} cells, expected {expected}")]
    MalformedPage { expected: usize, found: usize },

    #[error("unknown show: {name}")]
    UnknownShow { name: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("data processing error: {message}")]
    Processing { message: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
