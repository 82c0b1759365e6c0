use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown transaction id: {0}")]
    UnknownTransaction(usize),

    #[error("Unknown timeframe: '{0}' (expected week, month, or year)")]
    InvalidTimeframe(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
