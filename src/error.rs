use thiserror::Error;

#[derive(Error, Debug)]
pub enum DifferentialError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// The action log or puzzle record is missing or unusable.
    #[error("Data Unavailable: {0}")]
    DataUnavailable(String),

    /// The action log breaks an invariant the game state must uphold.
    #[error("Invalid Action Log: {0}")]
    InvalidActionLog(String),
}

pub type DfResult<T> = Result<T, DifferentialError>;
