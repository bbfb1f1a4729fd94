use thiserror::Error;

pub type Result<T> = std::result::Result<T, OddsError>;

#[derive(Error, Debug)]
pub enum OddsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Login failed: {0}")]
    LoginError(String),

    #[error("Exchange API error: {0}")]
    ApiError(String),

    #[error("Market not found: {0}")]
    MarketNotFound(String),
}
