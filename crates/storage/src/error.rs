use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown selection '{selection}' for {category}")]
    UnknownSelection { category: Category, selection: String },

    #[error("Remote authentication error: {0}")]
    RemoteAuth(String),

    #[error("Remote write error: {0}")]
    RemoteWrite(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_remote(&self) -> bool {
        matches!(self, StorageError::RemoteAuth(_) | StorageError::RemoteWrite(_))
    }
}
