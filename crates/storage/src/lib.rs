pub mod dto;
pub mod error;
pub mod ledger;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, StorageError};
pub use ledger::Ledger;
pub use repository::catalog::{CatalogRepository, CatalogSet};
pub use repository::local_store::LocalLedgerStore;
