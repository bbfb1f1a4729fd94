use std::path::PathBuf;
use std::sync::Arc;

use storage::{CatalogSet, Ledger, LocalLedgerStore, services::git_sync::GitSync};
use tokio::sync::Mutex;

use crate::remote::RemoteLedgerStore;

/// Everything a request needs. The ledger lock is held for a whole
/// submit-and-persist cycle, so submissions are handled one at a time.
#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<CatalogSet>,
    pub ledger: Arc<Mutex<Ledger>>,
    pub local: LocalLedgerStore,
    pub remote: Option<Arc<dyn RemoteLedgerStore>>,
    pub git: Option<GitSync>,
    pub history_path: PathBuf,
    pub outcomes_path: PathBuf,
}
