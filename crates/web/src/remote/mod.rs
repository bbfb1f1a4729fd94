pub mod credentials;
pub mod sheets;

use storage::{error::Result, models::SelectionRecord};

pub use credentials::ServiceAccountCredentials;
pub use sheets::{SheetsStore, UnavailableRemote};

/// A secondary copy of the ledger. It always receives the full ledger, and
/// its failures never undo the local save.
#[async_trait::async_trait]
pub trait RemoteLedgerStore: Send + Sync {
    async fn replace_rows(&self, records: &[SelectionRecord]) -> Result<()>;

    fn name(&self) -> &'static str;
}
