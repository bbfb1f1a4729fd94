use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, Writer};
use tracing::{debug, info};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::SelectionRecord;

/// The authoritative copy of the ledger: a flat CSV table with columns
/// `name, category, selection, points, timestamp`.
#[derive(Debug, Clone)]
pub struct LocalLedgerStore {
    path: PathBuf,
}

impl LocalLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty ledger.
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            debug!("No ledger at {}, starting empty", self.path.display());
            return Ok(Ledger::new());
        }

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&self.path)?;
        let records = reader
            .deserialize::<SelectionRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(Ledger::from_records(records))
    }

    /// Rewrites the whole table. The new contents go to a sibling temp file
    /// first so a failed write never leaves a truncated ledger behind.
    pub fn save(&self, records: &[SelectionRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = Writer::from_path(&tmp)?;
            if records.is_empty() {
                writer.write_record(["name", "category", "selection", "points", "timestamp"])?;
            }
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
