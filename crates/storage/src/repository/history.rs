use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::ledger::Ledger;
use crate::models::{Category, HistoricalPick};

/// Reads a closed period's picks from the wide legacy table: a `name` column,
/// one column per category slug holding "label - points" text, and an
/// optional `timestamp`. Unrecognised columns are skipped. Rows may be short
/// or long: a cell that is not there is no pick, and a row the reader cannot
/// decode is logged and skipped.
pub struct HistoryRepository {
    path: PathBuf,
}

impl HistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<HistoricalPick>> {
        if !self.path.is_file() {
            return Err(StorageError::NotFound(format!(
                "pick history ({})",
                self.path.display()
            )));
        }

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let name_idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case("name"))
            .ok_or_else(|| StorageError::Parse("pick history has no 'name' column".to_string()))?;

        let columns: Vec<(usize, Category)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != name_idx)
            .filter_map(|(idx, header)| match header.parse::<Category>() {
                Ok(category) => Some((idx, category)),
                Err(_) => {
                    debug!("Ignoring history column '{}'", header);
                    None
                }
            })
            .collect();

        let mut picks = Vec::new();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable history row in {}: {}", self.path.display(), e);
                    continue;
                }
            };
            let user_name = record.get(name_idx).unwrap_or_default();
            if user_name.is_empty() {
                continue;
            }
            for &(idx, category) in &columns {
                match record.get(idx) {
                    Some(cell) if !cell.is_empty() => {
                        picks.push(HistoricalPick::legacy(user_name, category, cell));
                    }
                    _ => {}
                }
            }
        }

        info!(
            "Loaded {} historical picks across {} categories from {}",
            picks.len(),
            columns.len(),
            self.path.display()
        );
        Ok(picks)
    }
}

/// The live ledger as gradeable picks.
pub fn picks_from_ledger(ledger: &Ledger) -> Vec<HistoricalPick> {
    ledger
        .records()
        .iter()
        .map(|r| {
            HistoricalPick::structured(r.user_name.clone(), r.category, r.selection.clone(), r.points)
        })
        .collect()
}
