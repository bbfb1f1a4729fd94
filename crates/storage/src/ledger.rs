use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::{Category, Picks, SelectionRecord, UserName};
use crate::repository::catalog::CatalogSet;

/// Every user's current picks.
///
/// Resubmitting under the same name replaces all of that user's records;
/// categories left out of the new submission are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<SelectionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SelectionRecord>) -> Self {
        Self { records }
    }

    pub fn upsert(
        &mut self,
        user_name: &UserName,
        picks: &Picks,
        catalogs: &CatalogSet,
    ) -> Result<Vec<SelectionRecord>> {
        let now = Local::now().naive_local();
        self.upsert_at(user_name, picks, catalogs, now)
    }

    /// Resolves every pick against its catalog before touching the ledger, so
    /// a bad pick leaves the user's previous submission in place.
    pub fn upsert_at(
        &mut self,
        user_name: &UserName,
        picks: &Picks,
        catalogs: &CatalogSet,
        timestamp: NaiveDateTime,
    ) -> Result<Vec<SelectionRecord>> {
        let mut fresh = Vec::with_capacity(picks.len());

        for (category, selection) in picks.iter() {
            let entry = catalogs.get(category)?.find(selection).ok_or_else(|| {
                StorageError::UnknownSelection {
                    category,
                    selection: selection.to_string(),
                }
            })?;

            fresh.push(SelectionRecord {
                user_name: user_name.as_str().to_string(),
                category,
                selection: entry.selection.clone(),
                points: entry.points,
                timestamp,
            });
        }

        let before = self.records.len();
        self.records.retain(|r| r.user_name != user_name.as_str());
        let replaced = before - self.records.len();
        self.records.extend(fresh.iter().cloned());

        info!(
            "Stored {} picks for '{}' (replaced {})",
            fresh.len(),
            user_name,
            replaced
        );

        Ok(fresh)
    }

    /// The whole ledger, for handing to a store.
    pub fn export(&self) -> Vec<SelectionRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[SelectionRecord] {
        &self.records
    }

    pub fn records_for(&self, user_name: &str) -> Vec<&SelectionRecord> {
        self.records
            .iter()
            .filter(|r| r.user_name == user_name)
            .collect()
    }

    pub fn pick_for(&self, user_name: &str, category: Category) -> Option<&SelectionRecord> {
        self.records
            .iter()
            .find(|r| r.user_name == user_name && r.category == category)
    }

    pub fn users(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.records.iter().map(|r| r.user_name.as_str()).collect();
        names.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
