use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::{Category, Outcome, OutcomeMap};

/// Reads final results from a `category,winner` table. Several rows for the
/// same category make every listed winner an accepted answer.
pub struct OutcomeRepository {
    path: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
struct OutcomeRow {
    category: String,
    winner: String,
}

impl OutcomeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<OutcomeMap> {
        if !self.path.is_file() {
            return Err(StorageError::NotFound(format!(
                "outcomes ({})",
                self.path.display()
            )));
        }

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&self.path)?;
        let mut outcomes = OutcomeMap::new();

        for row in reader.deserialize::<OutcomeRow>() {
            let row = row?;
            if row.winner.is_empty() {
                continue;
            }
            let category: Category = row.category.parse()?;
            match outcomes.get_mut(&category) {
                Some(outcome) => outcome.push(row.winner),
                None => {
                    outcomes.insert(category, Outcome::Single(row.winner));
                }
            }
        }

        info!("Loaded outcomes for {} categories", outcomes.len());
        Ok(outcomes)
    }
}
