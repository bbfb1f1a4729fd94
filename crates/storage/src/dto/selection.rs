use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Category, Decimal, Picks, SelectionRecord};
use crate::services::git_sync::GitSyncOutcome;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitSelectionsRequest {
    #[validate(length(min = 1, max = 80, message = "name must be between 1 and 80 characters"))]
    pub name: String,
    /// Category slug or display name to the chosen label.
    #[schema(value_type = Object)]
    pub picks: BTreeMap<String, String>,
    /// Also commit and push the ledger file after saving.
    #[serde(default)]
    pub commit: bool,
}

impl SubmitSelectionsRequest {
    pub fn to_picks(&self) -> Result<Picks, String> {
        let mut picks = Picks::new();
        for (key, selection) in &self.picks {
            let category = key.parse::<Category>().map_err(|e| e.to_string())?;
            if picks.get(category).is_some() {
                return Err(format!("{} was picked more than once", category));
            }
            picks.set(category, selection.as_str());
        }
        Ok(picks)
    }
}

/// What happened to the remote copy of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RemoteStatus {
    Disabled,
    Synced,
    Failed(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitSelectionsResponse {
    pub name: String,
    pub records: Vec<SelectionRecord>,
    pub total_points: Decimal,
    pub remote: RemoteStatus,
    pub git: Option<GitSyncOutcome>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MissingPicksResponse {
    pub error: String,
    /// Display names of the categories left blank.
    pub missing: Vec<String>,
}

impl MissingPicksResponse {
    pub fn new(missing: &[Category]) -> Self {
        Self {
            error: "Please enter your name and make every selection before submitting".to_string(),
            missing: missing.iter().map(|c| c.display_name().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(picks: &[(&str, &str)]) -> SubmitSelectionsRequest {
        SubmitSelectionsRequest {
            name: "Jane".to_string(),
            picks: picks
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            commit: false,
        }
    }

    #[test]
    fn test_to_picks_accepts_slugs_and_names() {
        let picks = request(&[("afc_winner", "Chiefs"), ("NFC Winner", "Lions")])
            .to_picks()
            .unwrap();

        assert_eq!(picks.get(Category::AfcWinner), Some("Chiefs"));
        assert_eq!(picks.get(Category::NfcWinner), Some("Lions"));
    }

    #[test]
    fn test_to_picks_rejects_unknown_category() {
        assert!(request(&[("best_punter", "Someone")]).to_picks().is_err());
    }

    #[test]
    fn test_to_picks_rejects_same_category_twice() {
        assert!(
            request(&[("afc_winner", "Chiefs"), ("AFC Winner", "Bills")])
                .to_picks()
                .is_err()
        );
    }

    #[test]
    fn test_name_length_validated() {
        let mut req = request(&[]);
        req.name = String::new();
        assert!(req.validate().is_err());
    }
}
