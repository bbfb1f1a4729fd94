use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Category;

/// Which picks to grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PickSource {
    /// The frozen legacy table of a closed period.
    #[default]
    History,
    /// The current ledger.
    Live,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardFilter {
    #[serde(default)]
    pub source: PickSource,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResult {
    pub category: Category,
    /// The predicted label, absent when there was no pick or it could not be read.
    pub label: Option<String>,
    /// The original text of a pick that could not be parsed.
    pub raw: Option<String>,
    pub points: Decimal,
    pub awarded: Decimal,
    pub correct: bool,
    pub parsed: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Standing {
    pub rank: u32,
    pub user_name: String,
    pub total_points: Decimal,
    pub correct_count: u32,
    pub scored_categories: u32,
    pub breakdown: Vec<CategoryResult>,
}

impl Standing {
    /// "k / N"
    pub fn correct_display(&self) -> String {
        format!("{} / {}", self.correct_count, self.scored_categories)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Leaderboard {
    pub scored_categories: u32,
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    pub fn standing_for(&self, user_name: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.user_name == user_name)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingResponse {
    #[serde(flatten)]
    pub standing: Standing,
    pub correct: String,
}

impl From<Standing> for StandingResponse {
    fn from(standing: Standing) -> Self {
        let correct = standing.correct_display();
        Self { standing, correct }
    }
}
