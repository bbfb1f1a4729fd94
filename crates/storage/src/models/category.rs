use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// An award or outcome being predicted.
///
/// The slug (`as_str`) names the catalog file (`categories/<slug>.csv`) and is
/// the value written in the `category` column of the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AfcWinner,
    NfcWinner,
    SuperBowlWinner,
    Mvp,
    OffensivePlayer,
    DefensivePlayer,
    OffensiveRookie,
    DefensiveRookie,
    ComebackPlayer,
    CoachOfTheYear,
    DarkHorse,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AfcWinner => "afc_winner",
            Self::NfcWinner => "nfc_winner",
            Self::SuperBowlWinner => "super_bowl_winner",
            Self::Mvp => "mvp",
            Self::OffensivePlayer => "offensive_player",
            Self::DefensivePlayer => "defensive_player",
            Self::OffensiveRookie => "offensive_rookie",
            Self::DefensiveRookie => "defensive_rookie",
            Self::ComebackPlayer => "comeback_player",
            Self::CoachOfTheYear => "coach_of_the_year",
            Self::DarkHorse => "dark_horse",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AfcWinner => "AFC Winner",
            Self::NfcWinner => "NFC Winner",
            Self::SuperBowlWinner => "Super Bowl Winner",
            Self::Mvp => "MVP",
            Self::OffensivePlayer => "Offensive Player of the Year",
            Self::DefensivePlayer => "Defensive Player of the Year",
            Self::OffensiveRookie => "Offensive Rookie of the Year",
            Self::DefensiveRookie => "Defensive Rookie of the Year",
            Self::ComebackPlayer => "Comeback Player of the Year",
            Self::CoachOfTheYear => "Coach of the Year",
            Self::DarkHorse => "Dark Horse",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::AfcWinner,
            Self::NfcWinner,
            Self::SuperBowlWinner,
            Self::Mvp,
            Self::OffensivePlayer,
            Self::DefensivePlayer,
            Self::OffensiveRookie,
            Self::DefensiveRookie,
            Self::ComebackPlayer,
            Self::CoachOfTheYear,
            Self::DarkHorse,
        ]
    }

    fn parse_str(s: &str) -> Result<Self, StorageError> {
        let normalized = normalize(s);
        Self::all()
            .iter()
            .copied()
            .find(|c| normalize(c.as_str()) == normalized || normalize(c.display_name()) == normalized)
            .ok_or_else(|| {
                StorageError::Parse(format!(
                    "Unknown category: '{}'. Available: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// Lowercases and drops separators so "AFC Winner", "afc-winner" and
/// "afc_winner" compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<&str> for Category {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl FromStr for Category {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("afc_winner").unwrap(), Category::AfcWinner);
        assert_eq!(Category::from_str("AFC Winner").unwrap(), Category::AfcWinner);
        assert_eq!("nfc-winner".parse::<Category>().unwrap(), Category::NfcWinner);
        assert_eq!(Category::try_from("MVP").unwrap(), Category::Mvp);
        assert_eq!(Category::try_from(" Dark Horse ").unwrap(), Category::DarkHorse);

        assert!(Category::from_str("best_punter").is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_slug_round_trips_through_parse() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
            assert_eq!(category.display_name().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let cell = csv_cell(Category::SuperBowlWinner);
        assert_eq!(cell, "super_bowl_winner");
    }

    fn csv_cell(category: Category) -> String {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize([category]).unwrap();
        let bytes = writer.into_inner().unwrap();
        String::from_utf8(bytes).unwrap().trim().to_string()
    }
}
