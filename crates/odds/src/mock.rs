use async_trait::async_trait;

use crate::error::Result;
use crate::models::TeamOdds;
use crate::traits::OddsProvider;

const MOCK_ODDS: [(&str, f64); 32] = [
    ("Kansas City Chiefs", 5.5),
    ("Buffalo Bills", 7.0),
    ("San Francisco 49ers", 8.0),
    ("Philadelphia Eagles", 9.0),
    ("Baltimore Ravens", 10.0),
    ("Detroit Lions", 12.0),
    ("Green Bay Packers", 15.0),
    ("Miami Dolphins", 18.0),
    ("Houston Texans", 20.0),
    ("Dallas Cowboys", 22.0),
    ("Los Angeles Chargers", 25.0),
    ("Cincinnati Bengals", 28.0),
    ("Pittsburgh Steelers", 30.0),
    ("Minnesota Vikings", 35.0),
    ("Atlanta Falcons", 40.0),
    ("Los Angeles Rams", 45.0),
    ("Seattle Seahawks", 50.0),
    ("Tampa Bay Buccaneers", 55.0),
    ("Indianapolis Colts", 60.0),
    ("New York Jets", 65.0),
    ("Cleveland Browns", 70.0),
    ("Jacksonville Jaguars", 75.0),
    ("Denver Broncos", 80.0),
    ("Washington Commanders", 85.0),
    ("Arizona Cardinals", 90.0),
    ("Tennessee Titans", 95.0),
    ("New Orleans Saints", 100.0),
    ("Las Vegas Raiders", 110.0),
    ("Chicago Bears", 120.0),
    ("Carolina Panthers", 130.0),
    ("New York Giants", 140.0),
    ("New England Patriots", 150.0),
];

/// A fixed table used when the exchange is not configured or unreachable.
pub fn mock_odds() -> Vec<TeamOdds> {
    MOCK_ODDS
        .iter()
        .map(|(team, odds)| TeamOdds::new(*team, Some(*odds)))
        .collect()
}

pub struct MockProvider;

#[async_trait]
impl OddsProvider for MockProvider {
    async fn fetch(&self) -> Result<Vec<TeamOdds>> {
        Ok(mock_odds())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_table_is_sorted_and_complete() {
        let odds = mock_odds();

        assert_eq!(odds.len(), 32);
        assert_eq!(odds[0].team, "Kansas City Chiefs");
        assert!(odds.windows(2).all(|w| w[0].odds <= w[1].odds));
    }

    #[tokio::test]
    async fn test_mock_provider() {
        let odds = MockProvider.fetch().await.unwrap();
        assert_eq!(odds.last().map(|o| o.team.as_str()), Some("New England Patriots"));
    }
}
