mod client;
pub mod market;
pub mod models;

pub use client::{BetfairClient, BetfairCredentials};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{OddsError, Result};
use crate::models::TeamOdds;
use crate::traits::OddsProvider;

/// Live Super Bowl winner prices from the Betfair Exchange.
pub struct BetfairProvider {
    client: Mutex<BetfairClient>,
}

impl BetfairProvider {
    pub fn new(credentials: BetfairCredentials) -> Result<Self> {
        Ok(Self {
            client: Mutex::new(BetfairClient::new(credentials)?),
        })
    }
}

#[async_trait]
impl OddsProvider for BetfairProvider {
    async fn fetch(&self) -> Result<Vec<TeamOdds>> {
        let mut client = self.client.lock().await;
        client.login().await?;

        let event_types = client.list_event_types().await?;
        let football = market::find_event_type_id(&event_types, "american football")
            .ok_or_else(|| OddsError::MarketNotFound("American Football event type".to_string()))?
            .to_string();

        let competitions = client.list_competitions(&football).await?;
        let nfl = market::find_competition_id(&competitions, "nfl")
            .ok_or_else(|| OddsError::MarketNotFound("NFL competition".to_string()))?
            .to_string();

        let markets = client.search_markets(&football, &nfl, "Super Bowl").await?;
        let market_id = market::find_winner_market(&markets)
            .ok_or_else(|| OddsError::MarketNotFound("Super Bowl winner market".to_string()))?
            .to_string();
        info!("Using market {}", market_id);

        let book = client.market_book(&market_id).await?;
        let runners = client.market_runners(&market_id).await?;

        Ok(market::build_odds_table(&book, &runners))
    }

    fn name(&self) -> &'static str {
        "betfair"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_all_values() {
        let some = |s: &str| Some(s.to_string());

        assert!(BetfairCredentials::new(some("key"), some("user"), some("pw")).is_some());
        assert!(BetfairCredentials::new(some("key"), None, some("pw")).is_none());
        assert!(BetfairCredentials::new(some("key"), some("user"), some("  ")).is_none());
    }
}
