use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventTypeResult {
    #[serde(rename = "eventType")]
    pub event_type: EventType,
    #[serde(rename = "marketCount", default)]
    pub market_count: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompetitionResult {
    pub competition: Competition,
    #[serde(rename = "marketCount", default)]
    pub market_count: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Competition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MarketCatalogue {
    #[serde(rename = "marketId")]
    pub market_id: String,
    #[serde(rename = "marketName", default)]
    pub market_name: String,
    #[serde(default)]
    pub runners: Vec<RunnerCatalog>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RunnerCatalog {
    #[serde(rename = "selectionId")]
    pub selection_id: i64,
    #[serde(rename = "runnerName")]
    pub runner_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MarketBook {
    #[serde(rename = "marketId")]
    pub market_id: String,
    #[serde(default)]
    pub runners: Vec<Runner>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Runner {
    #[serde(rename = "selectionId")]
    pub selection_id: i64,
    pub status: String,
    #[serde(default)]
    pub ex: Option<ExchangePrices>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangePrices {
    #[serde(rename = "availableToBack", default)]
    pub available_to_back: Vec<PriceSize>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PriceSize {
    pub price: f64,
    pub size: f64,
}

impl Runner {
    pub fn best_back_price(&self) -> Option<f64> {
        self.ex
            .as_ref()
            .and_then(|ex| ex.available_to_back.first())
            .map(|p| p.price)
    }

    pub fn is_active(&self) -> bool {
        self.status == "ACTIVE"
    }
}
