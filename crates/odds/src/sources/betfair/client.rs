use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};

use super::models::{
    CompetitionResult, EventTypeResult, LoginResponse, MarketBook, MarketCatalogue,
};
use crate::error::{OddsError, Result};

const BETTING_URL: &str = "https://api.betfair.com/exchange/betting/rest/v1.0/";
const LOGIN_URL: &str = "https://identitysso.betfair.com/api/login";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct BetfairCredentials {
    pub app_key: String,
    pub username: String,
    pub password: String,
}

impl BetfairCredentials {
    /// `None` unless all three values are present and non-blank.
    pub fn new(
        app_key: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(Self {
            app_key: present(app_key)?,
            username: present(username)?,
            password: present(password)?,
        })
    }

    pub fn from_env() -> Option<Self> {
        Self::new(
            std::env::var("BETFAIR_APP_KEY").ok(),
            std::env::var("BETFAIR_USERNAME").ok(),
            std::env::var("BETFAIR_PASSWORD").ok(),
        )
    }
}

pub struct BetfairClient {
    betting_url: String,
    login_url: String,
    credentials: BetfairCredentials,
    session_token: Option<String>,
    client: reqwest::Client,
}

impl BetfairClient {
    pub fn new(credentials: BetfairCredentials) -> Result<Self> {
        Ok(Self {
            betting_url: BETTING_URL.to_string(),
            login_url: LOGIN_URL.to_string(),
            credentials,
            session_token: None,
            client: reqwest::Client::builder()
                .user_agent(concat!("fetch-odds/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()?,
        })
    }

    pub async fn login(&mut self) -> Result<()> {
        let response = self
            .client
            .post(&self.login_url)
            .header("X-Application", &self.credentials.app_key)
            .header("Accept", "application/json")
            .form(&[
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let login = response.json::<LoginResponse>().await?;
        match (login.status.as_str(), login.token) {
            ("SUCCESS", Some(token)) => {
                info!("Logged in to Betfair as {}", self.credentials.username);
                self.session_token = Some(token);
                Ok(())
            }
            (status, _) => Err(OddsError::LoginError(format!(
                "{} ({})",
                status,
                login.error.unwrap_or_else(|| "no reason given".to_string())
            ))),
        }
    }

    async fn call<B, T>(&self, operation: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self
            .session_token
            .as_deref()
            .ok_or_else(|| OddsError::LoginError("not logged in".to_string()))?;
        let url = format!("{}{}/", self.betting_url, operation);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-Application", &self.credentials.app_key)
            .header("X-Authentication", token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OddsError::ApiError(format!("{} returned {}: {}", operation, status, text)));
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn list_event_types(&self) -> Result<Vec<EventTypeResult>> {
        self.call("listEventTypes", &json!({ "filter": {} })).await
    }

    pub async fn list_competitions(&self, event_type_id: &str) -> Result<Vec<CompetitionResult>> {
        self.call(
            "listCompetitions",
            &json!({ "filter": { "eventTypeIds": [event_type_id] } }),
        )
        .await
    }

    pub async fn search_markets(
        &self,
        event_type_id: &str,
        competition_id: &str,
        text_query: &str,
    ) -> Result<Vec<MarketCatalogue>> {
        self.call(
            "listMarketCatalogue",
            &json!({
                "filter": {
                    "eventTypeIds": [event_type_id],
                    "competitionIds": [competition_id],
                    "textQuery": text_query
                },
                "marketProjection": ["COMPETITION", "EVENT", "EVENT_TYPE", "MARKET_DESCRIPTION"],
                "maxResults": 100
            }),
        )
        .await
    }

    pub async fn market_runners(&self, market_id: &str) -> Result<MarketCatalogue> {
        let mut catalogues: Vec<MarketCatalogue> = self
            .call(
                "listMarketCatalogue",
                &json!({
                    "filter": { "marketIds": [market_id] },
                    "marketProjection": ["RUNNER_DESCRIPTION"],
                    "maxResults": 1
                }),
            )
            .await?;

        if catalogues.is_empty() {
            return Err(OddsError::MarketNotFound(format!("no catalogue for {}", market_id)));
        }
        Ok(catalogues.swap_remove(0))
    }

    pub async fn market_book(&self, market_id: &str) -> Result<MarketBook> {
        let mut books: Vec<MarketBook> = self
            .call(
                "listMarketBook",
                &json!({
                    "marketIds": [market_id],
                    "priceProjection": { "priceData": ["EX_BEST_OFFERS"] }
                }),
            )
            .await?;

        if books.is_empty() {
            return Err(OddsError::MarketNotFound(format!("no market book for {}", market_id)));
        }
        Ok(books.swap_remove(0))
    }
}
