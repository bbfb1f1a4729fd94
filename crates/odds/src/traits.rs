use crate::Result;
use crate::models::TeamOdds;

#[async_trait::async_trait]
pub trait OddsProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TeamOdds>>;

    fn name(&self) -> &'static str;
}
