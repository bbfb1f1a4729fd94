pub mod error;
pub mod export;
pub mod mock;
pub mod models;
pub mod sources;
pub mod traits;

pub use error::{OddsError, Result};
pub use mock::MockProvider;
pub use models::TeamOdds;
pub use sources::betfair::{BetfairCredentials, BetfairProvider};
pub use traits::OddsProvider;
