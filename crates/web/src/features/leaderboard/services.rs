use storage::{
    dto::leaderboard::{Leaderboard, PickSource},
    error::Result,
    repository::{
        history::{HistoryRepository, picks_from_ledger},
        outcome::OutcomeRepository,
    },
    services::scoring,
};

use crate::state::AppState;

/// Grade the chosen picks against the outcomes table, read fresh for each run
pub async fn get_leaderboard(state: &AppState, source: PickSource) -> Result<Leaderboard> {
    let outcomes = OutcomeRepository::new(&state.outcomes_path).load()?;

    let picks = match source {
        PickSource::History => HistoryRepository::new(&state.history_path).load()?,
        PickSource::Live => picks_from_ledger(&*state.ledger.lock().await),
    };

    Ok(scoring::score(&picks, &outcomes))
}
