use storage::{
    LocalLedgerStore,
    dto::selection::{RemoteStatus, SubmitSelectionsRequest, SubmitSelectionsResponse},
    error::Result,
    models::{SelectionRecord, UserName, total_points},
    services::git_sync::{GitSync, GitSyncOutcome},
};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::remote::RemoteLedgerStore;
use crate::state::AppState;

/// The full live ledger
pub async fn list_selections(state: &AppState) -> Vec<SelectionRecord> {
    state.ledger.lock().await.export()
}

/// Validate, upsert, persist, and optionally commit one user's picks.
///
/// The upsert runs on a copy of the ledger that only replaces the shared one
/// once the local file has been written.
pub async fn submit(
    state: &AppState,
    request: &SubmitSelectionsRequest,
) -> WebResult<SubmitSelectionsResponse> {
    request.validate()?;
    let user_name = UserName::new(&request.name).map_err(|e| WebError::BadRequest(e.to_string()))?;
    let picks = request.to_picks().map_err(WebError::BadRequest)?;

    let missing = picks.missing(&state.catalogs.categories());
    if !missing.is_empty() {
        return Err(WebError::MissingPicks(missing));
    }
    if picks.is_empty() {
        return Err(WebError::BadRequest(
            "At least one selection is required".to_string(),
        ));
    }

    let mut ledger = state.ledger.lock().await;

    let mut working = ledger.clone();
    let records = working.upsert(&user_name, &picks, &state.catalogs)?;
    let export = working.export();

    let remote = persist(&state.local, state.remote.as_deref(), &export).await?;
    *ledger = working;

    let git = if request.commit {
        Some(commit(state.git.clone(), user_name.as_str()).await)
    } else {
        None
    };

    drop(ledger);

    info!("Predictions saved for '{}'", user_name);

    Ok(SubmitSelectionsResponse {
        name: user_name.as_str().to_string(),
        total_points: total_points(records.iter().map(|r| r.points)),
        records,
        remote,
        git,
    })
}

/// Writes the full ledger locally, then remotely. Only the local write can
/// fail the call.
pub async fn persist(
    local: &LocalLedgerStore,
    remote: Option<&dyn RemoteLedgerStore>,
    records: &[SelectionRecord],
) -> Result<RemoteStatus> {
    local.save(records)?;

    let Some(remote) = remote else {
        return Ok(RemoteStatus::Disabled);
    };

    match remote.replace_rows(records).await {
        Ok(()) => Ok(RemoteStatus::Synced),
        Err(e) => {
            warn!("Remote store '{}' not updated: {}", remote.name(), e);
            Ok(RemoteStatus::Failed(e.to_string()))
        }
    }
}

async fn commit(git: Option<GitSync>, user_name: &str) -> GitSyncOutcome {
    let Some(git) = git else {
        return GitSyncOutcome {
            success: false,
            message: "Git sync is not enabled on this server".to_string(),
        };
    };

    let user_name = user_name.to_string();
    tokio::task::spawn_blocking(move || git.commit_and_push(&user_name))
        .await
        .unwrap_or_else(|e| GitSyncOutcome {
            success: false,
            message: format!("Error committing to GitHub: {}", e),
        })
}
