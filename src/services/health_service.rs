use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Build the health payload, flagging degraded mode when the store is
/// unreachable. Cache contents keep serving either way.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let trivia_pools = state.trivia().sizes().await.into();
    let active_games = state.games().len();

    match state.store().health_check().await {
        Ok(()) => HealthResponse::ok(trivia_pools, active_games),
        Err(err) => {
            warn!(error = %err, "store health check failed");
            HealthResponse::degraded(trivia_pools, active_games)
        }
    }
}
