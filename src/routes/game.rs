use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::{
    dto::game::{
        EndGameRequest, OutcomeRequest, OutcomeResponse, StartGameRequest, StartGameResponse,
        SyncStateRequest,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

#[utoipa::path(
    post,
    path = "/api/game",
    tag = "game",
    request_body = StartGameRequest,
    responses(
        (status = 200, description = "Game registered", body = StartGameResponse),
        (status = 401, description = "Unknown or expired session")
    )
)]
/// Register an active game for a validated session token.
pub async fn start_game(
    State(state): State<SharedState>,
    Json(payload): Json<StartGameRequest>,
) -> Result<Json<StartGameResponse>, AppError> {
    payload.validate()?;
    let response = game_service::start_game(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/game/outcome",
    tag = "game",
    request_body = OutcomeRequest,
    responses((status = 200, description = "Next rigged tick", body = OutcomeResponse))
)]
/// Return the next rigged outcome for a session's game.
pub async fn next_outcome(
    State(state): State<SharedState>,
    Json(payload): Json<OutcomeRequest>,
) -> Result<Json<OutcomeResponse>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::next_outcome(&state, payload)))
}

#[utoipa::path(
    put,
    path = "/api/game",
    tag = "game",
    request_body = SyncStateRequest,
    responses(
        (status = 204, description = "State recorded"),
        (status = 404, description = "No active game for token")
    )
)]
/// Push the caller-owned game fields back into the registry.
pub async fn sync_state(
    State(state): State<SharedState>,
    Json(payload): Json<SyncStateRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    game_service::sync_state(&state, payload)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/game",
    tag = "game",
    request_body = EndGameRequest,
    responses((status = 204, description = "Game state evicted"))
)]
/// Evict a session's game state.
pub async fn end_game(
    State(state): State<SharedState>,
    Json(payload): Json<EndGameRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    game_service::end_game(&state, payload);
    Ok(StatusCode::NO_CONTENT)
}

/// Configure the game routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/game", post(start_game).put(sync_state).delete(end_game))
        .route("/api/game/outcome", post(next_outcome))
}
