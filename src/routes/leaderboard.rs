use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::leaderboard::{LeaderboardQuery, LeaderboardResponse},
    error::AppError,
    services::leaderboard_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = "leaderboard",
    params(LeaderboardQuery),
    responses((status = 200, description = "Current top entries", body = LeaderboardResponse))
)]
/// Return the top leaderboard entries from the read cache.
pub async fn get_leaderboard(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    query.validate()?;
    let payload = leaderboard_service::top(&state, query.count).await;
    Ok(Json(payload))
}

/// Configure the leaderboard routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}
