use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::trivia::{TriviaQuery, TriviaResponse},
    error::AppError,
    services::trivia_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/api/trivia",
    tag = "trivia",
    params(TriviaQuery),
    responses((status = 200, description = "Sampled question batch", body = TriviaResponse))
)]
/// Return a randomized question batch for the requested difficulty.
pub async fn get_trivia(
    State(state): State<SharedState>,
    Query(query): Query<TriviaQuery>,
) -> Result<Json<TriviaResponse>, AppError> {
    query.validate()?;
    let payload = trivia_service::sample(&state, query).await;
    Ok(Json(payload))
}

/// Configure the trivia routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/trivia", get(get_trivia))
}
