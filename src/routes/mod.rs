use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Game registration and outcome routes.
pub mod game;
/// Health/introspection route.
pub mod health;
/// Leaderboard read route.
pub mod leaderboard;
/// Simulated market chart route.
pub mod market;
/// Trivia sampling route.
pub mod trivia;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(trivia::router())
        .merge(leaderboard::router())
        .merge(game::router())
        .merge(market::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
