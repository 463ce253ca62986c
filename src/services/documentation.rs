use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Greed Trial backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::trivia::get_trivia,
        crate::routes::leaderboard::get_leaderboard,
        crate::routes::game::start_game,
        crate::routes::game::next_outcome,
        crate::routes::game::sync_state,
        crate::routes::game::end_game,
        crate::routes::market::get_market_chart,
    ),
    components(
        schemas(
            crate::dao::models::Difficulty,
            crate::dto::health::HealthResponse,
            crate::dto::health::TriviaPoolSizes,
            crate::dto::trivia::QuestionView,
            crate::dto::trivia::TriviaResponse,
            crate::dto::leaderboard::LeaderboardEntryView,
            crate::dto::leaderboard::LeaderboardResponse,
            crate::dto::game::StartGameRequest,
            crate::dto::game::StartGameResponse,
            crate::dto::game::OutcomeRequest,
            crate::dto::game::OutcomeResponse,
            crate::dto::game::SyncStateRequest,
            crate::dto::game::EndGameRequest,
            crate::dto::market::MarketChartResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trivia", description = "Trivia question sampling"),
        (name = "leaderboard", description = "Leaderboard reads"),
        (name = "game", description = "Active game registration and rigged outcomes"),
        (name = "market", description = "Simulated market charts"),
    )
)]
pub struct ApiDoc;
