/// OpenAPI documentation generation.
pub mod documentation;
/// Game registration, outcome, and state-sync operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Leaderboard reads with direct-store fallback.
pub mod leaderboard_service;
/// Periodic leaderboard snapshot refresh task.
pub mod leaderboard_supervisor;
/// Simulated market chart generation.
pub mod market_service;
/// Trivia pool seeding and refill tasks.
pub mod refill_supervisor;
/// Trivia sampling with per-call answer shuffling.
pub mod trivia_service;
