use serde::Serialize;
use utoipa::ToSchema;

use crate::state::trivia::PoolSizes;

/// Per-tier trivia pool sizes exposed for operational visibility.
#[derive(Debug, Serialize, ToSchema)]
pub struct TriviaPoolSizes {
    /// Easy tier size.
    pub easy: usize,
    /// Medium tier size.
    pub medium: usize,
    /// Hard tier size.
    pub hard: usize,
}

impl From<PoolSizes> for TriviaPoolSizes {
    fn from(sizes: PoolSizes) -> Self {
        Self {
            easy: sizes.easy,
            medium: sizes.medium,
            hard: sizes.hard,
        }
    }
}

/// Health response returned by the `/api/health` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Current trivia pool sizes per tier.
    pub trivia_pools: TriviaPoolSizes,
    /// Number of in-progress games.
    pub active_games: usize,
}

impl HealthResponse {
    /// Healthy payload with the current cache readings.
    pub fn ok(trivia_pools: TriviaPoolSizes, active_games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            trivia_pools,
            active_games,
        }
    }

    /// Degraded payload; the caches keep serving their last contents.
    pub fn degraded(trivia_pools: TriviaPoolSizes, active_games: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            trivia_pools,
            active_games,
        }
    }
}
