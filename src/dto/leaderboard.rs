//! DTO definitions for the leaderboard read surface.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dao::models::LeaderboardEntryEntity;
use crate::dto::format_system_time;

/// Query parameters accepted by the leaderboard endpoint.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct LeaderboardQuery {
    /// Number of entries to return, between 1 and 20.
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: usize,
}

fn default_count() -> usize {
    20
}

/// One leaderboard row as served to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntryView {
    /// Player name.
    pub username: String,
    /// Emoji avatar.
    pub emoji: String,
    /// Highest score reached.
    pub score: u64,
    /// Total busts.
    pub crashes: u32,
    /// Total games played.
    pub total_games: u32,
    /// Games that reached the winning amount.
    pub total_wins: u32,
    /// Longest survive streak.
    pub best_streak: u32,
    /// RFC 3339 timestamp of the last update.
    pub updated_at: String,
}

impl From<LeaderboardEntryEntity> for LeaderboardEntryView {
    fn from(entity: LeaderboardEntryEntity) -> Self {
        Self {
            username: entity.username,
            emoji: entity.emoji,
            score: entity.score,
            crashes: entity.crashes,
            total_games: entity.total_games,
            total_wins: entity.total_wins,
            best_streak: entity.best_streak,
            updated_at: format_system_time(entity.updated_at),
        }
    }
}

/// Response wrapping the current top entries.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Entries sorted score-descending.
    pub entries: Vec<LeaderboardEntryView>,
}
