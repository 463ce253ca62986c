//! DTO definitions for the game surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload registering a new active game for a session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StartGameRequest {
    /// Session token identifying the player.
    #[validate(length(min = 1))]
    pub token: String,
    /// Starting difficulty level.
    #[serde(default)]
    pub level: u32,
}

/// Response confirming a registered game.
#[derive(Debug, Serialize, ToSchema)]
pub struct StartGameResponse {
    /// Player the validated session belongs to.
    pub username: String,
}

/// Payload requesting the next outcome for a session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct OutcomeRequest {
    /// Session token identifying the game.
    #[validate(length(min = 1))]
    pub token: String,
}

/// The next rigged tick for a game: 1 survives, 0 busts.
#[derive(Debug, Serialize, ToSchema)]
pub struct OutcomeResponse {
    /// 0 or 1.
    pub outcome: u8,
}

/// Caller-owned game fields pushed back into the registry.
///
/// The outcome generator reads these for its corrective rules but never
/// writes them; the client reports them after applying each outcome.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SyncStateRequest {
    /// Session token identifying the game.
    #[validate(length(min = 1))]
    pub token: String,
    /// Accumulated money.
    pub money: u64,
    /// Current survive streak.
    pub streak: u32,
    /// Current difficulty level.
    pub level: u32,
}

/// Payload evicting a session's game state.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EndGameRequest {
    /// Session token identifying the game.
    #[validate(length(min = 1))]
    pub token: String,
}
