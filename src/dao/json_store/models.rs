use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dao::models::{LeaderboardEntryEntity, SessionEntity};

/// On-disk shape of the main database document.
///
/// The account subsystem shares this file and stores additional top-level
/// keys (user records); those are ignored here and preserved by never
/// rewriting the main document from this service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DbDocument {
    /// Active sessions keyed by token.
    #[serde(default)]
    pub sessions: HashMap<String, SessionEntity>,
    /// Leaderboard rows in insertion order.
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntryEntity>,
}
