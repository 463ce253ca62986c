use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;
use utoipa::ToSchema;

/// Difficulty tier for trivia questions and pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Tier served for levels at the start of a run.
    #[default]
    Easy,
    /// Middle tier.
    Medium,
    /// Hardest tier offered by the question source.
    Hard,
}

impl Difficulty {
    /// All tiers, in refill order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name used in API calls and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trivia question as persisted in snapshots and returned by the external source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionEntity {
    /// Question text, already decoded to plain text.
    #[serde(rename = "question")]
    pub text: String,
    /// The single correct answer.
    pub correct_answer: String,
    /// Exactly three distractor answers.
    pub incorrect_answers: [String; 3],
    /// Source category label (e.g. "General Knowledge").
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".to_string()
}

/// Full trivia cache contents persisted for crash-resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriviaSnapshotEntity {
    /// Easy tier pool contents.
    #[serde(default)]
    pub easy: Vec<QuestionEntity>,
    /// Medium tier pool contents.
    #[serde(default)]
    pub medium: Vec<QuestionEntity>,
    /// Hard tier pool contents.
    #[serde(default)]
    pub hard: Vec<QuestionEntity>,
}

/// One leaderboard row per username; replace-on-write inside the durable store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntryEntity {
    /// Unique player name.
    pub username: String,
    /// Emoji avatar chosen by the player.
    pub emoji: String,
    /// Highest score reached across all games.
    pub score: u64,
    /// Total number of busts across all games.
    pub crashes: u32,
    /// Total games played.
    pub total_games: u32,
    /// Games that reached the winning amount.
    pub total_wins: u32,
    /// Longest survive streak across all games.
    pub best_streak: u32,
    /// Last time this row was rewritten.
    pub updated_at: SystemTime,
}

/// Stored session record; the core only ever looks these up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEntity {
    /// Player the session belongs to.
    pub username: String,
    /// Session creation time, used for the 24h expiry check.
    pub created_at: SystemTime,
}
