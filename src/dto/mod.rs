use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game surface payloads (registration, outcomes, state sync).
pub mod game;
/// Health/introspection payload.
pub mod health;
/// Leaderboard read payloads.
pub mod leaderboard;
/// Simulated market chart payload.
pub mod market;
/// Trivia sampling payloads.
pub mod trivia;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
