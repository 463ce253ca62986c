//! Service helpers for leaderboard reads.

use std::cmp::Reverse;

use tracing::warn;

use crate::{
    dto::leaderboard::{LeaderboardEntryView, LeaderboardResponse},
    state::SharedState,
};

/// Return up to `count` entries from the snapshot.
///
/// Before the first refresh completes the snapshot is empty; in that window
/// we read the store directly once without caching the result, so a slow or
/// failing store at startup cannot poison later reads. A failed direct read
/// degrades to an empty board rather than an error.
pub async fn top(state: &SharedState, count: usize) -> LeaderboardResponse {
    let entries = if state.leaderboard().is_empty().await {
        match state.store().load_leaderboard().await {
            Ok(mut entries) => {
                entries.sort_by_key(|entry| Reverse(entry.score));
                entries.truncate(count);
                entries
            }
            Err(err) => {
                warn!(error = %err, "direct leaderboard read failed; serving empty board");
                Vec::new()
            }
        }
    } else {
        state.leaderboard().top(count).await
    };

    LeaderboardResponse {
        entries: entries.into_iter().map(LeaderboardEntryView::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::SystemTime;

    use super::*;
    use crate::dao::models::LeaderboardEntryEntity;
    use crate::dao::testing::MemStore;
    use crate::state::AppState;

    fn entry(username: &str, score: u64) -> LeaderboardEntryEntity {
        LeaderboardEntryEntity {
            username: username.to_string(),
            emoji: "\u{1f3c6}".to_string(),
            score,
            crashes: 0,
            total_games: 1,
            total_wins: 0,
            best_streak: 0,
            updated_at: SystemTime::now(),
        }
    }

    #[tokio::test]
    async fn empty_snapshot_falls_back_to_the_store_without_caching() {
        let store = MemStore::with_leaderboard(vec![entry("bob", 5), entry("alice", 9)]);
        let state = AppState::new(Arc::new(store));

        let response = top(&state, 5).await;
        assert_eq!(response.entries.len(), 2);
        assert_eq!(response.entries[0].username, "alice");

        // The fallback read must not have populated the snapshot.
        assert!(state.leaderboard().is_empty().await);
    }

    #[tokio::test]
    async fn failing_store_with_empty_snapshot_serves_an_empty_board() {
        let state = AppState::new(Arc::new(MemStore::failing()));

        let response = top(&state, 5).await;
        assert!(response.entries.is_empty());
    }

    #[tokio::test]
    async fn populated_snapshot_is_served_without_touching_the_store() {
        let store = Arc::new(MemStore::with_leaderboard(vec![entry("alice", 9)]));
        let state = AppState::new(store.clone());
        state
            .leaderboard()
            .refresh(store.as_ref())
            .await
            .unwrap();

        let response = top(&state, 5).await;
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].username, "alice");
    }
}
