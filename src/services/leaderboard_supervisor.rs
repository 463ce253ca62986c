//! Periodic leaderboard snapshot refresh.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::state::SharedState;

/// Refresh the leaderboard snapshot on a fixed period until shutdown.
///
/// The first tick fires immediately so the snapshot is populated right after
/// startup. The refresh is unconditional: it does not try to detect write
/// activity. A failed cycle keeps the previous snapshot and retries on the
/// next tick.
pub async fn run(state: SharedState, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let store = state.store();
                match state.leaderboard().refresh(store.as_ref()).await {
                    Ok(count) => debug!(count, "leaderboard refreshed"),
                    Err(err) => {
                        warn!(error = %err, "leaderboard refresh failed; keeping previous snapshot");
                    }
                }
            }
            _ = shutdown.changed() => {
                debug!("leaderboard supervisor stopping");
                return;
            }
        }
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

    #[tokio::test(start_paused = true)]
    async fn supervisor_populates_the_snapshot_and_stops_on_signal() {
        let store = MemStore::with_leaderboard(vec![LeaderboardEntryEntity {
            username: "alice".into(),
            emoji: "\u{1f600}".into(),
            score: 10,
            crashes: 0,
            total_games: 1,
            total_wins: 0,
            best_streak: 0,
            updated_at: SystemTime::now(),
        }]);
        let state = AppState::new(Arc::new(store));

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(
            state.clone(),
            Duration::from_secs(60),
            shutdown_rx,
        ));

        // Give the immediate first tick a chance to run.
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!state.leaderboard().is_empty().await);

        shutdown_tx.send(true).unwrap();
        task.await.unwrap();
    }
}
