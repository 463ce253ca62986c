//! Read cache over the durable leaderboard.
//!
//! The snapshot is rebuilt wholesale by the refresh supervisor and swapped
//! in a single write, so readers observe either the previous complete list
//! or the new one, never a partially built state.

use std::cmp::Reverse;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::dao::models::LeaderboardEntryEntity;
use crate::dao::storage::StorageResult;
use crate::dao::store::GreedStore;

/// Maximum number of entries retained in the snapshot.
pub const SNAPSHOT_CAPACITY: usize = 50;

/// In-memory top-N projection of the leaderboard.
pub struct LeaderboardCache {
    snapshot: RwLock<Arc<Vec<LeaderboardEntryEntity>>>,
}

impl LeaderboardCache {
    /// Cache starting from an empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Rebuild the snapshot from the durable store.
    ///
    /// Sorts score-descending (stable, so ties keep store insertion order),
    /// truncates to [`SNAPSHOT_CAPACITY`], and atomically replaces the
    /// visible list. On a store failure the previous snapshot stays intact
    /// and the error is returned for the supervisor to log.
    pub async fn refresh(&self, store: &dyn GreedStore) -> StorageResult<usize> {
        let mut entries = store.load_leaderboard().await?;
        entries.sort_by_key(|entry| Reverse(entry.score));
        entries.truncate(SNAPSHOT_CAPACITY);

        let count = entries.len();
        *self.snapshot.write().await = Arc::new(entries);
        Ok(count)
    }

    /// Up to `n` entries from the current snapshot.
    pub async fn top(&self, n: usize) -> Vec<LeaderboardEntryEntity> {
        let snapshot = self.snapshot.read().await.clone();
        snapshot.iter().take(n).cloned().collect()
    }

    /// Whether the snapshot has never been (successfully) populated.
    pub async fn is_empty(&self) -> bool {
        self.snapshot.read().await.is_empty()
    }
}

impl Default for LeaderboardCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;
    use crate::dao::testing::MemStore;

    fn entry(username: &str, score: u64) -> LeaderboardEntryEntity {
        LeaderboardEntryEntity {
            username: username.to_string(),
            emoji: "\u{1f600}".to_string(),
            score,
            crashes: 0,
            total_games: 1,
            total_wins: 0,
            best_streak: 0,
            updated_at: SystemTime::now(),
        }
    }

    #[tokio::test]
    async fn refresh_sorts_descending_and_truncates() {
        let entries: Vec<_> = (0..60).map(|i| entry(&format!("p{i}"), i)).collect();
        let store = MemStore::with_leaderboard(entries);
        let cache = LeaderboardCache::new();

        let count = cache.refresh(&store).await.unwrap();
        assert_eq!(count, SNAPSHOT_CAPACITY);

        let top = cache.top(20).await;
        assert_eq!(top.len(), 20);
        assert_eq!(top[0].score, 59);
        assert!(top.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[tokio::test]
    async fn ties_keep_store_insertion_order() {
        let store = MemStore::with_leaderboard(vec![
            entry("first", 10),
            entry("second", 10),
            entry("third", 10),
        ]);
        let cache = LeaderboardCache::new();
        cache.refresh(&store).await.unwrap();

        let names: Vec<String> = cache
            .top(3)
            .await
            .into_iter()
            .map(|e| e.username)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_snapshot() {
        let cache = LeaderboardCache::new();
        cache
            .refresh(&MemStore::with_leaderboard(vec![entry("alice", 100)]))
            .await
            .unwrap();

        assert!(cache.refresh(&MemStore::failing()).await.is_err());

        let top = cache.top(5).await;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].username, "alice");
    }

    #[tokio::test]
    async fn readers_never_observe_a_partial_rebuild() {
        let entries: Vec<_> = (0..30).map(|i| entry(&format!("p{i}"), i)).collect();
        let store = Arc::new(MemStore::with_leaderboard(entries));
        let cache = Arc::new(LeaderboardCache::new());
        cache.refresh(store.as_ref()).await.unwrap();

        let refresher = {
            let cache = Arc::clone(&cache);
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..50 {
                    cache.refresh(store.as_ref()).await.unwrap();
                }
            })
        };

        for _ in 0..200 {
            let len = cache.top(usize::MAX).await.len();
            assert_eq!(len, 30, "observed a torn snapshot of {len} entries");
            tokio::task::yield_now().await;
        }

        refresher.await.unwrap();
    }
}
