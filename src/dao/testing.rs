//! In-memory [`GreedStore`] used by unit tests across the crate.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::dao::models::{LeaderboardEntryEntity, SessionEntity, TriviaSnapshotEntity};
use crate::dao::storage::{StorageError, StorageResult};
use crate::dao::store::GreedStore;

/// Configurable in-memory store.
#[derive(Default)]
pub struct MemStore {
    /// Leaderboard returned by `load_leaderboard`, in insertion order.
    pub leaderboard: Vec<LeaderboardEntryEntity>,
    /// Sessions returned by `find_session`.
    pub sessions: HashMap<String, SessionEntity>,
    /// Snapshot state, readable and overwritten by saves.
    pub snapshot: Mutex<Option<TriviaSnapshotEntity>>,
    /// When set, every read fails as unavailable.
    pub fail_reads: bool,
}

impl MemStore {
    /// Store serving the given leaderboard.
    pub fn with_leaderboard(leaderboard: Vec<LeaderboardEntryEntity>) -> Self {
        Self {
            leaderboard,
            ..Default::default()
        }
    }

    /// Store with a single known session.
    pub fn with_session(token: &str, session: SessionEntity) -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(token.to_string(), session);
        Self {
            sessions,
            ..Default::default()
        }
    }

    /// Store whose every read fails.
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    fn outage<T>(&self) -> Option<StorageResult<T>> {
        self.fail_reads.then(|| {
            Err(StorageError::unavailable(
                "simulated outage",
                std::io::Error::other("down"),
            ))
        })
    }
}

impl GreedStore for MemStore {
    fn load_leaderboard(&self) -> BoxFuture<'static, StorageResult<Vec<LeaderboardEntryEntity>>> {
        let outcome = self.outage().unwrap_or_else(|| Ok(self.leaderboard.clone()));
        Box::pin(async move { outcome })
    }

    fn find_session(
        &self,
        token: String,
    ) -> BoxFuture<'static, StorageResult<Option<SessionEntity>>> {
        let outcome = self
            .outage()
            .unwrap_or_else(|| Ok(self.sessions.get(&token).cloned()));
        Box::pin(async move { outcome })
    }

    fn load_trivia_snapshot(
        &self,
    ) -> BoxFuture<'static, StorageResult<Option<TriviaSnapshotEntity>>> {
        let outcome = self
            .outage()
            .unwrap_or_else(|| Ok(self.snapshot.lock().unwrap().clone()));
        Box::pin(async move { outcome })
    }

    fn save_trivia_snapshot(
        &self,
        snapshot: TriviaSnapshotEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let outcome = self.outage().unwrap_or_else(|| {
            *self.snapshot.lock().unwrap() = Some(snapshot);
            Ok(())
        });
        Box::pin(async move { outcome })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let outcome = self.outage().unwrap_or(Ok(()));
        Box::pin(async move { outcome })
    }
}
