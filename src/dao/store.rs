use futures::future::BoxFuture;

use crate::dao::models::{LeaderboardEntryEntity, SessionEntity, TriviaSnapshotEntity};
use crate::dao::storage::StorageResult;

/// Narrow abstraction over the durable store consumed by the core.
///
/// The store is the source of truth for the leaderboard and sessions; the
/// in-memory caches are disposable projections over it. Account and score
/// write paths live outside this service and share the same backing files.
pub trait GreedStore: Send + Sync {
    /// Read the full leaderboard, in store insertion order.
    fn load_leaderboard(&self) -> BoxFuture<'static, StorageResult<Vec<LeaderboardEntryEntity>>>;
    /// Look up a session by token; expired sessions read as absent.
    fn find_session(&self, token: String)
    -> BoxFuture<'static, StorageResult<Option<SessionEntity>>>;
    /// Read the persisted trivia cache snapshot, if one exists.
    fn load_trivia_snapshot(&self)
    -> BoxFuture<'static, StorageResult<Option<TriviaSnapshotEntity>>>;
    /// Persist the full trivia cache contents for crash-resume.
    fn save_trivia_snapshot(
        &self,
        snapshot: TriviaSnapshotEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    /// Verify the backing medium is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
