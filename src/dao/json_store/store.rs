use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::dao::{
    models::{LeaderboardEntryEntity, SessionEntity, TriviaSnapshotEntity},
    store::GreedStore,
    storage::StorageResult,
};

use super::{
    config::JsonStoreConfig,
    error::{JsonStoreError, JsonStoreResult},
    models::DbDocument,
};

/// Sessions older than this read as absent.
const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Durable store backed by JSON documents on the local filesystem.
///
/// Reads re-open the files on every call so writes made by the account
/// subsystem become visible without coordination. The only write path owned
/// by this service is the trivia snapshot, serialized behind a mutex.
#[derive(Clone)]
pub struct JsonFileStore {
    db_path: Arc<PathBuf>,
    trivia_cache_path: Arc<PathBuf>,
    write_guard: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open the store, verifying the main database document is readable if present.
    pub async fn connect(config: JsonStoreConfig) -> JsonStoreResult<Self> {
        let store = Self {
            db_path: Arc::new(config.db_path),
            trivia_cache_path: Arc::new(config.trivia_cache_path),
            write_guard: Arc::new(Mutex::new(())),
        };

        // A corrupt database file should fail loudly at startup rather than
        // surface later as an empty leaderboard.
        store.read_db().await?;
        Ok(store)
    }

    async fn read_db(&self) -> JsonStoreResult<DbDocument> {
        read_document(self.db_path.as_ref())
            .await
            .map(Option::unwrap_or_default)
    }

    async fn read_trivia_snapshot(&self) -> JsonStoreResult<Option<TriviaSnapshotEntity>> {
        read_document(self.trivia_cache_path.as_ref()).await
    }

    async fn write_trivia_snapshot(&self, snapshot: &TriviaSnapshotEntity) -> JsonStoreResult<()> {
        let payload =
            serde_json::to_vec(snapshot).map_err(|source| JsonStoreError::Encode { source })?;

        let _guard = self.write_guard.lock().await;
        tokio::fs::write(self.trivia_cache_path.as_ref(), payload)
            .await
            .map_err(|source| JsonStoreError::Write {
                path: self.trivia_cache_path.as_ref().clone(),
                source,
            })
    }
}

/// Read and decode a JSON document, treating a missing file as absent.
async fn read_document<T>(path: &Path) -> JsonStoreResult<Option<T>>
where
    T: DeserializeOwned,
{
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(JsonStoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| JsonStoreError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Whether a stored session is still within its lifetime.
fn session_is_fresh(session: &SessionEntity) -> bool {
    match session.created_at.elapsed() {
        Ok(age) => age <= SESSION_TTL,
        // A creation time in the future means the clock moved; treat the
        // session as fresh rather than logging players out.
        Err(_) => true,
    }
}

impl GreedStore for JsonFileStore {
    fn load_leaderboard(&self) -> BoxFuture<'static, StorageResult<Vec<LeaderboardEntryEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let db = store.read_db().await?;
            Ok(db.leaderboard)
        })
    }

    fn find_session(
        &self,
        token: String,
    ) -> BoxFuture<'static, StorageResult<Option<SessionEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let db = store.read_db().await?;
            Ok(db
                .sessions
                .get(&token)
                .filter(|session| session_is_fresh(session))
                .cloned())
        })
    }

    fn load_trivia_snapshot(
        &self,
    ) -> BoxFuture<'static, StorageResult<Option<TriviaSnapshotEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.read_trivia_snapshot().await?) })
    }

    fn save_trivia_snapshot(
        &self,
        snapshot: TriviaSnapshotEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.write_trivia_snapshot(&snapshot).await?) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.read_db().await?;
            Ok(())
        })
    }
}
