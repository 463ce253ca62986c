use std::path::PathBuf;

/// Runtime configuration describing where the JSON store keeps its files.
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    /// Main database document (sessions + leaderboard).
    pub db_path: PathBuf,
    /// Trivia cache snapshot document.
    pub trivia_cache_path: PathBuf,
}

/// Default main database file, next to the working directory.
const DEFAULT_DB_PATH: &str = "greed_trial_db.json";
/// Default trivia snapshot file.
const DEFAULT_TRIVIA_CACHE_PATH: &str = "trivia_cache.json";

impl JsonStoreConfig {
    /// Construct a configuration from explicit file paths.
    pub fn new(db_path: impl Into<PathBuf>, trivia_cache_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            trivia_cache_path: trivia_cache_path.into(),
        }
    }

    /// Build a configuration from the environment, falling back to the
    /// default file names when the variables are unset.
    pub fn from_env() -> Self {
        let db_path = std::env::var("GREED_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.into());
        let trivia_cache_path = std::env::var("GREED_TRIVIA_CACHE_PATH")
            .unwrap_or_else(|_| DEFAULT_TRIVIA_CACHE_PATH.into());
        Self::new(db_path, trivia_cache_path)
    }
}
