//! Flat-file JSON implementation of the durable store.
//!
//! The backing layout is a pair of documents on disk: the main database file
//! holding sessions and the leaderboard, and a separate trivia cache snapshot
//! rewritten wholesale by the refill supervisor.

mod config;
mod error;
mod models;
mod store;

pub use config::JsonStoreConfig;
pub use error::{JsonStoreError, JsonStoreResult};
pub use store::JsonFileStore;
