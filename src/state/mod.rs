/// Built-in fallback question banks.
pub mod fallback;
/// Active game registry keyed by session token.
pub mod games;
/// Leaderboard read cache.
pub mod leaderboard;
/// Bias templates and outcome perturbation.
pub mod pattern;
/// Trivia question pools.
pub mod trivia;

use std::sync::Arc;

use crate::dao::store::GreedStore;
use crate::state::{games::GameRegistry, leaderboard::LeaderboardCache, trivia::TriviaCache};

/// Cheaply cloneable handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state owning the caches and the store handle.
///
/// Every component is constructed here and injected where needed; there is
/// no ambient process state. Synchronization is component-local: the trivia
/// cache holds its own coarse lock, the leaderboard snapshot swaps behind a
/// read-write lock, and the game registry shards per token.
pub struct AppState {
    store: Arc<dyn GreedStore>,
    trivia: TriviaCache,
    leaderboard: LeaderboardCache,
    games: GameRegistry,
}

impl AppState {
    /// Construct the shared state around a connected durable store.
    pub fn new(store: Arc<dyn GreedStore>) -> SharedState {
        Arc::new(Self {
            store,
            trivia: TriviaCache::new(),
            leaderboard: LeaderboardCache::new(),
            games: GameRegistry::new(),
        })
    }

    /// Handle to the durable store.
    pub fn store(&self) -> Arc<dyn GreedStore> {
        Arc::clone(&self.store)
    }

    /// The trivia question cache.
    pub fn trivia(&self) -> &TriviaCache {
        &self.trivia
    }

    /// The leaderboard read cache.
    pub fn leaderboard(&self) -> &LeaderboardCache {
        &self.leaderboard
    }

    /// Registry of in-progress games.
    pub fn games(&self) -> &GameRegistry {
        &self.games
    }
}
