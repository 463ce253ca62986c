//! Registry of in-progress games keyed by session token.

use dashmap::DashMap;
use rand::Rng;

use crate::state::pattern;

/// Per-session game state consumed by the outcome generator.
///
/// `money`, `streak`, and `level` are caller-owned: the outcome path reads
/// them for the house overrides but only ever writes the pattern and cursor.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    /// Current difficulty level, selects the bias template.
    pub level: u32,
    /// Accumulated money reported by the caller.
    pub money: u64,
    /// Current survive streak reported by the caller.
    pub streak: u32,
    pattern: Vec<u8>,
    cursor: usize,
}

impl ActiveGame {
    /// Fresh state for a newly registered game.
    ///
    /// The pattern starts empty and is generated lazily on the first
    /// outcome request.
    pub fn new(level: u32) -> Self {
        Self {
            level,
            money: 0,
            streak: 0,
            pattern: Vec::new(),
            cursor: 0,
        }
    }
}

/// Concurrent map from session token to [`ActiveGame`].
///
/// The sharded map serializes calls touching the same token while letting
/// independent tokens proceed in parallel; there is no global lock.
pub struct GameRegistry {
    games: DashMap<String, ActiveGame>,
    perturb: bool,
}

impl GameRegistry {
    /// Registry with normal perturbed pattern generation.
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            perturb: true,
        }
    }

    /// Deterministic registry that serves raw templates, for tests.
    pub fn without_perturbation() -> Self {
        Self {
            games: DashMap::new(),
            perturb: false,
        }
    }

    /// Create (or reset) the state for a token.
    pub fn register(&self, token: impl Into<String>, level: u32) {
        self.games.insert(token.into(), ActiveGame::new(level));
    }

    /// Update the caller-owned fields for a token. Returns false when the
    /// token has no registered game.
    pub fn sync(&self, token: &str, money: u64, streak: u32, level: u32) -> bool {
        match self.games.get_mut(token) {
            Some(mut game) => {
                game.money = money;
                game.streak = streak;
                game.level = level;
                true
            }
            None => false,
        }
    }

    /// Drop a token's state; the session-expiry policy lives with the caller.
    pub fn remove(&self, token: &str) -> bool {
        self.games.remove(token).is_some()
    }

    /// Number of registered games, for operational visibility.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no games are registered.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Next rigged outcome for a token: 1 survives, 0 busts.
    ///
    /// A token without registered state is an immediate bust and no state is
    /// created for it.
    pub fn next_outcome(&self, token: &str) -> u8 {
        self.next_outcome_with_rng(token, &mut rand::rng())
    }

    /// [`Self::next_outcome`] with an injected random source.
    pub fn next_outcome_with_rng<R: Rng + ?Sized>(&self, token: &str, rng: &mut R) -> u8 {
        let Some(mut game) = self.games.get_mut(token) else {
            return 0;
        };

        if game.cursor >= game.pattern.len() {
            game.pattern = if self.perturb {
                pattern::generate_pattern(game.level, rng)
            } else {
                pattern::template_for_level(game.level).to_vec()
            };
            game.cursor = 0;
        }

        let result = game.pattern[game.cursor];
        game.cursor += 1;

        pattern::apply_house_overrides(result, game.money, game.streak, rng)
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
