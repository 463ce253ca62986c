//! Application-level configuration, read once from the environment.

use std::time::Duration;

use tracing::warn;

/// Port the HTTP server binds when none is configured.
const DEFAULT_PORT: u16 = 8080;
/// How often the leaderboard snapshot is rebuilt.
const DEFAULT_LEADERBOARD_REFRESH: Duration = Duration::from_secs(60);
/// How often the long-period refill task re-checks pool sizes.
const DEFAULT_REFILL_INTERVAL: Duration = Duration::from_secs(300);

/// Pool size below which a tier is reset to its fallback bank at startup.
pub const MIN_POOL_SIZE: usize = 10;
/// Pool size at which the initial fetch pass skips a tier.
pub const TARGET_POOL_SIZE: usize = 30;
/// Pool size below which the periodic refill task refetches a tier.
pub const REFILL_THRESHOLD: usize = 15;
/// Batch size requested during the initial fetch pass.
pub const INITIAL_FETCH_AMOUNT: u8 = 30;
/// Batch size requested during periodic refills.
pub const REFILL_FETCH_AMOUNT: u8 = 20;

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Period of the leaderboard refresh task.
    pub leaderboard_refresh_interval: Duration,
    /// Period of the long-interval trivia refill task.
    pub refill_interval: Duration,
}

impl AppConfig {
    /// Build the configuration from the environment, falling back to the
    /// built-in defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = env_parse("PORT")
            .or_else(|| env_parse("GREED_PORT"))
            .unwrap_or(DEFAULT_PORT);

        let leaderboard_refresh_interval = env_parse("GREED_LEADERBOARD_REFRESH_SECS")
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_LEADERBOARD_REFRESH);

        let refill_interval = env_parse("GREED_REFILL_INTERVAL_SECS")
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFILL_INTERVAL);

        Self {
            port,
            leaderboard_refresh_interval,
            refill_interval,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            leaderboard_refresh_interval: DEFAULT_LEADERBOARD_REFRESH,
            refill_interval: DEFAULT_REFILL_INTERVAL,
        }
    }
}

/// Read and parse an environment variable, warning when the value is set
/// but unusable.
fn env_parse<T: std::str::FromStr>(var: &str) -> Option<T> {
    let value = std::env::var(var).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(var, %value, "ignoring unparsable configuration value");
            None
        }
    }
}
