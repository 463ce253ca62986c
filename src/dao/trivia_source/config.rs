use std::time::Duration;

/// Default question source endpoint (OpenTDB-compatible).
const DEFAULT_BASE_URL: &str = "https://opentdb.com/api.php";
/// The source allows roughly one request every five seconds; stay under it.
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(6);
/// Extra spacing applied after the source signals a rate limit.
const DEFAULT_RATE_LIMIT_PENALTY: Duration = Duration::from_secs(10);
/// Per-request transport timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration describing how to reach the question source.
#[derive(Debug, Clone)]
pub struct TriviaSourceConfig {
    /// Endpoint queried for question batches.
    pub base_url: String,
    /// Minimum spacing between any two calls to the source.
    pub min_interval: Duration,
    /// Additional spacing after a source-signaled rate limit.
    pub rate_limit_penalty: Duration,
    /// Transport timeout for a single request.
    pub request_timeout: Duration,
}

impl TriviaSourceConfig {
    /// Construct a configuration pointing at an explicit endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            min_interval: DEFAULT_MIN_INTERVAL,
            rate_limit_penalty: DEFAULT_RATE_LIMIT_PENALTY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Build a configuration from the environment, falling back to the
    /// public endpoint when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("GREED_TRIVIA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }
}

impl Default for TriviaSourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
