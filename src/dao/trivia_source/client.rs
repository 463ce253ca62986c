use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::{Instant, sleep_until};

use crate::dao::models::{Difficulty, QuestionEntity};

use super::{
    config::TriviaSourceConfig,
    error::{TriviaSourceError, TriviaSourceResult},
    models::{RESPONSE_OK, RESPONSE_RATE_LIMITED, SourceResponse},
};

/// User agent announced to the question source.
const USER_AGENT: &str = "GreedTrial/2.0";

/// Shared gate spacing every call to the question source.
///
/// The slot holds the earliest instant the next request may start. Holding
/// the lock across the request serializes callers, so the spacing is global
/// across tiers and across both refill tasks.
#[derive(Debug, Default)]
struct RateGate {
    next_slot: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Wait until the next request slot opens, keeping the gate locked.
    async fn acquire(&self) -> MutexGuard<'_, Option<Instant>> {
        let slot = self.next_slot.lock().await;
        if let Some(at) = *slot {
            sleep_until(at).await;
        }
        slot
    }

    /// Move the slot `spacing` past now, releasing the gate afterwards.
    fn schedule(mut slot: MutexGuard<'_, Option<Instant>>, spacing: Duration) {
        *slot = Some(Instant::now() + spacing);
    }
}

/// Client for the external question source with global rate limiting.
#[derive(Clone)]
pub struct TriviaSourceClient {
    client: Client,
    config: Arc<TriviaSourceConfig>,
    gate: Arc<RateGate>,
}

impl TriviaSourceClient {
    /// Build a client enforcing the configured request timeout.
    pub fn new(config: TriviaSourceConfig) -> TriviaSourceResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| TriviaSourceError::ClientBuilder { source })?;

        Ok(Self {
            client,
            config: Arc::new(config),
            gate: Arc::new(RateGate::default()),
        })
    }

    /// Fetch up to `amount` questions for a tier, honoring the global spacing.
    ///
    /// Blocks the calling task until the rate gate opens; must only be called
    /// from the background refill paths, never from a request handler.
    pub async fn fetch(
        &self,
        difficulty: Difficulty,
        amount: u8,
    ) -> TriviaSourceResult<Vec<QuestionEntity>> {
        let slot = self.gate.acquire().await;
        let outcome = self.request_batch(difficulty, amount).await;

        let mut spacing = self.config.min_interval;
        if matches!(outcome, Err(TriviaSourceError::RateLimited)) {
            spacing += self.config.rate_limit_penalty;
        }
        RateGate::schedule(slot, spacing);

        outcome
    }

    async fn request_batch(
        &self,
        difficulty: Difficulty,
        amount: u8,
    ) -> TriviaSourceResult<Vec<QuestionEntity>> {
        let query = [
            ("amount", amount.to_string()),
            ("difficulty", difficulty.as_str().to_string()),
            ("type", "multiple".to_string()),
            ("encode", "base64".to_string()),
        ];

        let response = self
            .client
            .get(self.config.base_url.as_str())
            .query(&query)
            .send()
            .await
            .map_err(|source| TriviaSourceError::RequestSend { source })?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(TriviaSourceError::RateLimited),
            status if !status.is_success() => {
                return Err(TriviaSourceError::RequestStatus { status });
            }
            _ => {}
        }

        let payload = response
            .json::<SourceResponse>()
            .await
            .map_err(|source| TriviaSourceError::DecodeResponse { source })?;

        match payload.response_code {
            RESPONSE_OK => payload
                .results
                .into_iter()
                .map(|question| question.decode())
                .collect(),
            RESPONSE_RATE_LIMITED => Err(TriviaSourceError::RateLimited),
            code => Err(TriviaSourceError::SourceCode { code }),
        }
    }
}
