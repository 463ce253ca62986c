//! Background tasks keeping the trivia pools full.
//!
//! One startup pass seeds thin tiers from the fallback banks and tops every
//! tier up from the external source, then a long-period loop recovers tiers
//! that drain over the process lifetime. All source and store failures are
//! logged and absorbed; the pools always retain at least their fallback
//! contents.

use tokio::sync::watch;
use tokio::time::{Instant, interval_at};
use tracing::{info, warn};

use crate::{
    config::{
        AppConfig, INITIAL_FETCH_AMOUNT, MIN_POOL_SIZE, REFILL_FETCH_AMOUNT, REFILL_THRESHOLD,
        TARGET_POOL_SIZE,
    },
    dao::{models::Difficulty, trivia_source::TriviaSourceClient},
    state::{SharedState, trivia::Question},
};

/// Run the refill tasks until shutdown is signalled.
pub async fn run(
    state: SharedState,
    client: TriviaSourceClient,
    config: AppConfig,
    mut shutdown: watch::Receiver<bool>,
) {
    tokio::select! {
        _ = initial_pass(&state, &client) => {}
        _ = shutdown.changed() => {
            info!("refill supervisor stopping before initial pass completed");
            return;
        }
    }

    // First periodic check one full interval from now; the initial pass
    // already ran.
    let mut ticker = interval_at(
        Instant::now() + config.refill_interval,
        config.refill_interval,
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => refill_pass(&state, &client).await,
            _ = shutdown.changed() => {
                info!("refill supervisor stopping");
                return;
            }
        }
    }
}

/// Startup pass: guarantee fallback contents, then top up from the source.
async fn initial_pass(state: &SharedState, client: &TriviaSourceClient) {
    state.trivia().seed_fallbacks(MIN_POOL_SIZE).await;

    for difficulty in Difficulty::ALL {
        let current = state.trivia().size_of(difficulty).await;
        if current >= TARGET_POOL_SIZE {
            info!(%difficulty, current, "pool already full; skipping fetch");
            continue;
        }
        fetch_and_merge(state, client, difficulty, INITIAL_FETCH_AMOUNT).await;
    }

    persist_snapshot(state).await;
    let sizes = state.trivia().sizes().await;
    info!(
        easy = sizes.easy,
        medium = sizes.medium,
        hard = sizes.hard,
        "trivia cache ready"
    );
}

/// Periodic pass: refetch only tiers that have drained below the threshold.
async fn refill_pass(state: &SharedState, client: &TriviaSourceClient) {
    let mut changed = false;
    for difficulty in Difficulty::ALL {
        if state.trivia().size_of(difficulty).await < REFILL_THRESHOLD {
            changed |= fetch_and_merge(state, client, difficulty, REFILL_FETCH_AMOUNT).await > 0;
        }
    }

    if changed {
        persist_snapshot(state).await;
    }
}

/// Fetch one batch and merge it into the tier; returns how many questions
/// were added. Any failure leaves the pool untouched.
async fn fetch_and_merge(
    state: &SharedState,
    client: &TriviaSourceClient,
    difficulty: Difficulty,
    amount: u8,
) -> usize {
    match client.fetch(difficulty, amount).await {
        Ok(batch) => {
            let incoming: Vec<Question> = batch.into_iter().map(Question::from).collect();
            let fetched = incoming.len();
            let added = state.trivia().merge(difficulty, incoming).await;
            info!(%difficulty, fetched, added, "merged question batch");
            added
        }
        Err(err) => {
            warn!(%difficulty, error = %err, "question fetch failed; keeping existing pool");
            0
        }
    }
}

/// Persist the full cache contents, best-effort.
async fn persist_snapshot(state: &SharedState) {
    let snapshot = state.trivia().snapshot().await;
    if let Err(err) = state.store().save_trivia_snapshot(snapshot).await {
        warn!(error = %err, "failed to persist trivia cache snapshot");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::testing::MemStore;
    use crate::state::AppState;

    #[tokio::test]
    async fn initial_pass_seeds_and_persists_despite_source_failures() {
        let store = Arc::new(MemStore::default());
        let state = AppState::new(store.clone());
        // Unroutable endpoint: every fetch fails fast and the pass must
        // still leave the fallback contents in place.
        let mut config = crate::dao::trivia_source::TriviaSourceConfig::new("http://127.0.0.1:9");
        config.min_interval = std::time::Duration::ZERO;
        let client = TriviaSourceClient::new(config).unwrap();

        initial_pass(&state, &client).await;

        let sizes = state.trivia().sizes().await;
        assert_eq!(sizes.easy, 40);
        assert_eq!(sizes.medium, 20);
        assert_eq!(sizes.hard, 15);

        let snapshot = store.snapshot.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.easy.len(), 40);
    }
}
