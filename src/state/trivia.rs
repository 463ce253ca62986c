//! In-memory trivia pools: one per difficulty tier, coarsely locked,
//! sampled by request handlers and refilled by the background supervisor.

use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use rand::seq::{IndexedRandom, SliceRandom};
use tokio::sync::Mutex;

use crate::dao::models::{Difficulty, QuestionEntity, TriviaSnapshotEntity};
use crate::state::fallback::fallback_bank;

/// Runtime trivia question owned by a tier's pool.
///
/// Immutable once inserted; samples hand out clones so the pool contents are
/// never touched by per-request answer shuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Plain-text question.
    pub text: String,
    /// The single correct answer.
    pub correct_answer: String,
    /// The three distractors.
    pub incorrect_answers: [String; 3],
    /// Source category label.
    pub category: String,
}

impl Question {
    /// Identity used for deduplication: the normalized question text.
    pub fn dedup_key(&self) -> &str {
        self.text.trim()
    }
}

impl From<QuestionEntity> for Question {
    fn from(entity: QuestionEntity) -> Self {
        Self {
            text: entity.text,
            correct_answer: entity.correct_answer,
            incorrect_answers: entity.incorrect_answers,
            category: entity.category,
        }
    }
}

impl From<Question> for QuestionEntity {
    fn from(question: Question) -> Self {
        Self {
            text: question.text,
            correct_answer: question.correct_answer,
            incorrect_answers: question.incorrect_answers,
            category: question.category,
        }
    }
}

/// Pool of available questions for one tier.
#[derive(Debug, Default)]
struct TriviaPool {
    questions: Vec<Question>,
    last_fetch: Option<SystemTime>,
}

/// Number of questions held per tier, used by the health surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSizes {
    /// Easy tier size.
    pub easy: usize,
    /// Medium tier size.
    pub medium: usize,
    /// Hard tier size.
    pub hard: usize,
}

/// Concurrent question cache keyed by difficulty tier.
///
/// A single lock guards the whole tier map: sampling is O(pool size) and
/// rare relative to the request rate, so coarse locking keeps the
/// sample/merge/reseed paths trivially consistent.
pub struct TriviaCache {
    pools: Mutex<HashMap<Difficulty, TriviaPool>>,
}

impl TriviaCache {
    /// Create a cache with empty pools for every tier.
    ///
    /// Callers must seed or restore before serving; `sample` nonetheless
    /// reseeds from the fallback bank if it ever finds a pool empty.
    pub fn new() -> Self {
        let pools = Difficulty::ALL
            .into_iter()
            .map(|difficulty| (difficulty, TriviaPool::default()))
            .collect();
        Self {
            pools: Mutex::new(pools),
        }
    }

    /// Draw up to `count` distinct questions from a tier, in random order.
    ///
    /// If `count` meets or exceeds the pool size the entire pool is returned
    /// shuffled. An empty pool is reseeded from the fallback bank first, so
    /// the result is never empty.
    pub async fn sample(&self, difficulty: Difficulty, count: usize) -> Vec<Question> {
        let mut pools = self.pools.lock().await;
        let pool = pools.entry(difficulty).or_default();
        if pool.questions.is_empty() {
            pool.questions = fallback_bank(difficulty);
        }

        let mut rng = rand::rng();
        if count >= pool.questions.len() {
            let mut selected = pool.questions.clone();
            selected.shuffle(&mut rng);
            selected
        } else {
            pool.questions
                .choose_multiple(&mut rng, count)
                .cloned()
                .collect()
        }
    }

    /// Append questions whose text is not already pooled; returns how many
    /// were actually added. Stamps the tier's last fetch time.
    pub async fn merge(&self, difficulty: Difficulty, incoming: Vec<Question>) -> usize {
        let mut pools = self.pools.lock().await;
        let pool = pools.entry(difficulty).or_default();
        pool.last_fetch = Some(SystemTime::now());

        let mut seen: HashSet<String> = pool
            .questions
            .iter()
            .map(|question| question.dedup_key().to_string())
            .collect();

        let mut added = 0;
        for question in incoming {
            if seen.insert(question.dedup_key().to_string()) {
                pool.questions.push(question);
                added += 1;
            }
        }
        added
    }

    /// Reset every tier sitting below `min_size` to its full fallback bank.
    pub async fn seed_fallbacks(&self, min_size: usize) {
        let mut pools = self.pools.lock().await;
        for difficulty in Difficulty::ALL {
            let pool = pools.entry(difficulty).or_default();
            if pool.questions.len() < min_size {
                pool.questions = fallback_bank(difficulty);
            }
        }
    }

    /// When the tier last received a merge from the external source.
    pub async fn last_fetch_of(&self, difficulty: Difficulty) -> Option<SystemTime> {
        let pools = self.pools.lock().await;
        pools.get(&difficulty).and_then(|pool| pool.last_fetch)
    }

    /// Current number of questions pooled for one tier.
    pub async fn size_of(&self, difficulty: Difficulty) -> usize {
        let pools = self.pools.lock().await;
        pools
            .get(&difficulty)
            .map(|pool| pool.questions.len())
            .unwrap_or(0)
    }

    /// Per-tier sizes for the health surface.
    pub async fn sizes(&self) -> PoolSizes {
        let pools = self.pools.lock().await;
        let size = |difficulty: Difficulty| {
            pools
                .get(&difficulty)
                .map(|pool| pool.questions.len())
                .unwrap_or(0)
        };
        PoolSizes {
            easy: size(Difficulty::Easy),
            medium: size(Difficulty::Medium),
            hard: size(Difficulty::Hard),
        }
    }

    /// Serialize the full cache contents for persistence.
    pub async fn snapshot(&self) -> TriviaSnapshotEntity {
        let pools = self.pools.lock().await;
        let collect = |difficulty: Difficulty| {
            pools
                .get(&difficulty)
                .map(|pool| {
                    pool.questions
                        .iter()
                        .cloned()
                        .map(QuestionEntity::from)
                        .collect()
                })
                .unwrap_or_default()
        };
        TriviaSnapshotEntity {
            easy: collect(Difficulty::Easy),
            medium: collect(Difficulty::Medium),
            hard: collect(Difficulty::Hard),
        }
    }

    /// Replace the pool contents from a persisted snapshot.
    pub async fn restore(&self, snapshot: TriviaSnapshotEntity) {
        let mut pools = self.pools.lock().await;
        let tiers = [
            (Difficulty::Easy, snapshot.easy),
            (Difficulty::Medium, snapshot.medium),
            (Difficulty::Hard, snapshot.hard),
        ];
        for (difficulty, questions) in tiers {
            let pool = pools.entry(difficulty).or_default();
            pool.questions = questions.into_iter().map(Question::from).collect();
        }
    }
}

impl Default for TriviaCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> Question {
        Question {
            text: text.to_string(),
            correct_answer: "yes".to_string(),
            incorrect_answers: ["no".to_string(), "maybe".to_string(), "42".to_string()],
            category: "General".to_string(),
        }
    }

    fn snapshot_with_easy(texts: &[&str]) -> TriviaSnapshotEntity {
        TriviaSnapshotEntity {
            easy: texts
                .iter()
                .map(|text| QuestionEntity::from(question(text)))
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn sample_returns_distinct_questions() {
        let cache = TriviaCache::new();
        cache.seed_fallbacks(10).await;

        let selected = cache.sample(Difficulty::Easy, 5).await;
        assert_eq!(selected.len(), 5);

        let mut keys: Vec<&str> = selected.iter().map(Question::dedup_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 5);
    }

    #[tokio::test]
    async fn oversized_sample_returns_whole_pool() {
        let cache = TriviaCache::new();
        cache
            .restore(snapshot_with_easy(&["a", "b", "c"]))
            .await;

        let selected = cache.sample(Difficulty::Easy, 100).await;
        assert_eq!(selected.len(), 3);
    }

    #[tokio::test]
    async fn empty_pool_reseeds_before_sampling() {
        let cache = TriviaCache::new();

        let selected = cache.sample(Difficulty::Hard, 3).await;
        assert_eq!(selected.len(), 3);
        assert!(cache.size_of(Difficulty::Hard).await >= 15);
    }

    #[tokio::test]
    async fn merge_discards_duplicate_text() {
        let cache = TriviaCache::new();
        cache
            .restore(snapshot_with_easy(&["q1", "q2", "q3", "q4", "q5"]))
            .await;

        let incoming = vec![question("q2"), question("q6"), question("q4")];
        let added = cache.merge(Difficulty::Easy, incoming).await;

        assert_eq!(added, 1);
        assert_eq!(cache.size_of(Difficulty::Easy).await, 6);
    }

    #[tokio::test]
    async fn merge_stamps_the_fetch_time() {
        let cache = TriviaCache::new();
        assert!(cache.last_fetch_of(Difficulty::Easy).await.is_none());

        cache.merge(Difficulty::Easy, vec![question("q1")]).await;
        assert!(cache.last_fetch_of(Difficulty::Easy).await.is_some());
    }

    #[tokio::test]
    async fn seed_only_touches_small_pools() {
        let cache = TriviaCache::new();
        cache
            .restore(snapshot_with_easy(&[
                "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
            ]))
            .await;

        cache.seed_fallbacks(10).await;

        // Easy pool was above the threshold and keeps its custom contents.
        assert_eq!(cache.size_of(Difficulty::Easy).await, 12);
        // The empty tiers were reset to their banks.
        assert_eq!(cache.size_of(Difficulty::Medium).await, 20);
        assert_eq!(cache.size_of(Difficulty::Hard).await, 15);
    }

    #[tokio::test]
    async fn snapshot_round_trips_through_restore() {
        let cache = TriviaCache::new();
        cache.seed_fallbacks(10).await;
        let snapshot = cache.snapshot().await;

        let restored = TriviaCache::new();
        restored.restore(snapshot).await;

        let sizes = restored.sizes().await;
        assert_eq!(sizes.easy, 40);
        assert_eq!(sizes.medium, 20);
        assert_eq!(sizes.hard, 15);
    }
}
