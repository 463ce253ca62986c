//! Service helpers serving randomized trivia batches.

use rand::seq::SliceRandom;

use crate::{
    dto::trivia::{QuestionView, TriviaQuery, TriviaResponse},
    state::SharedState,
};

/// Draw a randomized question batch for the requested tier.
///
/// Always succeeds: the cache reseeds itself from the fallback bank if a
/// pool is ever found empty, so callers get a usable batch even when the
/// external source has never been reachable. Answer order is shuffled per
/// call without touching the pooled originals.
pub async fn sample(state: &SharedState, query: TriviaQuery) -> TriviaResponse {
    let questions = state.trivia().sample(query.difficulty, query.count).await;

    let mut rng = rand::rng();
    let questions = questions
        .into_iter()
        .map(|question| {
            let mut answers: Vec<String> = question.incorrect_answers.to_vec();
            answers.push(question.correct_answer.clone());
            answers.shuffle(&mut rng);

            QuestionView {
                question: question.text,
                answers,
                correct: question.correct_answer,
                category: question.category,
            }
        })
        .collect();

    TriviaResponse { questions }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::models::Difficulty;
    use crate::dao::testing::MemStore;
    use crate::state::AppState;

    #[tokio::test]
    async fn every_view_holds_all_four_answers() {
        let state = AppState::new(Arc::new(MemStore::default()));

        let response = sample(
            &state,
            TriviaQuery {
                difficulty: Difficulty::Medium,
                count: 5,
            },
        )
        .await;

        assert_eq!(response.questions.len(), 5);
        for view in &response.questions {
            assert_eq!(view.answers.len(), 4);
            assert!(view.answers.contains(&view.correct));
        }
    }
}
