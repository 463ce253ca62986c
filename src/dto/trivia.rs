//! DTO definitions for the trivia sampling surface.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dao::models::Difficulty;

/// Query parameters accepted by the trivia endpoint.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct TriviaQuery {
    /// Requested difficulty tier; defaults to easy.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Number of questions to draw, between 1 and 10.
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 10))]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

/// One question as served to the client, with answers pre-shuffled.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionView {
    /// Plain-text question.
    pub question: String,
    /// All four answers in a per-call random order.
    pub answers: Vec<String>,
    /// The correct answer, repeated for client-side grading.
    pub correct: String,
    /// Source category label.
    pub category: String,
}

/// Response wrapping a sampled question batch.
#[derive(Debug, Serialize, ToSchema)]
pub struct TriviaResponse {
    /// Sampled questions, never empty.
    pub questions: Vec<QuestionView>,
}
