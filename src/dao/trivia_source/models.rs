use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::dao::models::QuestionEntity;

use super::error::{TriviaSourceError, TriviaSourceResult};

/// Application-level code for a successful response.
pub const RESPONSE_OK: u8 = 0;
/// Application-level code signaling the caller is being rate limited.
pub const RESPONSE_RATE_LIMITED: u8 = 5;

/// Top-level response envelope returned by the question source.
#[derive(Debug, Deserialize)]
pub struct SourceResponse {
    /// Application-level response code (0 is success).
    pub response_code: u8,
    /// Question batch; empty on non-success codes.
    #[serde(default)]
    pub results: Vec<SourceQuestion>,
}

/// A single question as returned by the source, with base64-encoded text.
///
/// Payloads are requested base64-encoded so no HTML entity markup survives
/// into the decoded plain text.
#[derive(Debug, Deserialize)]
pub struct SourceQuestion {
    /// Encoded question text.
    pub question: String,
    /// Encoded correct answer.
    pub correct_answer: String,
    /// Encoded distractors; multiple-choice always carries three.
    pub incorrect_answers: Vec<String>,
    /// Encoded category label.
    #[serde(default)]
    pub category: String,
}

impl SourceQuestion {
    /// Decode every field into a plain-text [`QuestionEntity`].
    pub fn decode(self) -> TriviaSourceResult<QuestionEntity> {
        let decoded = self
            .incorrect_answers
            .into_iter()
            .map(decode_text)
            .collect::<TriviaSourceResult<Vec<_>>>()?;
        let incorrect: [String; 3] =
            decoded
                .try_into()
                .map_err(|wrong: Vec<String>| TriviaSourceError::MalformedPayload {
                    detail: format!("expected 3 distractors, got {}", wrong.len()),
                })?;

        let category = if self.category.is_empty() {
            "General".to_string()
        } else {
            decode_text(self.category)?
        };

        Ok(QuestionEntity {
            text: decode_text(self.question)?,
            correct_answer: decode_text(self.correct_answer)?,
            incorrect_answers: incorrect,
            category,
        })
    }
}

/// Decode one base64 text field into a UTF-8 string.
fn decode_text(encoded: String) -> TriviaSourceResult<String> {
    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|err| TriviaSourceError::MalformedPayload {
            detail: format!("invalid base64 text: {err}"),
        })?;
    String::from_utf8(bytes).map_err(|err| TriviaSourceError::MalformedPayload {
        detail: format!("text is not valid UTF-8: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> String {
        BASE64.encode(text.as_bytes())
    }

    #[test]
    fn decodes_a_full_question() {
        let raw = SourceQuestion {
            question: encode("What is the capital of Mongolia?"),
            correct_answer: encode("Ulaanbaatar"),
            incorrect_answers: vec![encode("Astana"), encode("Bishkek"), encode("Tashkent")],
            category: encode("Geography"),
        };

        let question = raw.decode().unwrap();
        assert_eq!(question.text, "What is the capital of Mongolia?");
        assert_eq!(question.correct_answer, "Ulaanbaatar");
        assert_eq!(question.category, "Geography");
        assert_eq!(question.incorrect_answers[2], "Tashkent");
    }

    #[test]
    fn rejects_wrong_distractor_count() {
        let raw = SourceQuestion {
            question: encode("q"),
            correct_answer: encode("a"),
            incorrect_answers: vec![encode("b"), encode("c")],
            category: encode("General"),
        };

        assert!(matches!(
            raw.decode(),
            Err(TriviaSourceError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn rejects_undecodable_text() {
        let raw = SourceQuestion {
            question: "not base64!!!".into(),
            correct_answer: encode("a"),
            incorrect_answers: vec![encode("b"), encode("c"), encode("d")],
            category: String::new(),
        };

        assert!(matches!(
            raw.decode(),
            Err(TriviaSourceError::MalformedPayload { .. })
        ));
    }
}
