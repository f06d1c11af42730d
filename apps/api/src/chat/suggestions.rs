//! Suggested follow-up questions embedded in model output.
//!
//! Contract: the model may end its answer with a line
//! `SUGGESTED_QUESTIONS: ["…", "…"]`. The LAST occurrence of the marker wins.
//! Everything before it is the answer; the remainder is parsed as a JSON array.
//! A malformed payload yields no suggestions and never fails the request.

use serde_json::Value;

use crate::llm_client::strip_json_fences;

pub const SUGGESTIONS_MARKER: &str = "SUGGESTED_QUESTIONS:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAnswer {
    pub answer: String,
    pub suggested_questions: Vec<String>,
}

pub fn split_suggestions(raw: &str) -> FormattedAnswer {
    let Some(index) = raw.rfind(SUGGESTIONS_MARKER) else {
        return FormattedAnswer {
            answer: raw.trim().to_string(),
            suggested_questions: Vec::new(),
        };
    };

    let answer = raw[..index].trim().to_string();
    let payload = strip_json_fences(&raw[index + SUGGESTIONS_MARKER.len()..]);

    FormattedAnswer {
        answer,
        suggested_questions: parse_questions(payload),
    }
}

/// Keeps the non-empty string elements of a JSON array; anything else → empty.
fn parse_questions(payload: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<Value>>(payload) {
        Ok(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect(),
        Err(e) => {
            tracing::debug!("Ignoring malformed suggestions payload: {e}");
            Vec::new()
        }
    }
}
