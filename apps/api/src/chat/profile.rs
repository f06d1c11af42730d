//! Chat profiles: one handler implementation, parameterized per endpoint.

use crate::chat::prompts::{COMPACT_SYSTEM_TEMPLATE, STANDARD_SYSTEM_TEMPLATE};
use crate::models::language::Language;
use crate::retrieval::selector::SelectionPolicy;

/// Everything that differs between the chat endpoints.
#[derive(Debug, Clone)]
pub struct ChatProfile {
    pub name: &'static str,
    pub selection: SelectionPolicy,
    /// System prompt template with `{language_instruction}` and `{context}` slots.
    pub prompt_template: &'static str,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    /// Number of most recent conversation turns forwarded to the model.
    pub history_window: usize,
    /// Use the requested language's text variant when assembling context.
    pub localized_context: bool,
    /// Run the best-effort language correction stage on the answer.
    pub correct_language: bool,
    /// Ask for and parse a trailing suggested-questions marker.
    pub suggest_questions: bool,
}

impl ChatProfile {
    /// Full answers over the Italian default text with the large model.
    pub fn standard() -> Self {
        Self {
            name: "standard",
            selection: SelectionPolicy {
                max_matches: 5,
                mandatory_ids: vec![1, 2, 3],
                max_total: 8,
            },
            prompt_template: STANDARD_SYSTEM_TEMPLATE,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.35,
            top_p: 0.9,
            max_tokens: 600,
            history_window: 8,
            localized_context: false,
            correct_language: true,
            suggest_questions: true,
        }
    }

    /// Short answers over localized context with the small model.
    pub fn compact() -> Self {
        Self {
            name: "compact",
            selection: SelectionPolicy {
                max_matches: 6,
                mandatory_ids: vec![1, 2, 3, 6],
                max_total: 8,
            },
            prompt_template: COMPACT_SYSTEM_TEMPLATE,
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 200,
            history_window: 8,
            localized_context: true,
            correct_language: false,
            suggest_questions: false,
        }
    }

    /// Language whose text variant the context assembler should prefer.
    pub fn context_language(&self, language: Language) -> Option<Language> {
        self.localized_context.then_some(language)
    }
}

/// The profiles served by the router, one per endpoint.
#[derive(Debug, Clone)]
pub struct ChatProfiles {
    pub standard: ChatProfile,
    pub compact: ChatProfile,
}

impl Default for ChatProfiles {
    fn default() -> Self {
        Self {
            standard: ChatProfile::standard(),
            compact: ChatProfile::compact(),
        }
    }
}
