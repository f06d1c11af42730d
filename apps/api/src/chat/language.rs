//! Best-effort language correction.
//!
//! Small models sometimes drift away from the language the user wrote in. When
//! the answer is detected in a different language than the latest user message,
//! a second call asks the model to rewrite it. This stage has its own failure domain: any error
//! keeps the original answer.

use tracing::{info, warn};

use crate::chat::profile::ChatProfile;
use crate::llm_client::prompts::language_rewrite_system;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::chat::ChatMessage;
use crate::models::language::Language;

/// Minimum stopword hits before a language is reported.
const MIN_STOPWORD_HITS: usize = 2;

const STOPWORDS_EN: &[&str] = &[
    "the", "and", "is", "are", "was", "were", "with", "for", "of", "to", "he", "his", "has",
    "have", "this", "that", "at", "as", "on", "from", "by", "which", "also", "an",
];

const STOPWORDS_IT: &[&str] = &[
    "il", "lo", "la", "gli", "le", "di", "che", "è", "e", "per", "con", "un", "una", "del",
    "della", "nel", "ha", "sono", "ho", "anche", "come", "suo", "sua", "dei", "delle", "presso",
];

const STOPWORDS_SV: &[&str] = &[
    "och", "att", "det", "är", "som", "för", "med", "på", "av", "en", "ett", "han", "hans",
    "har", "var", "till", "inte", "jag", "om", "den", "de", "sig", "vid",
];

/// Stopword-count language guess. `None` when the text is too short or ambiguous.
pub fn detect_language(text: &str) -> Option<Language> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .collect();

    let mut scores = [
        (Language::En, count_hits(&words, STOPWORDS_EN)),
        (Language::It, count_hits(&words, STOPWORDS_IT)),
        (Language::Sv, count_hits(&words, STOPWORDS_SV)),
    ];
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let (best, best_hits) = scores[0];
    if best_hits < MIN_STOPWORD_HITS || best_hits == scores[1].1 {
        return None;
    }
    Some(best)
}

fn count_hits(words: &[&str], stopwords: &[&str]) -> usize {
    words.iter().filter(|w| stopwords.contains(*w)).count()
}

/// Rewrites `answer` into the language of `query` when the two are detected
/// in different languages. Nothing happens if either side is undetectable.
///
/// Never fails: on any upstream error or empty rewrite, returns `answer` as-is.
pub async fn correct_language(
    client: &dyn CompletionClient,
    profile: &ChatProfile,
    query: &str,
    answer: String,
) -> String {
    let (asked, answered) = match (detect_language(query), detect_language(&answer)) {
        (Some(asked), Some(answered)) if asked != answered => (asked, answered),
        _ => return answer,
    };

    info!(
        "Answer detected as '{}' but query as '{}', requesting rewrite",
        answered.code(),
        asked.code()
    );

    let request = CompletionRequest {
        model: profile.model.clone(),
        messages: vec![
            ChatMessage::system(language_rewrite_system(asked.prompt_label())),
            ChatMessage::user(answer.clone()),
        ],
        temperature: 0.0,
        max_tokens: profile.max_tokens,
        top_p: profile.top_p,
        stream: false,
    };

    match client.complete(&request).await {
        Ok(response) => match response.text().map(str::trim).filter(|t| !t.is_empty()) {
            Some(rewritten) => rewritten.to_string(),
            None => {
                warn!("Language correction returned no text, keeping original answer");
                answer
            }
        },
        Err(e) => {
            warn!("Language correction failed, keeping original answer: {e}");
            answer
        }
    }
}
