//! Chat pipeline: validation → retrieval → prompt → completion → post-processing.
//!
//! All LLM calls go through the injected `CompletionClient`.

use tracing::{debug, info};

use crate::chat::language::correct_language;
use crate::chat::profile::ChatProfile;
use crate::chat::prompts::render_system_prompt;
use crate::chat::suggestions::split_suggestions;
use crate::documents::DocumentStore;
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::models::language::Language;
use crate::retrieval::retrieve_context;

/// Returned when the model produced no text.
pub const FALLBACK_ANSWER: &str = "Sorry, I could not generate a response.";

/// Collaborators and settings for one chat request.
pub struct ChatContext<'a> {
    pub store: &'a DocumentStore,
    pub client: &'a dyn CompletionClient,
    pub profile: &'a ChatProfile,
    /// Whether a completion API key is configured.
    pub credentials_configured: bool,
}

pub async fn respond(ctx: ChatContext<'_>, request: ChatRequest) -> Result<ChatResponse, AppError> {
    let messages = match request.messages.as_deref() {
        Some(messages) if !messages.is_empty() => messages,
        _ => return Err(AppError::InvalidInput("Invalid messages format".to_string())),
    };

    let language = Language::resolve(request.language_code());
    let latest = messages.last().map(|m| m.content.as_str()).unwrap_or_default();

    let retrieved = retrieve_context(
        ctx.store,
        latest,
        &ctx.profile.selection,
        ctx.profile.context_language(language),
    );
    debug!(
        "[{}] {} terms, selected chunks {:?}",
        ctx.profile.name,
        retrieved.query.terms.len(),
        retrieved.selected_ids
    );

    if !ctx.credentials_configured {
        return Err(AppError::Config(
            "Missing GROQ_API_KEY configuration".to_string(),
        ));
    }

    let completion_request =
        build_completion_request(ctx.profile, language, &retrieved.context, messages);
    let response = ctx.client.complete(&completion_request).await?;
    let raw_answer = response.text().unwrap_or(FALLBACK_ANSWER);

    let (answer, suggested_questions) = if ctx.profile.suggest_questions {
        let formatted = split_suggestions(raw_answer);
        (formatted.answer, Some(formatted.suggested_questions))
    } else {
        (raw_answer.to_string(), None)
    };

    let answer = if ctx.profile.correct_language && answer != FALLBACK_ANSWER {
        correct_language(ctx.client, ctx.profile, latest, answer).await
    } else {
        answer
    };

    info!(
        "[{}] answered in '{}' ({} chars)",
        ctx.profile.name,
        language.code(),
        answer.len()
    );

    Ok(ChatResponse {
        answer,
        language,
        suggested_questions,
    })
}

/// System prompt followed by the last `history_window` turns of the conversation.
pub fn build_completion_request(
    profile: &ChatProfile,
    language: Language,
    context: &str,
    history: &[ChatMessage],
) -> CompletionRequest {
    let recent = &history[history.len().saturating_sub(profile.history_window)..];

    let mut messages = Vec::with_capacity(recent.len() + 1);
    messages.push(ChatMessage::system(render_system_prompt(profile, language, context)));
    messages.extend(recent.iter().cloned());

    CompletionRequest {
        model: profile.model.clone(),
        messages,
        temperature: profile.temperature,
        max_tokens: profile.max_tokens,
        top_p: profile.top_p,
        stream: false,
    }
}
