//! Axum route handlers for the Chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::chat::profile::ChatProfile;
use crate::chat::responder::{respond, ChatContext};
use crate::errors::AppError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat
///
/// Standard profile: Italian context, large model, suggestions and language correction.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    chat_with_profile(&state, &state.profiles.standard, payload).await
}

/// POST /api/chat-v2
///
/// Compact profile: localized context, small model, short answers.
pub async fn handle_chat_v2(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    chat_with_profile(&state, &state.profiles.compact, payload).await
}

/// OPTIONS on the chat routes: empty 200 for cross-origin clients.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on the chat routes.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn chat_with_profile(
    state: &AppState,
    profile: &ChatProfile,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body is reported exactly like a missing `messages` array.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("Rejected chat body: {rejection}");
            ChatRequest::default()
        }
    };

    let ctx = ChatContext {
        store: &state.store,
        client: state.llm.as_ref(),
        profile,
        credentials_configured: state.config.groq_api_key.is_some(),
    };

    Ok(Json(respond(ctx, request).await?))
}
