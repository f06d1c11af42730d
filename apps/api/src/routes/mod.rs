pub mod health;

use axum::{
    http::{header, Method},
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/chat", chat_route(post(handlers::handle_chat)))
        .route("/api/chat-v2", chat_route(post(handlers::handle_chat_v2)))
        .layer(cors_layer())
        .with_state(state)
}

/// POST handler plus explicit OPTIONS and a JSON 405 for everything else.
fn chat_route(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route
        .options(handlers::handle_preflight)
        .fallback(handlers::handle_method_not_allowed)
}

/// Any origin may POST JSON to the chat endpoints.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
