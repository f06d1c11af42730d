// Chat API: answers questions about the résumé.
// Retrieval is local; the only LLM calls go through llm_client.

pub mod handlers;
pub mod language;
pub mod profile;
pub mod prompts;
pub mod responder;
pub mod suggestions;
