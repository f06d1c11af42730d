// Retrieval: tokenize the latest message, score and select résumé chunks,
// assemble them into the prompt context. Pure, synchronous, no LLM calls.

pub mod assembler;
pub mod selector;
pub mod tokenizer;

use crate::documents::DocumentStore;
use crate::models::language::Language;
use crate::retrieval::assembler::assemble_context;
use crate::retrieval::selector::{select_chunks, SelectionPolicy};
use crate::retrieval::tokenizer::Query;

/// Outcome of the retrieval step for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedContext {
    pub query: Query,
    pub selected_ids: Vec<u32>,
    pub context: String,
}

/// Runs tokenizer → selector → assembler for the latest user message.
pub fn retrieve_context(
    store: &DocumentStore,
    latest_message: &str,
    policy: &SelectionPolicy,
    language: Option<Language>,
) -> RetrievedContext {
    let query = Query::parse(latest_message);
    let selected = select_chunks(store, &query, policy);
    let context = assemble_context(&selected, language);

    RetrievedContext {
        selected_ids: selected.iter().map(|c| c.id).collect(),
        query,
        context,
    }
}
