use crate::models::chunk::Chunk;
use crate::models::language::Language;

const CHUNK_SEPARATOR: &str = "\n\n";

/// Formats selected chunks as `### {title}\n{text}` blocks separated by a blank line.
///
/// `language` picks the localized text variant; `None` uses the default text.
/// No length limit is applied here.
pub fn assemble_context(chunks: &[&Chunk], language: Option<Language>) -> String {
    chunks
        .iter()
        .map(|chunk| format!("### {}\n{}", chunk.title, chunk.text_for(language)))
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}
