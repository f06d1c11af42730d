/// Tokens must be longer than this many characters to become query terms.
pub const MAX_IGNORED_TERM_CHARS: usize = 3;

/// The latest user message, prepared for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Significant terms in message order. Duplicates are kept.
    pub terms: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            terms: tokenize(&raw.to_lowercase()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Splits on non-word characters (word = Unicode alphanumeric or `_`) and
/// drops tokens of three characters or fewer.
pub fn tokenize(lowered: &str) -> Vec<String> {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() > MAX_IGNORED_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_dropped() {
        let query = Query::parse("Tell me about BDO audit experience");
        assert_eq!(query.terms, vec!["tell", "about", "audit", "experience"]);
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        let query = Query::parse("Python/Excel, IFRS?!");
        assert_eq!(query.terms, vec!["python", "excel", "ifrs"]);
    }

    #[test]
    fn test_accented_words_stay_whole() {
        // "università" has 10 chars; a byte-length or ASCII-only split would break it
        let query = Query::parse("Università Cattolica");
        assert_eq!(query.terms, vec!["università", "cattolica"]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "però" is 4 chars (5 bytes); "già" is 3 chars (4 bytes)
        assert_eq!(tokenize("però già"), vec!["però"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(tokenize("audit audit"), vec!["audit", "audit"]);
    }

    #[test]
    fn test_empty_message_has_no_terms() {
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("a an the").is_empty());
    }
}
