use serde::{Deserialize, Serialize};

use crate::models::language::Language;

/// A titled unit of résumé text, the atomic retrieval candidate.
///
/// `text` is the language-neutral default; `text_it` / `text_en` / `text_sv`
/// are optional localized variants. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_it: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_sv: Option<String>,
}

impl Chunk {
    /// Localized variant for `language`, if present and non-empty.
    pub fn variant(&self, language: Language) -> Option<&str> {
        let field = match language {
            Language::It => &self.text_it,
            Language::En => &self.text_en,
            Language::Sv => &self.text_sv,
        };
        non_empty(field)
    }

    /// Text shown to the model.
    ///
    /// Probe order: the `preferred` variant, the default `text`, then the
    /// variants in `Language::PROBE_ORDER`. Falls back to an empty string.
    pub fn text_for(&self, preferred: Option<Language>) -> &str {
        preferred
            .and_then(|lang| self.variant(lang))
            .or_else(|| non_empty(&self.text))
            .or_else(|| {
                Language::PROBE_ORDER
                    .iter()
                    .find_map(|lang| self.variant(*lang))
            })
            .unwrap_or("")
    }

    /// Lower-cased title plus every present text field, used for scoring.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.title.as_str()];
        parts.extend(non_empty(&self.text));
        parts.extend(Language::PROBE_ORDER.iter().filter_map(|lang| self.variant(*lang)));
        parts.join(" ").to_lowercase()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localized() -> Chunk {
        Chunk {
            id: 7,
            title: "Lingue".to_string(),
            text: None,
            text_it: Some("Italiano madrelingua".to_string()),
            text_en: Some("Native Italian speaker".to_string()),
            text_sv: Some(String::new()),
        }
    }

    #[test]
    fn test_text_for_prefers_requested_variant() {
        assert_eq!(localized().text_for(Some(Language::It)), "Italiano madrelingua");
    }

    #[test]
    fn test_empty_variant_falls_back_to_next_language() {
        // text_sv is empty, no default text → English is next in the probe order
        assert_eq!(localized().text_for(Some(Language::Sv)), "Native Italian speaker");
    }

    #[test]
    fn test_default_text_wins_over_other_variants() {
        let mut chunk = localized();
        chunk.text = Some("Testo base".to_string());
        assert_eq!(chunk.text_for(Some(Language::Sv)), "Testo base");
        assert_eq!(chunk.text_for(None), "Testo base");
    }

    #[test]
    fn test_text_for_without_any_text_is_empty() {
        let chunk = Chunk {
            id: 1,
            title: "Empty".to_string(),
            text: None,
            text_it: None,
            text_en: None,
            text_sv: None,
        };
        assert_eq!(chunk.text_for(Some(Language::En)), "");
    }

    #[test]
    fn test_searchable_text_joins_all_fields_lowercased() {
        let text = localized().searchable_text();
        assert_eq!(text, "lingue native italian speaker italiano madrelingua");
    }

    #[test]
    fn test_deserializes_with_only_default_text() {
        let chunk: Chunk =
            serde_json::from_str(r#"{"id": 2, "title": "Education", "text": "Stockholm University"}"#)
                .unwrap();
        assert_eq!(chunk.text.as_deref(), Some("Stockholm University"));
        assert!(chunk.text_en.is_none());
    }
}
