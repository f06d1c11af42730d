use serde::{Deserialize, Serialize};

/// Response languages the assistant supports. Unknown codes resolve to `En`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    It,
    #[default]
    En,
    Sv,
}

impl Language {
    /// Fallback probe order for chunk text when the wanted variant is missing.
    pub const PROBE_ORDER: [Language; 3] = [Language::En, Language::It, Language::Sv];

    pub fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
            Language::Sv => "sv",
        }
    }

    /// Exact, case-sensitive match: `"IT"` is not a known code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "it" => Some(Language::It),
            "en" => Some(Language::En),
            "sv" => Some(Language::Sv),
            _ => None,
        }
    }

    /// Resolves a caller-supplied code, defaulting when absent or unrecognized.
    pub fn resolve(requested: Option<&str>) -> Self {
        requested.and_then(Self::from_code).unwrap_or_default()
    }

    /// Label used inside the (Italian) system prompts.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Language::It => "italiano",
            Language::En => "inglese",
            Language::Sv => "svedese",
        }
    }
}
