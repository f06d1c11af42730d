// Shared prompt fragments. Each profile's full system prompt lives in
// chat/prompts.rs; this file holds the pieces every prompt reuses.

/// Response-language directive. Replace `{language_label}` before sending.
pub const LANGUAGE_INSTRUCTION_TEMPLATE: &str = "\
LINGUA:
- Rispondi SEMPRE in {language_label}. Ignora la lingua della domanda e usa SOLO {language_label} per le risposte.";

/// System prompt for the language correction call. Replace `{language_label}`.
pub const LANGUAGE_REWRITE_SYSTEM_TEMPLATE: &str = "\
Sei un traduttore professionale. Riscrivi il testo che ricevi in {language_label}, \
mantenendo significato, tono e lunghezza. \
Restituisci SOLO il testo riscritto, senza commenti, virgolette o spiegazioni.";

pub fn language_instruction(language_label: &str) -> String {
    LANGUAGE_INSTRUCTION_TEMPLATE.replace("{language_label}", language_label)
}

pub fn language_rewrite_system(language_label: &str) -> String {
    LANGUAGE_REWRITE_SYSTEM_TEMPLATE.replace("{language_label}", language_label)
}
