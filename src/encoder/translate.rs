use tracing::debug;

use super::EncodeError;
use crate::settings::Settings;
use crate::table::MorseTable;

/// Separators and sentinel rendered from [`Settings`] once per encoder.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    pub letter_gap: String,
    pub word_gap: String,
    pub end_of_message: String,
}

impl From<&Settings> for Layout {
    fn from(s: &Settings) -> Self {
        Self {
            letter_gap: " ".repeat(s.spacing.letter_gap),
            word_gap: " ".repeat(s.spacing.word_gap),
            end_of_message: s.stream.end_of_message.clone(),
        }
    }
}

/// Split on whitespace and fold each word to ASCII uppercase.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_ascii_uppercase())
        .collect()
}

/// Translate one uppercase word. A prosign match wins over per-character
/// lookup; otherwise the first character without a pattern aborts the word.
pub(crate) fn translate_word(
    table: &MorseTable,
    word: &str,
    letter_gap: &str,
) -> Result<String, EncodeError> {
    if let Some(pattern) = table.prosign(word) {
        return Ok(pattern.to_string());
    }

    let mut result = String::new();
    for (i, c) in word.chars().enumerate() {
        let Some(pattern) = table.symbol(c) else {
            let c = c.to_ascii_uppercase();
            debug!(%c, word, "unsupported character");
            return Err(EncodeError::UnsupportedCharacter(c));
        };
        if i > 0 {
            result.push_str(letter_gap);
        }
        result.push_str(pattern);
    }
    Ok(result)
}
