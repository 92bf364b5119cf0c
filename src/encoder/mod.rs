//! Text-to-Morse encoder with whole-message and word-at-a-time output.
//!
//! `Encoder` stores a message, tokenizes it into uppercase words, and either
//! renders the whole message at once or hands out one word per call until
//! the end-of-message sentinel.

mod translate;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::settings::{settings, Settings};
use crate::table::MorseTable;

use translate::{tokenize, translate_word, Layout};

/// Sentinel returned by [`Encoder::get_next`] once every word has been
/// handed out, under the default settings.
pub const EOM: &str = "<EOM>";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("unsupported character: {0}")]
    UnsupportedCharacter(char),
}

/// Stateful encoder holding one message and a word cursor.
///
/// Tables are borrowed, never owned, so any number of encoders can share the
/// global [`MorseTable`]. An encoder itself is not meant to be shared; the
/// `&mut self` methods serialize access.
#[derive(Debug, Clone)]
pub struct Encoder<'t> {
    table: &'t MorseTable,
    layout: Layout,

    message: String,
    words: Vec<String>,
    word_index: usize,
}

impl Encoder<'static> {
    /// Encoder over the global table and settings.
    pub fn new() -> Self {
        Self::with_config(MorseTable::global(), settings())
    }
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Encoder<'t> {
    pub fn with_config(table: &'t MorseTable, settings: &Settings) -> Self {
        Self {
            table,
            layout: Layout::from(settings),
            message: String::new(),
            words: Vec::new(),
            word_index: 0,
        }
    }

    /// Replace the stored message and rewind the cursor.
    ///
    /// Characters are not checked here; an unsupported character only
    /// surfaces when the word containing it is translated.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
        self.words = tokenize(&self.message);
        self.word_index = 0;
        debug!(word_count = self.words.len(), "message set");
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
        self.words.clear();
        self.word_index = 0;
    }

    /// Translate the whole stored message.
    ///
    /// Letters are separated by the letter gap (3 spaces by default) and
    /// words by the word gap (7 spaces). Prosigns are emitted verbatim. The
    /// cursor used by [`get_next`](Self::get_next) is neither read nor moved.
    pub fn get_message(&self) -> Result<String, EncodeError> {
        let words = tokenize(&self.message);
        let _span = debug_span!("get_message", word_count = words.len()).entered();

        let mut result = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.layout.word_gap);
            }
            result.push_str(&translate_word(self.table, word, &self.layout.letter_gap)?);
        }
        Ok(result)
    }

    /// Translate the word under the cursor and advance past it.
    ///
    /// Returns the end-of-message sentinel once the cursor reaches the end,
    /// and keeps returning it. The cursor moves before translation, so after
    /// an error the next call resumes at the following word.
    pub fn get_next(&mut self) -> Result<String, EncodeError> {
        let Some(word) = self.words.get(self.word_index) else {
            return Ok(self.layout.end_of_message.clone());
        };
        let _span = debug_span!("get_next", index = self.word_index).entered();
        self.word_index += 1;
        translate_word(self.table, word, &self.layout.letter_gap)
    }

    /// Iterate the remaining words through [`get_next`](Self::get_next),
    /// stopping before the sentinel.
    pub fn drain(&mut self) -> Drain<'_, 't> {
        Drain { encoder: self }
    }

    /// The stored message, verbatim.
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Uppercase word tokens of the stored message.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn position(&self) -> usize {
        self.word_index
    }

    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.word_index)
    }

    pub fn is_exhausted(&self) -> bool {
        self.word_index >= self.words.len()
    }
}

/// Iterator returned by [`Encoder::drain`].
///
/// Errors are yielded in place of the failed word; iteration continues with
/// the next word.
pub struct Drain<'e, 't> {
    encoder: &'e mut Encoder<'t>,
}

impl Iterator for Drain<'_, '_> {
    type Item = Result<String, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.encoder.is_exhausted() {
            return None;
        }
        Some(self.encoder.get_next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.encoder.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Drain<'_, '_> {}

/// Translate a single word without an encoder. Whitespace inside `word` is
/// rejected as an unsupported character.
pub fn encode_word(word: &str) -> Result<String, EncodeError> {
    let layout = Layout::from(settings());
    translate_word(
        MorseTable::global(),
        &word.to_ascii_uppercase(),
        &layout.letter_gap,
    )
}

/// Translate a whole message without keeping cursor state.
pub fn encode_text(text: &str) -> Result<String, EncodeError> {
    let mut encoder = Encoder::new();
    encoder.set_message(text);
    encoder.get_message()
}
