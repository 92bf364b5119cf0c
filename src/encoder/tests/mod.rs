mod stream;

use super::Encoder;

pub(super) const LETTER_GAP: &str = "   ";
pub(super) const WORD_GAP: &str = "       ";

pub(super) fn encoder_with(text: &str) -> Encoder<'static> {
    let mut encoder = Encoder::new();
    encoder.set_message(text);
    encoder
}

/// Join letter patterns into one word the way the encoder does.
pub(super) fn word(patterns: &[&str]) -> String {
    patterns.join(LETTER_GAP)
}
