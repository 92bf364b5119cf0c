use super::{encoder_with, word};
use crate::encoder::{EncodeError, Encoder, EOM};

#[test]
fn test_prosign_stream() {
    let mut encoder = encoder_with("AR SK");
    assert_eq!(encoder.get_next().unwrap(), ". - . - .");
    assert_eq!(encoder.get_next().unwrap(), ". . . - . -");
    assert_eq!(encoder.get_next().unwrap(), EOM);
}

#[test]
fn test_word_by_word() {
    let mut encoder = encoder_with("CQ AR DE K");
    assert_eq!(encoder.get_next().unwrap(), word(&["- . - .", "- - . -"]));
    assert_eq!(encoder.get_next().unwrap(), ". - . - .");
    assert_eq!(encoder.get_next().unwrap(), word(&["- . .", "."]));
    assert_eq!(encoder.get_next().unwrap(), "- . -");
    assert_eq!(encoder.get_next().unwrap(), EOM);
}

#[test]
fn test_sentinel_is_sticky() {
    let mut encoder = encoder_with("E");
    encoder.get_next().unwrap();
    for _ in 0..5 {
        assert_eq!(encoder.get_next().unwrap(), EOM);
        assert_eq!(encoder.position(), 1);
    }
}

#[test]
fn test_new_encoder_is_exhausted() {
    let mut encoder = Encoder::new();
    assert_eq!(encoder.get_next().unwrap(), EOM);
    assert_eq!(encoder.position(), 0);
}

#[test]
fn test_empty_and_blank_messages() {
    for text in ["", "   ", "\n\t"] {
        let mut encoder = encoder_with(text);
        assert!(encoder.words().is_empty());
        assert_eq!(encoder.get_message().unwrap(), "");
        assert_eq!(encoder.get_next().unwrap(), EOM);
    }
}

#[test]
fn test_error_skips_failed_word() {
    let mut encoder = encoder_with("HELLO ~ WORLD");
    assert!(encoder.get_next().is_ok());
    assert_eq!(
        encoder.get_next(),
        Err(EncodeError::UnsupportedCharacter('~'))
    );
    assert_eq!(encoder.position(), 2);
    assert_eq!(
        encoder.get_next().unwrap(),
        word(&[". - -", "- - -", ". - .", ". - . .", "- . ."])
    );
    assert_eq!(encoder.get_next().unwrap(), EOM);
}

#[test]
fn test_set_message_rewinds() {
    let mut encoder = encoder_with("E T");
    encoder.get_next().unwrap();
    encoder.get_next().unwrap();
    assert!(encoder.is_exhausted());

    encoder.set_message("E T");
    assert_eq!(encoder.position(), 0);
    assert_eq!(encoder.remaining(), 2);
    assert_eq!(encoder.get_next().unwrap(), ".");
}

#[test]
fn test_clear_mid_stream() {
    let mut encoder = encoder_with("CQ DE K");
    encoder.get_next().unwrap();
    encoder.clear_message();
    assert_eq!(encoder.position(), 0);
    assert_eq!(encoder.get_next().unwrap(), EOM);
}

#[test]
fn test_remaining_counts_down() {
    let mut encoder = encoder_with("A B C");
    assert_eq!(encoder.remaining(), 3);
    encoder.get_next().unwrap();
    assert_eq!(encoder.remaining(), 2);
    encoder.get_next().unwrap();
    encoder.get_next().unwrap();
    encoder.get_next().unwrap();
    assert_eq!(encoder.remaining(), 0);
}

#[test]
fn test_stream_matches_full_message() {
    let mut encoder = encoder_with("the quick brown fox 1/2 = 0.5");
    let full = encoder.get_message().unwrap();
    let parts: Vec<String> = encoder.drain().map(|r| r.unwrap()).collect();
    assert_eq!(parts.join(super::WORD_GAP), full);
}

#[test]
fn test_drain_yields_errors_in_place() {
    let mut encoder = encoder_with("A ~ B");
    let drained: Vec<_> = encoder.drain().collect();
    assert_eq!(drained.len(), 3);
    assert_eq!(drained[0].as_deref(), Ok(". -"));
    assert_eq!(drained[1], Err(EncodeError::UnsupportedCharacter('~')));
    assert_eq!(drained[2].as_deref(), Ok("- . . ."));
    assert!(encoder.is_exhausted());
}

#[test]
fn test_drain_resumes_from_cursor() {
    let mut encoder = encoder_with("A B C");
    encoder.get_next().unwrap();
    let drain = encoder.drain();
    assert_eq!(drain.len(), 2);
    assert_eq!(drain.count(), 2);
    assert_eq!(encoder.get_next().unwrap(), EOM);
}
