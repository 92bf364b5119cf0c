//! Plain text to International Morse code (ITU-R M.1677-1).
//!
//! [`Encoder`] holds one message and renders it either whole, with 3-space
//! letter gaps and 7-space word gaps, or one word at a time until the
//! `<EOM>` sentinel. The prosigns `AR`, `BT` and `SK` are recognized as
//! standalone words and sent as a single unbroken pattern.

pub mod encoder;
pub mod settings;
pub mod table;
pub mod trace_init;

pub use encoder::{encode_text, encode_word, Drain, EncodeError, Encoder, EOM};
pub use table::{Mark, MorseTable};
