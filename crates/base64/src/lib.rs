//! Base64 encoding and decoding.
//!
//! This crate provides the standard base64 alphabet with padding:
//! - Table-driven encoding of any byte slice
//! - Strict decoding that rejects bad lengths, foreign characters and
//!   misplaced padding
//! - UTF-8 helpers for string input and output
//! - Round-trip checks built on the public encode/decode pair
//!
//! # Example
//!
//! ```
//! use b64_codec::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod decode;
mod encode;
mod roundtrip;
mod text;

pub use alphabet::{
    decode_sextet, encode_sextet, is_alphabet_byte, ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE,
};
pub use decode::{decode, decoded_len};
pub use encode::{encode, encoded_len};
pub use roundtrip::{
    sample_inputs, verify_round_trip, verify_samples, RoundTripError, SAMPLE_REPEATS,
    SAMPLE_TEXT, SAMPLE_UNICODE,
};
pub use text::{decode_text, encode_text, TextDecodeError};

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedInputError {
    /// The text length is not a multiple of 4.
    #[error("base64 text length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A character outside the alphabet; `position` is its byte offset.
    #[error("invalid base64 character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },
    /// Padding somewhere other than the last one or two positions.
    #[error("misplaced padding at byte {position}")]
    MisplacedPadding { position: usize },
}
