//! UTF-8 text on either side of the codec.
//!
//! The codec itself only sees bytes. These helpers put the standard UTF-8
//! text encoding in front of it, so that strings with multi-byte characters
//! survive a round trip.

use crate::{decode, encode, MalformedInputError};

/// Error type for decoding base64 back into a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextDecodeError {
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),
    /// The decoded bytes are not UTF-8.
    #[error("decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl From<std::string::FromUtf8Error> for TextDecodeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TextDecodeError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
    }
}

/// Encodes the UTF-8 bytes of `text`.
///
/// ```
/// use b64_codec::encode_text;
///
/// assert_eq!(encode_text("😊"), "8J+Yig==");
/// ```
pub fn encode_text(text: &str) -> String {
    encode(text.as_bytes())
}

/// Decodes base64 and reads the result as UTF-8.
///
/// ```
/// use b64_codec::decode_text;
///
/// assert_eq!(decode_text("8J+Yig==").unwrap(), "😊");
/// ```
pub fn decode_text(encoded: &str) -> Result<String, TextDecodeError> {
    let bytes = decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
