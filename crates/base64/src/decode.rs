//! Standard base64 decoding with strict length and padding checks.

use crate::alphabet::{decode_sextet, PAD_BYTE};
use crate::MalformedInputError;

fn check_length(bytes: &[u8]) -> Result<(), MalformedInputError> {
    if !bytes.len().is_multiple_of(4) {
        return Err(MalformedInputError::InvalidLength {
            length: bytes.len(),
        });
    }
    Ok(())
}

/// Builds the error for a non-alphabet character starting at `position`.
///
/// Every byte before `position` has already been accepted as ASCII, so the
/// offset sits on a character boundary.
fn invalid_character(text: &str, position: usize) -> MalformedInputError {
    let character = text
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    MalformedInputError::InvalidCharacter {
        character,
        position,
    }
}

/// Number of bytes `decode` would produce for `text`.
///
/// Checks the length and where the padding sits, but not whether the other
/// characters belong to the alphabet.
///
/// ```
/// use b64_codec::decoded_len;
///
/// assert_eq!(decoded_len("Zm9vYg==").unwrap(), 4);
/// assert!(decoded_len("Zm9").is_err());
/// ```
pub fn decoded_len(text: &str) -> Result<usize, MalformedInputError> {
    let bytes = text.as_bytes();
    check_length(bytes)?;

    let padding = match bytes.iter().position(|&b| b == PAD_BYTE) {
        None => 0,
        Some(position) => {
            let tail = &bytes[position..];
            if tail.len() > 2 || tail.iter().any(|&b| b != PAD_BYTE) {
                return Err(MalformedInputError::MisplacedPadding { position });
            }
            tail.len()
        }
    };

    Ok(bytes.len() / 4 * 3 - padding)
}

fn decode_groups(text: &str) -> Result<Vec<u8>, MalformedInputError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    check_length(bytes)?;

    let last_group = bytes.len() - 4;
    let mut out = Vec::with_capacity(bytes.len() / 4 * 3);

    for (start, group) in (0..).step_by(4).zip(bytes.chunks_exact(4)) {
        let mut sextets = [0u8; 4];
        let mut padding = 0;

        for (i, &byte) in group.iter().enumerate() {
            let position = start + i;
            match decode_sextet(byte) {
                Some(value) if padding == 0 => sextets[i] = value,
                // "xx=x": the pad in the third slot is the offending element.
                Some(_) => {
                    return Err(MalformedInputError::MisplacedPadding {
                        position: position - 1,
                    })
                }
                None if byte == PAD_BYTE && start == last_group && i >= 2 => padding += 1,
                None if byte == PAD_BYTE => {
                    return Err(MalformedInputError::MisplacedPadding { position })
                }
                None => return Err(invalid_character(text, position)),
            }
        }

        let [v0, v1, v2, v3] = sextets;
        out.push((v0 << 2) | (v1 >> 4));
        if padding < 2 {
            out.push(((v1 & 0x0f) << 4) | (v2 >> 2));
        }
        if padding < 1 {
            out.push(((v2 & 0x03) << 6) | v3);
        }
    }

    Ok(out)
}

/// Decodes standard, padded base64 text.
///
/// The empty string decodes to an empty vector. Any other input must be a
/// multiple of four characters from the alphabet, with at most two `=`
/// characters at the very end. On failure nothing is returned except an
/// error describing the first malformed element.
///
/// # Example
///
/// ```
/// use b64_codec::{decode, MalformedInputError};
///
/// assert_eq!(decode("Zm9v").unwrap(), b"foo");
/// assert_eq!(
///     decode("Zm9"),
///     Err(MalformedInputError::InvalidLength { length: 3 })
/// );
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, MalformedInputError> {
    decode_groups(text).inspect_err(|err| log::debug!("rejected base64 input: {err}"))
}
