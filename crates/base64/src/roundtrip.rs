//! Round-trip checks that drive the codec through `encode`/`decode` only.

use crate::{decode, encode, encoded_len, MalformedInputError};

/// Sample strings covering short, long and multi-byte input.
pub const SAMPLE_TEXT: &str = "Hello, World!";
pub const SAMPLE_UNICODE: &str = "Hello Unicode! 😊";

/// Repetition counts applied to [`SAMPLE_TEXT`] by [`sample_inputs`].
pub const SAMPLE_REPEATS: [usize; 5] = [1, 100, 1_000, 10_000, 100_000];

/// Error type for a failed round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundTripError {
    /// The decoder rejected the encoder's own output.
    #[error("decoder rejected encoder output: {0}")]
    Decode(#[from] MalformedInputError),
    /// The encoded text has the wrong length.
    #[error("encoded {input_len} bytes into {actual} characters, expected {expected}")]
    BadLength {
        input_len: usize,
        expected: usize,
        actual: usize,
    },
    /// Decoding produced different bytes; `offset` is the first difference.
    #[error("round trip of {input_len} bytes diverged at byte {offset}")]
    Mismatch { input_len: usize, offset: usize },
}

/// Encodes then decodes `input`, returning the encoded text when the
/// decoded bytes match exactly.
///
/// ```
/// use b64_codec::verify_round_trip;
///
/// assert_eq!(verify_round_trip(b"foo").unwrap(), "Zm9v");
/// ```
pub fn verify_round_trip(input: &[u8]) -> Result<String, RoundTripError> {
    let encoded = encode(input);

    let expected = encoded_len(input.len());
    if encoded.len() != expected {
        return Err(RoundTripError::BadLength {
            input_len: input.len(),
            expected,
            actual: encoded.len(),
        });
    }

    let decoded = decode(&encoded)?;
    if let Some(offset) = first_difference(input, &decoded) {
        return Err(RoundTripError::Mismatch {
            input_len: input.len(),
            offset,
        });
    }

    log::trace!("round trip ok: {} bytes -> {} chars", input.len(), encoded.len());
    Ok(encoded)
}

fn first_difference(left: &[u8], right: &[u8]) -> Option<usize> {
    match left.iter().zip(right).position(|(l, r)| l != r) {
        Some(offset) => Some(offset),
        None if left.len() != right.len() => Some(left.len().min(right.len())),
        None => None,
    }
}

/// The sample strings: [`SAMPLE_TEXT`] at each of [`SAMPLE_REPEATS`],
/// followed by [`SAMPLE_UNICODE`].
pub fn sample_inputs() -> Vec<String> {
    SAMPLE_REPEATS
        .iter()
        .map(|&count| SAMPLE_TEXT.repeat(count))
        .chain(std::iter::once(SAMPLE_UNICODE.to_string()))
        .collect()
}

/// Runs [`verify_round_trip`] over every sample input, stopping at the
/// first failure. Returns the number of samples checked.
pub fn verify_samples() -> Result<usize, RoundTripError> {
    let samples = sample_inputs();
    for sample in &samples {
        verify_round_trip(sample.as_bytes())?;
    }
    Ok(samples.len())
}
