//! Standard base64 encoding.

use crate::alphabet::{encode_sextet, ALPHABET_BYTES, PAD};

/// Pre-computed two-character lookup table.
/// Entry `hi * 64 + lo` holds the alphabet bytes for sextets `hi` and `lo`,
/// so a 12-bit value yields two output characters in one lookup.
static PAIR_TABLE: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut hi = 0;
    while hi < 64 {
        let mut lo = 0;
        while lo < 64 {
            table[hi * 64 + lo] = [ALPHABET_BYTES[hi], ALPHABET_BYTES[lo]];
            lo += 1;
        }
        hi += 1;
    }
    table
};

/// Length of the padded base64 text for `len` input bytes.
///
/// ```
/// use b64_codec::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(6), 8);
/// ```
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

#[inline]
fn push_pair(out: &mut String, twelve_bits: usize) {
    let [first, second] = PAIR_TABLE[twelve_bits];
    out.push(first as char);
    out.push(second as char);
}

/// Encodes bytes as standard, padded base64 text.
///
/// Every input is accepted, the empty slice included.
///
/// # Example
///
/// ```
/// use b64_codec::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    let mut groups = bytes.chunks_exact(3);
    for group in groups.by_ref() {
        let (a, b, c) = (group[0] as usize, group[1] as usize, group[2] as usize);
        // a b c -> [a:8 b:4] [b:4 c:8]
        push_pair(&mut out, (a << 4) | (b >> 4));
        push_pair(&mut out, ((b & 0x0f) << 8) | c);
    }

    match *groups.remainder() {
        [] => {}
        [a] => {
            push_pair(&mut out, (a as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [a, b] => {
            push_pair(&mut out, ((a as usize) << 4) | ((b as usize) >> 4));
            out.push(encode_sextet((b & 0x0f) << 2) as char);
            out.push(PAD);
        }
        _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(b"f"), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"fo"), "Zm8=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_extreme_bytes() {
        assert_eq!(encode(&[0, 0, 0]), "AAAA");
        assert_eq!(encode(&[0xff, 0xff, 0xff]), "////");
        assert_eq!(encode(&[0xff]), "/w==");
        assert_eq!(encode(&[0xff, 0xff]), "//8=");
    }

    #[test]
    fn test_pair_table_matches_sextets() {
        for v in [0usize, 1, 63, 64, 2047, 4095] {
            let [first, second] = PAIR_TABLE[v];
            assert_eq!(first, encode_sextet((v >> 6) as u8));
            assert_eq!(second, encode_sextet((v & 0x3f) as u8));
        }
    }

    #[test]
    fn test_capacity_is_exact() {
        for len in 0..32 {
            let data = vec![0xa5u8; len];
            let encoded = encode(&data);
            assert_eq!(encoded.len(), encoded_len(len));
        }
    }
}
