//! The standard base64 alphabet and its inverse.

/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Reverse lookup: alphabet byte to sextet, `-1` for everything else.
static DECODE_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Maps a sextet to its alphabet byte. Only the low six bits of `value` are used.
#[inline]
pub const fn encode_sextet(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0x3f) as usize]
}

/// Maps an alphabet byte back to its sextet.
///
/// Returns `None` for any byte outside the 64-symbol alphabet, the pad byte
/// included.
///
/// ```
/// use b64_codec::decode_sextet;
///
/// assert_eq!(decode_sextet(b'A'), Some(0));
/// assert_eq!(decode_sextet(b'/'), Some(63));
/// assert_eq!(decode_sextet(b'='), None);
/// ```
#[inline]
pub fn decode_sextet(byte: u8) -> Option<u8> {
    let value = DECODE_TABLE[byte as usize];
    if value < 0 {
        None
    } else {
        Some(value as u8)
    }
}

#[inline]
pub fn is_alphabet_byte(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] >= 0
}
