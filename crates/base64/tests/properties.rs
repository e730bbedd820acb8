//! Property tests for the encode/decode pair.

use b64_codec::{decode, decoded_len, encode, encoded_len, is_alphabet_byte, PAD_BYTE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = encode(&data);
        prop_assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn output_length(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        prop_assert_eq!(encoded.len(), 4 * data.len().div_ceil(3));
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(decoded_len(&encoded).unwrap(), data.len());
    }

    #[test]
    fn padding_and_alphabet(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        let pads = encoded.bytes().filter(|&b| b == PAD_BYTE).count();
        let expected_pads = (3 - data.len() % 3) % 3;
        prop_assert_eq!(pads, expected_pads);
        let body = &encoded.as_bytes()[..encoded.len() - pads];
        prop_assert!(body.iter().all(|&b| is_alphabet_byte(b)));
    }

    #[test]
    fn never_panics(text in "\\PC{0,64}") {
        let _ = decode(&text);
        let _ = decoded_len(&text);
    }

    #[test]
    fn decoded_len_agrees_with_decode(text in "[A-Za-z0-9+/=]{0,32}") {
        if let Ok(bytes) = decode(&text) {
            prop_assert_eq!(decoded_len(&text).unwrap(), bytes.len());
        }
    }
}
