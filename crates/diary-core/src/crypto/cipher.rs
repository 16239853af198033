//! Keystream transform and text encoding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Decoder that accepts unpadded input and non-zero trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// XOR `data` with `key` repeated cyclically to the length of `data`.
///
/// Applying the transform twice with the same key yields the original data.
/// An empty key is treated as an all-zero keystream, so the output equals
/// the input.
pub fn transform(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

/// Encode bytes as padded standard base64.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 text, skipping anything that is not part of the encoding.
///
/// Decoding stops at the first `=`. Characters outside the base64 alphabet
/// (whitespace, line breaks, stray punctuation) are dropped, and a trailing
/// group holding a single character carries no full byte and is ignored.
/// This never fails; garbage in produces fewer bytes out.
pub fn decode(text: &str) -> Vec<u8> {
    let mut symbols: Vec<u8> = text
        .bytes()
        .take_while(|&b| b != b'=')
        .filter(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
        .collect();

    if symbols.len() % 4 == 1 {
        symbols.pop();
    }

    LENIENT.decode(&symbols).unwrap_or_else(|err| {
        log::warn!("base64 decode fell through after filtering: {}", err);
        Vec::new()
    })
}

/// Transform `plaintext` with `key` and encode the result as text.
pub fn seal(plaintext: &[u8], key: &[u8]) -> String {
    encode(&transform(plaintext, key))
}

/// Decode `sealed` text and reverse the keystream transform.
pub fn open(sealed: &str, key: &[u8]) -> Vec<u8> {
    transform(&decode(sealed), key)
}
