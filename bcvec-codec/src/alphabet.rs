use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

use crate::error::DecodeError;

/// Bcrypt's radix-64 alphabet, in symbol order.
pub const BCRYPT_ALPHABET: &[u8; 64] =
    b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// The standard base64 alphabet (RFC 4648), in symbol order.
///
/// A permutation of [`BCRYPT_ALPHABET`]: both contain the same 64 symbols,
/// so transcoding is a character substitution at matching positions, not a
/// numeric re-encoding.
pub const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Substitution table from bcrypt symbols to standard base64 symbols.
/// Entries for bytes outside the alphabet are 0, which is never a valid
/// output symbol.
const BCRYPT_TO_STANDARD: [u8; 256] = substitution_table(BCRYPT_ALPHABET, STANDARD_ALPHABET);

/// The inverse substitution, used on the encode path.
const STANDARD_TO_BCRYPT: [u8; 256] = substitution_table(STANDARD_ALPHABET, BCRYPT_ALPHABET);

const fn substitution_table(from: &[u8; 64], to: &[u8; 64]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 64 {
        table[from[i] as usize] = to[i];
        i += 1;
    }
    table
}

/// Decodes bcrypt radix-64 text into the raw bytes it represents.
///
/// Each input symbol is substituted with the standard-base64 symbol at the
/// same alphabet position, the remapped text is padded with `=` to a multiple
/// of four, and the result is decoded strictly: out-of-alphabet symbols,
/// malformed padding, and non-zero trailing bits are all rejected. No partial
/// results are produced.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut remapped = Vec::with_capacity(encoded.len() + 3);

    for (offset, &symbol) in encoded.as_bytes().iter().enumerate() {
        let standard = BCRYPT_TO_STANDARD[symbol as usize];
        if standard == 0 {
            return Err(DecodeError::Alphabet { offset, symbol: symbol as char });
        }
        remapped.push(standard);
    }

    // pad count = (-len) mod 4
    remapped.resize(encoded.len().div_ceil(4) * 4, b'=');

    STANDARD.decode(&remapped).map_err(|source| DecodeError::Padding { source })
}

/// Encodes raw bytes as bcrypt radix-64 text.
///
/// Bcrypt text never carries `=` padding, so the standard encoding is
/// produced unpadded and substituted through the inverse table.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD_NO_PAD
        .encode(bytes)
        .bytes()
        .map(|symbol| STANDARD_TO_BCRYPT[symbol as usize] as char)
        .collect()
}
