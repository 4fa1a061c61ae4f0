use bcvec_codec::decode;

use crate::error::{Error, Field};

/// Length of the `$2b$NN$` version-and-cost header on an encoded salt or
/// full hash string.
pub const HEADER_LEN: usize = 7;

/// Offset of the two cost digits inside the header.
pub const COST_OFFSET: usize = 4;

/// Number of base-10 digits in the cost field.
pub const COST_DIGITS: usize = 2;

/// Length of the bcrypt radix-64 salt segment embedded in a full hash string.
pub const SALT_B64_LEN: usize = 22;

/// A reference vector as supplied by the corpus: raw key bytes, the encoded
/// salt (header + radix-64 salt), and the full expected hash string.
#[derive(Clone, Copy, Debug)]
pub struct TestVector {
    pub key: &'static [u8],
    pub encoded_salt: &'static str,
    pub expected: &'static str,
}

/// A vector with its textual fields pulled apart and decoded to raw bytes.
/// Computed once per vector during the emission pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedVector {
    pub key: Vec<u8>,
    pub log_rounds: u32,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Splits one vector's fixed-offset fields and decodes the salt and hash
/// segments. `index` labels any error with the failing vector's position.
///
/// The cost digits get no range validation beyond integer parsing; the salt
/// and hash segments get no length validation beyond what the strict decode
/// enforces.
pub fn decode_vector(index: usize, vector: &TestVector) -> Result<DecodedVector, Error> {
    let digits = vector
        .encoded_salt
        .get(COST_OFFSET..COST_OFFSET + COST_DIGITS)
        .ok_or(Error::FieldMissing { index, field: Field::Cost })?;
    let log_rounds = digits
        .parse::<u32>()
        .map_err(|source| Error::Cost { index, digits: digits.to_string(), source })?;

    let salt_b64 = vector
        .encoded_salt
        .get(HEADER_LEN..)
        .ok_or(Error::FieldMissing { index, field: Field::Salt })?;
    let salt =
        decode(salt_b64).map_err(|source| Error::Decode { index, field: Field::Salt, source })?;

    // The full hash string repeats the 22-char encoded salt after its own
    // header; the hash segment starts right behind it.
    let hash_b64 = vector
        .expected
        .get(HEADER_LEN + SALT_B64_LEN..)
        .ok_or(Error::FieldMissing { index, field: Field::Hash })?;
    let hash =
        decode(hash_b64).map_err(|source| Error::Decode { index, field: Field::Hash, source })?;

    Ok(DecodedVector { key: vector.key.to_vec(), log_rounds, salt, hash })
}
