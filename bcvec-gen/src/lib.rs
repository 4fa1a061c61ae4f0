//! Renders the pyca bcrypt reference vectors as source-literal tuples for
//! embedding in the test suite of an independent bcrypt implementation.
//!
//! Each reference vector is a `(key, encoded_salt, expected_hash)` triple
//! whose salt and hash fields use bcrypt's custom radix-64 text encoding.
//! The generator pulls the two-digit cost factor out of the salt header,
//! decodes the salt and hash segments to raw bytes with
//! [`bcvec_codec::decode`], and prints one bracketed array of
//! `(key, cost, salt, hash)` tuples — one line per vector, in input order —
//! ready to be `include!`d as test data.
//!
//! # Output
//!
//! ```text
//! [
//!     (b"\x4b\x6b...", 4, b"\x79\x76...", b"\xdb\x8f..."),
//!     ...
//! ]
//! ```
//!
//! The run is all-or-nothing: a single malformed fixture aborts the whole
//! batch with a diagnostic naming the failing vector and field, and nothing
//! is written to stdout. Downstream consumers must treat a non-zero exit as
//! "fixtures unusable, do not regenerate test data."

pub mod corpus;
pub mod emit;
pub mod error;
pub mod extract;

pub use corpus::PYCA_VECTORS;
pub use emit::render_table;
pub use error::{Error, Field};
pub use extract::{
    COST_DIGITS, COST_OFFSET, DecodedVector, HEADER_LEN, SALT_B64_LEN, TestVector, decode_vector,
};
