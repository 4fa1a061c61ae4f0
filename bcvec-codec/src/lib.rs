//! Transcoding between bcrypt's radix-64 text encoding and raw bytes, plus
//! rendering of those bytes as escaped byte-string literals.
//!
//! Bcrypt hash strings carry their salt and digest in a custom base64-like
//! encoding: the same 64 symbols as standard base64, but in a different order
//! (`./A-Za-z0-9` instead of `A-Za-z0-9+/`) and without `=` padding. This
//! crate maps that encoding onto a strict standard-base64 decode by pure
//! character substitution, and turns the resulting bytes into `b"..."`
//! literals that reproduce every byte exactly when compiled into a test
//! suite.
//!
//! Both directions are pure functions over their inputs. There is no shared
//! state, so everything here is safe to call concurrently.

pub mod alphabet;
pub mod error;
pub mod literal;

pub use alphabet::{BCRYPT_ALPHABET, STANDARD_ALPHABET, decode, encode};
pub use error::DecodeError;
pub use literal::{RenderStyle, byte_string_literal};

/// Number of symbols in the bcrypt radix-64 alphabet.
pub const ALPHABET_SIZE: usize = 64;
