/// Errors produced while decoding bcrypt radix-64 text.
///
/// Decoding is all-or-nothing: any of these means the input is a malformed
/// or unsupported fixture, and there is no recovery path.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A symbol outside the 64-symbol bcrypt alphabet.
    #[error("symbol {symbol:?} at offset {offset} is not in the bcrypt alphabet")]
    Alphabet { offset: usize, symbol: char },

    /// The remapped, padded text was rejected by the base64 layer: bad
    /// structure, bad padding, or non-zero trailing bits.
    #[error("padded text rejected by base64 decoder: {source}")]
    Padding {
        #[source]
        source: base64::DecodeError,
    },
}
