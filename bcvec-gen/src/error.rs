use std::fmt;

/// Which fixed-offset field of a vector an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Cost,
    Salt,
    Hash,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Cost => "cost digits",
            Field::Salt => "salt segment",
            Field::Hash => "hash segment",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vector {index}: {field} missing, string too short for its fixed offset")]
    FieldMissing { index: usize, field: Field },

    #[error("vector {index}: cost digits {digits:?} are not a base-10 integer: {source}")]
    Cost {
        index: usize,
        digits: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("vector {index}: {field}: {source}")]
    Decode {
        index: usize,
        field: Field,
        #[source]
        source: bcvec_codec::DecodeError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
