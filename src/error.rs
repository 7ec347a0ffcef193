//! Error types for swalign

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A byte outside of `ACGT` reached the query profile or the database lookup of the
    /// vector lane engine
    #[error("invalid nucleotide {symbol:?} at position {position} of sequence '{label}'")]
    InvalidSymbol {
        label: String,
        position: usize,
        symbol: char,
    },

    #[error("unknown alignment mode '{0}' (expected 'scalar' or 'vector')")]
    UnknownMode(String),

    #[error("invalid scoring: {0}")]
    InvalidScoring(String),

    #[error("expected {expected} FASTA records, found {found}")]
    MissingRecord { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
