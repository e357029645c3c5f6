use thiserror::Error;

/// Failures on the caller side of a deck: reading input and scripts.
///
/// Deck operations themselves never fail; an empty deck is reported
/// through their return values.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Card count must be a non-negative integer, got '{0}'")]
    InvalidCount(String),

    #[error("Capacity must be an integer in 0..={max}, got '{input}'")]
    InvalidCapacity { input: String, max: u32 },

    #[error("Row {row}: unknown operation '{op}'")]
    UnknownOp { row: usize, op: String },

    #[error("Row {row}: '{op}' needs a card id")]
    MissingId { row: usize, op: String },

    #[error("Malformed script: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
