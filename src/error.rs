use thiserror::Error;

/// Errors raised by the worked examples when their inputs cannot be honoured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A scan needs at least one element to initialise its running value
    #[error("sequence is empty, nothing to initialise the scan from")]
    EmptySequence,
    /// The requested count reaches past the end of the sequence
    #[error("count {count} exceeds sequence length {len}")]
    CountOutOfBounds {
        /// Requested number of elements
        count: usize,
        /// Actual length of the sequence
        len: usize,
    },
    /// An integer result does not fit the requested output type
    #[error("result for n = {n} overflows the output type")]
    Overflow {
        /// Input that produced the overflowing result
        n: u64,
    },
    /// A row of a square grid is shorter than the grid is tall
    #[error("grid row {row} has {len} cells, expected at least {expected}")]
    RaggedGrid {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Required row length
        expected: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;
