//! Error types shared by the codec and the channel driver.

use thiserror::Error;

/// Errors raised by the Hamming codec and the channel driver.
///
/// Uncorrectable codewords and text that is not valid UTF-8 are reported through
/// [`Decoded`](crate::ecc::Decoded), not through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside its accepted range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The number of data bits per codeword must be positive.
    #[error("Invalid mode {0}: data bits per codeword must be positive")]
    InvalidMode(usize),

    /// A bit string contained something other than '0' or '1'.
    #[error("Invalid bit string: found {found:?} at position {position}")]
    InvalidBitString {
        /// Character index of the offending symbol
        position: usize,
        /// The offending symbol
        found: char,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
