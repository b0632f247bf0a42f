//! Hamming error correction over flat '0'/'1' bit strings.
//!
//! The codec is split the way the data flows:
//! - [`bits`]: bytes to MSB-first bits and back, plus bit-string parsing
//! - [`layout`]: parity count and parity/data slot positions for a mode
//! - [`syndrome`]: the shared parity routine used to write and to check codewords
//! - [`hamming`]: `encode`/`decode` built from the three above
//! - [`noise`]: bit-flip generators that simulate a noisy channel
//!
//! # Examples
//!
//! ```rust
//! use hamming_channel::ecc::{hamming_decode, hamming_encode, noise};
//!
//! let encoded = hamming_encode("branch and bound", 43).unwrap();
//! let noisy = noise::flip_one_bit_per_codeword(&encoded, 43).unwrap();
//! let decoded = hamming_decode(&noisy, 43).unwrap();
//!
//! assert_eq!(decoded.uncorrectable(), 0);
//! assert_eq!(decoded.trimmed_text(), "branch and bound");
//! ```

use bitvec::prelude::{BitVec, Msb0};

pub use crate::error::Result;

/// Owned bit sequence, most-significant bit first.
pub type Bits = BitVec<u8, Msb0>;

pub mod bits;
pub mod hamming;
pub mod layout;
pub mod noise;
pub mod syndrome;

pub use hamming::{
    create_hamming, hamming_decode, hamming_encode, Decoded, EncodedMessage, HammingCode,
};
pub use layout::{parity_count, Layout};
pub use syndrome::{BatchSummary, Correction, Pass};
