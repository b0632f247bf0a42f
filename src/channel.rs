//! Simulated transmission over a noisy channel.
//!
//! A [`Channel`] encodes a message, passes the bits through a [`NoiseModel`], decodes them
//! again and reports how well the message survived: CRC-32 of both sides, the number of
//! flipped bits, the decoder's error counts and a word-level similarity score.
//!
//! # Examples
//!
//! ```
//! use hamming_channel::channel::{ChannelBuilder, NoiseModel};
//!
//! let mut channel = ChannelBuilder::new()
//!     .mode(43)
//!     .noise(NoiseModel::OneBitPerCodeword)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = channel.transmit("branch and bound").unwrap();
//! assert!(report.checksum_ok());
//! assert_eq!(report.recovered, "branch and bound");
//! ```

pub mod checksum;
pub mod similarity;

pub use checksum::{crc32, Crc32};
pub use similarity::{jaro, jaro_winkler, word_similarity};

use crate::ecc::noise::{
    flip_bits_with_probability, flip_one_bit_per_codeword_with_rng,
    flip_up_to_four_bits_per_codeword_with_rng, hamming_distance,
};
use crate::ecc::{Decoded, EncodedMessage, HammingCode};
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Data bits per codeword used when none is configured.
pub const DEFAULT_MODE: usize = 8;

/// How bits get corrupted in transit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseModel {
    /// Bits arrive untouched
    Noiseless,
    /// Exactly one random bit flipped in every codeword
    OneBitPerCodeword,
    /// Four random draws flipped in every codeword, with replacement
    UpToFourBitsPerCodeword,
    /// Every bit flipped independently with the given probability
    BinarySymmetric(f64),
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseModel::Noiseless => write!(f, "noiseless"),
            NoiseModel::OneBitPerCodeword => write!(f, "one bit per codeword"),
            NoiseModel::UpToFourBitsPerCodeword => write!(f, "up to four bits per codeword"),
            NoiseModel::BinarySymmetric(p) => write!(f, "binary symmetric (p = {})", p),
        }
    }
}

/// Builder for a [`Channel`].
#[derive(Debug, Clone)]
pub struct ChannelBuilder {
    mode: usize,
    noise: NoiseModel,
    seed: Option<u64>,
}

impl Default for ChannelBuilder {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            noise: NoiseModel::Noiseless,
            seed: None,
        }
    }
}

impl ChannelBuilder {
    /// Creates a builder for a noiseless channel with [`DEFAULT_MODE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of data bits per codeword.
    pub fn mode(mut self, mode: usize) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the noise model.
    pub fn noise(mut self, noise: NoiseModel) -> Self {
        self.noise = noise;
        self
    }

    /// Seeds the noise RNG so that transmissions are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for a zero mode and [`Error::InvalidInput`] for a
    /// binary symmetric probability outside `[0, 1]`.
    pub fn build(self) -> Result<Channel> {
        let code = HammingCode::new(self.mode)?;

        if let NoiseModel::BinarySymmetric(p) = self.noise {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidInput(format!(
                    "Flip probability must be within [0, 1], got {}",
                    p
                )));
            }
        }

        let rng = match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        Ok(Channel {
            code,
            noise: self.noise,
            rng,
        })
    }
}

/// Encoder, noise source and decoder wired together.
#[derive(Debug, Clone)]
pub struct Channel {
    code: HammingCode,
    noise: NoiseModel,
    rng: ChaCha20Rng,
}

/// What happened to one message on its way through a [`Channel`].
#[derive(Debug, Clone)]
pub struct Transmission {
    /// The encoded message as sent
    pub encoded: EncodedMessage,
    /// The bit string after noise
    pub received: String,
    /// Bits that differ between `encoded.bits` and `received`
    pub flipped_bits: usize,
    /// Decoder output, padding removed
    pub decoded: Decoded,
    /// Decoded text, with U+FFFD where the bytes are not valid UTF-8
    pub recovered: String,
    /// CRC-32 of the original message
    pub sent_checksum: u32,
    /// CRC-32 of the decoded bytes
    pub received_checksum: u32,
    /// Mean word-level Jaro–Winkler similarity of original and recovered text
    pub similarity: f64,
}

impl Transmission {
    /// True when both checksums agree.
    pub fn checksum_ok(&self) -> bool {
        self.sent_checksum == self.received_checksum
    }

    /// Codewords the decoder could not repair.
    pub fn uncorrectable(&self) -> usize {
        self.decoded.uncorrectable()
    }
}

impl Channel {
    /// The code used on this channel.
    pub fn code(&self) -> &HammingCode {
        &self.code
    }

    /// The noise model applied to every transmission.
    pub fn noise(&self) -> NoiseModel {
        self.noise
    }

    /// Applies the noise model to an encoded bit string.
    pub fn corrupt(&mut self, bits: &str) -> Result<String> {
        let mode = self.code.mode();
        match self.noise {
            NoiseModel::Noiseless => Ok(bits.to_string()),
            NoiseModel::OneBitPerCodeword => {
                flip_one_bit_per_codeword_with_rng(bits, mode, &mut self.rng)
            }
            NoiseModel::UpToFourBitsPerCodeword => {
                flip_up_to_four_bits_per_codeword_with_rng(bits, mode, &mut self.rng)
            }
            NoiseModel::BinarySymmetric(p) => flip_bits_with_probability(bits, p, &mut self.rng),
        }
    }

    /// Sends `message` through the channel and reports the outcome.
    pub fn transmit(&mut self, message: &str) -> Result<Transmission> {
        let encoded = self.code.encode_message(message);
        let received = self.corrupt(&encoded.bits)?;
        let flipped_bits = hamming_distance(&encoded.bits, &received);

        let decoded = self.code.decode_message(&EncodedMessage {
            bits: received.clone(),
            payload_bits: encoded.payload_bits,
        })?;
        let recovered = decoded.text_lossy();

        let sent_checksum = crc32(message.as_bytes());
        let received_checksum = crc32(decoded.bytes());
        let similarity = word_similarity(message, &recovered);

        log::debug!(
            "transmitted {} bytes ({}): {} bits flipped, {} corrected, {} uncorrectable, checksum {}",
            message.len(),
            self.noise,
            flipped_bits,
            decoded.corrected(),
            decoded.uncorrectable(),
            if sent_checksum == received_checksum { "ok" } else { "mismatch" }
        );

        Ok(Transmission {
            encoded,
            received,
            flipped_bits,
            decoded,
            recovered,
            sent_checksum,
            received_checksum,
            similarity,
        })
    }
}
