pub mod channel;
pub mod ecc;
pub mod error;

pub use channel::{Channel, ChannelBuilder, NoiseModel, Transmission};
pub use ecc::{hamming_decode, hamming_encode, Decoded, EncodedMessage, HammingCode};
pub use error::{Error, Result};
