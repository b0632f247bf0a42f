//! Bit conversion between bytes, bit sequences and '0'/'1' strings.
//!
//! Bytes expand most-significant bit first, so `b'A'` (`0x41`) becomes `01000001`.

use crate::ecc::{Bits, Result};
use crate::error::Error;
use bitvec::prelude::*;

/// Expands every byte into exactly 8 bits, most-significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Bits {
    bytes.view_bits::<Msb0>().to_bitvec()
}

/// Collapses bits into bytes, 8 at a time.
///
/// Trailing bits that do not form a whole byte are discarded.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|byte| byte.iter().by_vals().fold(0u8, |acc, bit| (acc << 1) | bit as u8))
        .collect()
}

/// Parses a string of '0'/'1' characters into a bit sequence.
pub fn parse_bit_string(s: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(s.len());
    for (position, c) in s.chars().enumerate() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            found => return Err(Error::InvalidBitString { position, found }),
        }
    }
    Ok(bits)
}

/// Renders a bit sequence as a string of '0'/'1' characters.
pub fn render_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
