//! Codeword layout: how many parity bits a mode needs and where they sit.
//!
//! Positions are 1-indexed in the classic Hamming description. Parity bit `j` lives at
//! position `2^j` and covers every position whose binary representation has bit `j` set.
//! Data bits fill the remaining positions in order.

use crate::ecc::{Bits, Result};
use crate::error::Error;
use bitvec::prelude::*;

/// Smallest `s` such that `2^s >= s + mode + 1`.
pub fn parity_count(mode: usize) -> usize {
    let mut s = 1;
    while (1usize << s) < s + mode + 1 {
        s += 1;
    }
    s
}

/// True when the 0-indexed `index` is one of the first `parity_bits` parity slots.
fn is_parity_slot(index: usize, parity_bits: usize) -> bool {
    let position = index + 1;
    position.is_power_of_two() && position.trailing_zeros() < parity_bits as u32
}

/// Spreads data bits over a codeword, leaving a 0 in every parity slot.
pub fn build_skeleton(data: &BitSlice<u8, Msb0>, parity_bits: usize) -> Bits {
    let len = data.len() + parity_bits;
    let mut data_iter = data.iter().by_vals();
    (0..len)
        .map(|index| {
            if is_parity_slot(index, parity_bits) {
                false
            } else {
                data_iter.next().unwrap_or(false)
            }
        })
        .collect()
}

/// Removes the parity slots from a codeword, returning the data bits in order.
pub fn strip_parity(codeword: &BitSlice<u8, Msb0>, parity_bits: usize) -> Bits {
    codeword
        .iter()
        .by_vals()
        .enumerate()
        .filter(|(index, _)| !is_parity_slot(*index, parity_bits))
        .map(|(_, bit)| bit)
        .collect()
}

/// Layout of one codeword for a fixed mode, with the parity coverage precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Data bits per codeword
    mode: usize,
    /// Parity bits per codeword
    parity_bits: usize,
    /// 0-indexed positions read by each parity bit, including its own slot
    coverage: Vec<Vec<usize>>,
}

impl Layout {
    /// Computes the layout for `mode` data bits per codeword.
    pub fn new(mode: usize) -> Result<Self> {
        if mode == 0 {
            return Err(Error::InvalidMode(mode));
        }

        let parity_bits = parity_count(mode);
        let len = mode + parity_bits;
        let coverage = (0..parity_bits)
            .map(|j| {
                (1..=len)
                    .filter(|position| position & (1usize << j) != 0)
                    .map(|position| position - 1)
                    .collect()
            })
            .collect();

        Ok(Layout {
            mode,
            parity_bits,
            coverage,
        })
    }

    /// Data bits per codeword.
    pub fn mode(&self) -> usize {
        self.mode
    }

    /// Parity bits per codeword.
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Total codeword length, `mode + parity_bits`.
    pub fn codeword_len(&self) -> usize {
        self.mode + self.parity_bits
    }

    /// 0-indexed positions covered by parity bit `j`.
    pub fn coverage(&self, j: usize) -> &[usize] {
        &self.coverage[j]
    }

    /// Builds a codeword skeleton from exactly `mode` data bits.
    pub fn build_skeleton(&self, data: &BitSlice<u8, Msb0>) -> Bits {
        debug_assert_eq!(data.len(), self.mode);
        build_skeleton(data, self.parity_bits)
    }

    /// Extracts the `mode` data bits from a codeword.
    pub fn strip_parity(&self, codeword: &BitSlice<u8, Msb0>) -> Bits {
        debug_assert_eq!(codeword.len(), self.codeword_len());
        strip_parity(codeword, self.parity_bits)
    }
}
