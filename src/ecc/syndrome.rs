//! Syndrome engine shared by encoding and decoding.
//!
//! One routine walks the parity coverage of a codeword. In [`Pass::Write`] the computed
//! parities are stored into the parity slots; in [`Pass::Evaluate`] they are summed into a
//! syndrome that names the 1-indexed position of a single flipped bit.
//!
//! Every call returns a fresh codeword; the input is never mutated.

use crate::ecc::layout::Layout;
use crate::ecc::Bits;
use bitvec::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which way the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Fill parity slots (encoding)
    Write,
    /// Check parities and repair a single flipped bit (decoding)
    Evaluate,
}

/// What the evaluation pass did to one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// All parities matched (always the outcome of a write pass)
    Clean,
    /// The bit at this 1-indexed position was flipped back
    Corrected(usize),
    /// The syndrome pointed past the end of the codeword
    Uncorrectable(usize),
}

/// Totals over a batch of codewords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Codewords repaired by a single flip
    pub corrected: usize,
    /// Codewords whose syndrome was out of range
    pub uncorrectable: usize,
}

impl BatchSummary {
    fn record(&mut self, correction: Correction) {
        match correction {
            Correction::Clean => {}
            Correction::Corrected(_) => self.corrected += 1,
            Correction::Uncorrectable(_) => self.uncorrectable += 1,
        }
    }
}

/// XOR of the bits read by parity `j`.
fn parity(layout: &Layout, codeword: &BitSlice<u8, Msb0>, j: usize) -> bool {
    layout
        .coverage(j)
        .iter()
        .fold(false, |acc, &index| acc ^ codeword[index])
}

/// Runs one pass over a single codeword of `layout.codeword_len()` bits.
pub fn run(layout: &Layout, codeword: &BitSlice<u8, Msb0>, pass: Pass) -> (Bits, Correction) {
    let mut out: Bits = codeword.iter().by_vals().collect();
    let mut syndrome = 0usize;

    for j in 0..layout.parity_bits() {
        let sind = parity(layout, &out, j);
        match pass {
            Pass::Write => out.set((1 << j) - 1, sind),
            Pass::Evaluate => syndrome += (sind as usize) << j,
        }
    }

    if syndrome == 0 {
        return (out, Correction::Clean);
    }

    if syndrome > out.len() {
        log::trace!("syndrome {} outside codeword of {} bits", syndrome, out.len());
        return (out, Correction::Uncorrectable(syndrome));
    }

    let index = syndrome - 1;
    let flipped = !out[index];
    out.set(index, flipped);
    log::trace!("corrected bit {} of codeword", syndrome);
    (out, Correction::Corrected(syndrome))
}

/// Runs one pass over every codeword, keeping input order.
///
/// With the `parallel` feature the codewords are processed on the rayon pool.
pub fn run_batch(layout: &Layout, codewords: &[Bits], pass: Pass) -> (Vec<Bits>, BatchSummary) {
    #[cfg(feature = "parallel")]
    let results: Vec<(Bits, Correction)> = codewords
        .par_iter()
        .map(|codeword| run(layout, codeword, pass))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(Bits, Correction)> = codewords
        .iter()
        .map(|codeword| run(layout, codeword, pass))
        .collect();

    let mut summary = BatchSummary::default();
    let mut out = Vec::with_capacity(results.len());
    for (codeword, correction) in results {
        summary.record(correction);
        out.push(codeword);
    }
    (out, summary)
}
