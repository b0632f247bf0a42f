//! Bit-flip noise for exercising the decoder.
//!
//! The per-codeword generators segment the input exactly like
//! [`HammingCode::decode`](crate::ecc::HammingCode::decode): whole codewords of
//! `mode + s` bits, any trailing remainder dropped from the output.

use crate::ecc::bits::{parse_bit_string, render_bit_string};
use crate::ecc::hamming::HammingCode;
use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Flips `draws` uniformly drawn positions (with replacement) in every codeword.
fn flip_per_codeword<R: Rng + ?Sized>(
    bits: &str,
    mode: usize,
    draws: usize,
    rng: &mut R,
) -> Result<String> {
    let code = HammingCode::new(mode)?;
    let len = code.codeword_len();
    let bits = parse_bit_string(bits)?;
    let whole = bits.len() / len * len;

    let mut out: BitVec<u8, Msb0> = bits[..whole].iter().by_vals().collect();
    for codeword in out.chunks_exact_mut(len) {
        for _ in 0..draws {
            let index = rng.gen_range(0..len);
            let flipped = !codeword[index];
            codeword.set(index, flipped);
        }
    }

    log::debug!(
        "flipped {} draw(s) in each of {} codewords of {} bits",
        draws,
        whole / len,
        len
    );
    Ok(render_bit_string(&out))
}

/// Flips exactly one random bit in every codeword, using the thread-local RNG.
pub fn flip_one_bit_per_codeword(bits: &str, mode: usize) -> Result<String> {
    flip_one_bit_per_codeword_with_rng(bits, mode, &mut rand::thread_rng())
}

/// Flips exactly one random bit in every codeword.
pub fn flip_one_bit_per_codeword_with_rng<R: Rng + ?Sized>(
    bits: &str,
    mode: usize,
    rng: &mut R,
) -> Result<String> {
    flip_per_codeword(bits, mode, 1, rng)
}

/// Flips four independently drawn positions in every codeword, using the thread-local RNG.
pub fn flip_up_to_four_bits_per_codeword(bits: &str, mode: usize) -> Result<String> {
    flip_up_to_four_bits_per_codeword_with_rng(bits, mode, &mut rand::thread_rng())
}

/// Flips four independently drawn positions in every codeword.
///
/// Draws are made with replacement, so two draws hitting the same position cancel out.
/// The net change per codeword is 4, 2 or 0 bits.
pub fn flip_up_to_four_bits_per_codeword_with_rng<R: Rng + ?Sized>(
    bits: &str,
    mode: usize,
    rng: &mut R,
) -> Result<String> {
    flip_per_codeword(bits, mode, 4, rng)
}

/// Binary symmetric channel: flips every bit independently with `probability`.
///
/// Unlike the per-codeword generators this keeps the whole input, remainder included.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `probability` is outside `[0, 1]`.
pub fn flip_bits_with_probability<R: Rng + ?Sized>(
    bits: &str,
    probability: f64,
    rng: &mut R,
) -> Result<String> {
    let channel = Bernoulli::new(probability).map_err(|_| {
        Error::InvalidInput(format!(
            "Flip probability must be within [0, 1], got {}",
            probability
        ))
    })?;
    let mut bits = parse_bit_string(bits)?;

    let mut flips = 0;
    for mut bit in bits.iter_mut() {
        if channel.sample(rng) {
            *bit = !*bit;
            flips += 1;
        }
    }

    log::debug!("binary symmetric channel flipped {} of {} bits", flips, bits.len());
    Ok(render_bit_string(&bits))
}

/// Number of positions at which two bit strings differ, over their common length.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}
