//! Hamming error correction codec over '0'/'1' bit strings.
//!
//! A message is turned into UTF-8 bytes, expanded into bits (most-significant bit first),
//! zero-padded to a whole number of `mode`-bit blocks and each block is turned into a
//! codeword of `mode + s` bits, where `s` is the smallest count with `2^s >= s + mode + 1`.
//! The encoded form is the plain concatenation of all codewords.
//!
//! Decoding segments the string back into codewords, repairs at most one flipped bit per
//! codeword, strips the parity bits and regroups the data into bytes. Codewords whose
//! syndrome points outside the codeword are counted, never fatal.
//!
//! Zero padding is not self-describing. [`HammingCode::decode`] returns it as trailing NUL
//! characters; [`HammingCode::encode_message`] records the payload length so that
//! [`HammingCode::decode_message`] can drop it exactly.
//!
//! # Examples
//!
//! ```
//! use hamming_channel::ecc::HammingCode;
//!
//! let code = HammingCode::new(8).unwrap();
//! let encoded = code.encode("AB");
//! assert_eq!(encoded.len(), 24);
//!
//! let decoded = code.decode(&encoded).unwrap();
//! assert_eq!(decoded.text(), Some("AB"));
//! assert_eq!(decoded.uncorrectable(), 0);
//! ```

use crate::ecc::bits::{bits_to_bytes, bytes_to_bits, parse_bit_string, render_bit_string};
use crate::ecc::layout::Layout;
use crate::ecc::syndrome::{self, BatchSummary, Pass};
use crate::ecc::{Bits, Result};
use bitvec::prelude::*;
use std::string::FromUtf8Error;

/// A Hamming code carrying `mode` data bits per codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCode {
    layout: Layout,
}

/// A bit string together with the number of message bits it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    /// Concatenated codewords as '0'/'1' characters
    pub bits: String,
    /// Message bits before zero padding
    pub payload_bits: usize,
}

/// Result of decoding a bit string.
///
/// [`text`](Decoded::text) is `None` when the recovered bytes are not valid UTF-8; the bytes are
/// always kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    payload: std::result::Result<String, FromUtf8Error>,
    corrected: usize,
    uncorrectable: usize,
}

impl Decoded {
    fn new(bytes: Vec<u8>, summary: BatchSummary) -> Self {
        Decoded {
            payload: String::from_utf8(bytes),
            corrected: summary.corrected,
            uncorrectable: summary.uncorrectable,
        }
    }

    /// The recovered bytes, whatever they contain.
    pub fn bytes(&self) -> &[u8] {
        match &self.payload {
            Ok(text) => text.as_bytes(),
            Err(e) => e.as_bytes(),
        }
    }

    /// The recovered text, if the bytes are valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        self.payload.as_deref().ok()
    }

    /// True when the bytes decoded as UTF-8.
    pub fn is_text(&self) -> bool {
        self.payload.is_ok()
    }

    /// The recovered text, or an empty string when the bytes are not valid UTF-8.
    pub fn text_or_empty(&self) -> &str {
        self.text().unwrap_or("")
    }

    /// Best-effort text with invalid sequences replaced by U+FFFD.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(self.bytes()).into_owned()
    }

    /// Lossy text without the trailing NUL characters left by zero padding.
    pub fn trimmed_text(&self) -> String {
        self.text_lossy().trim_end_matches('\0').to_string()
    }

    /// Codewords repaired by flipping one bit.
    pub fn corrected(&self) -> usize {
        self.corrected
    }

    /// Codewords whose syndrome pointed outside the codeword.
    pub fn uncorrectable(&self) -> usize {
        self.uncorrectable
    }
}

impl HammingCode {
    /// Creates a code with `mode` data bits per codeword.
    ///
    /// # Arguments
    ///
    /// * `mode` - Number of data bits carried by each codeword
    ///
    /// # Returns
    ///
    /// A `HammingCode` with its parity count and coverage table precomputed
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`](crate::Error::InvalidMode) when `mode` is zero.
    pub fn new(mode: usize) -> Result<Self> {
        Ok(HammingCode {
            layout: Layout::new(mode)?,
        })
    }

    /// Data bits per codeword.
    pub fn mode(&self) -> usize {
        self.layout.mode()
    }

    /// Parity bits per codeword.
    pub fn parity_bits(&self) -> usize {
        self.layout.parity_bits()
    }

    /// Bits per codeword, data and parity.
    pub fn codeword_len(&self) -> usize {
        self.layout.codeword_len()
    }

    /// The precomputed codeword layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of codewords needed for a message of `message_bytes` bytes.
    pub fn codeword_count(&self, message_bytes: usize) -> usize {
        (message_bytes * 8).div_ceil(self.mode())
    }

    /// Length of the encoded bit string for a message of `message_bytes` bytes.
    pub fn encoded_len(&self, message_bytes: usize) -> usize {
        self.codeword_count(message_bytes) * self.codeword_len()
    }

    /// Encodes raw data bits, zero-padding the last block.
    pub fn encode_bits(&self, data: &BitSlice<u8, Msb0>) -> Bits {
        let mode = self.mode();
        let mut padded: Bits = data.iter().by_vals().collect();
        let blocks = data.len().div_ceil(mode);
        padded.resize(blocks * mode, false);

        let skeletons: Vec<Bits> = padded
            .chunks_exact(mode)
            .map(|block| self.layout.build_skeleton(block))
            .collect();
        let (codewords, _) = syndrome::run_batch(&self.layout, &skeletons, Pass::Write);

        log::debug!(
            "encoded {} data bits into {} codewords (mode {}, {} parity bits)",
            data.len(),
            codewords.len(),
            mode,
            self.parity_bits()
        );

        let mut out = Bits::with_capacity(blocks * self.codeword_len());
        for codeword in &codewords {
            out.extend_from_bitslice(codeword.as_bitslice());
        }
        out
    }

    /// Encodes a message into a string of '0'/'1' characters.
    ///
    /// # Arguments
    ///
    /// * `message` - Text to encode; its UTF-8 bytes are what gets protected
    ///
    /// # Returns
    ///
    /// The concatenated codewords, `encoded_len(message.len())` characters long
    pub fn encode(&self, message: &str) -> String {
        render_bit_string(&self.encode_bits(&bytes_to_bits(message.as_bytes())))
    }

    /// Encodes a message and records its payload length.
    pub fn encode_message(&self, message: &str) -> EncodedMessage {
        EncodedMessage {
            bits: self.encode(message),
            payload_bits: message.len() * 8,
        }
    }

    /// Splits a bit sequence into whole codewords, dropping any remainder.
    fn segment(&self, bits: &BitSlice<u8, Msb0>) -> Vec<Bits> {
        let len = self.codeword_len();
        let remainder = bits.len() % len;
        if remainder != 0 {
            log::warn!(
                "dropping {} trailing bits that do not fill a {}-bit codeword",
                remainder,
                len
            );
        }
        bits.chunks_exact(len)
            .map(|codeword| codeword.iter().by_vals().collect())
            .collect()
    }

    /// Repairs and strips every codeword, returning the concatenated data bits.
    pub fn decode_bits(&self, bits: &BitSlice<u8, Msb0>) -> (Bits, BatchSummary) {
        let codewords = self.segment(bits);
        let (repaired, summary) = syndrome::run_batch(&self.layout, &codewords, Pass::Evaluate);

        let mut data = Bits::with_capacity(repaired.len() * self.mode());
        for codeword in &repaired {
            data.extend_from_bitslice(self.layout.strip_parity(codeword).as_bitslice());
        }

        log::debug!(
            "decoded {} codewords (mode {}): {} corrected, {} uncorrectable",
            repaired.len(),
            self.mode(),
            summary.corrected,
            summary.uncorrectable
        );
        (data, summary)
    }

    /// Decodes a '0'/'1' string.
    ///
    /// Trailing bits that do not fill a codeword, and data bits that do not fill a byte, are
    /// dropped. Padding added by [`encode`](Self::encode) comes back as NUL characters.
    ///
    /// # Arguments
    ///
    /// * `bits` - Concatenated codewords, possibly corrupted
    ///
    /// # Returns
    ///
    /// The recovered bytes and text together with the corrected and uncorrectable counts
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitString`](crate::Error::InvalidBitString) if `bits`
    /// contains anything other than '0' and '1'.
    pub fn decode(&self, bits: &str) -> Result<Decoded> {
        let bits = parse_bit_string(bits)?;
        let (data, summary) = self.decode_bits(&bits);
        Ok(Decoded::new(bits_to_bytes(&data), summary))
    }

    /// Decodes a message produced by [`encode_message`](Self::encode_message), dropping
    /// the zero padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitString`](crate::Error::InvalidBitString) if the bits
    /// contain anything other than '0' and '1'.
    pub fn decode_message(&self, message: &EncodedMessage) -> Result<Decoded> {
        let bits = parse_bit_string(&message.bits)?;
        let (mut data, summary) = self.decode_bits(&bits);
        data.truncate(message.payload_bits);
        Ok(Decoded::new(bits_to_bytes(&data), summary))
    }
}

/// Creates a Hamming code with `mode` data bits per codeword.
pub fn create_hamming(mode: usize) -> Result<HammingCode> {
    HammingCode::new(mode)
}

/// Encodes `message` with `mode` data bits per codeword.
pub fn hamming_encode(message: &str, mode: usize) -> Result<String> {
    Ok(create_hamming(mode)?.encode(message))
}

/// Decodes a bit string produced with `mode` data bits per codeword.
pub fn hamming_decode(bits: &str, mode: usize) -> Result<Decoded> {
    create_hamming(mode)?.decode(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TEXT: &str = "Метод ветвей и границ (англ. branch and bound) — общий алгоритмический метод";

    #[test]
    fn test_hamming_creation() {
        let code = HammingCode::new(8).unwrap();
        assert_eq!(code.mode(), 8);
        assert_eq!(code.parity_bits(), 4);
        assert_eq!(code.codeword_len(), 12);
        assert_eq!(code.layout().mode(), 8);
        assert_eq!(code.layout().coverage(3), &[7, 8, 9, 10, 11]);

        let code = HammingCode::new(43).unwrap();
        assert_eq!(code.parity_bits(), 6);
        assert_eq!(code.codeword_len(), 49);

        assert_eq!(HammingCode::new(0).unwrap_err(), Error::InvalidMode(0));
    }

    #[test]
    fn test_encode_ab_mode_8() {
        let code = HammingCode::new(8).unwrap();
        let encoded = code.encode("AB");
        assert_eq!(encoded.len(), 24);
        assert_eq!(encoded.len(), code.encoded_len(2));
        assert!(encoded.chars().all(|c| c == '0' || c == '1'));

        let decoded = code.decode(&encoded).unwrap();
        assert_eq!(decoded.text(), Some("AB"));
        assert_eq!(decoded.bytes(), b"AB");
        assert_eq!(decoded.uncorrectable(), 0);
        assert_eq!(decoded.corrected(), 0);
    }

    #[test]
    fn test_encode_known_codeword() {
        // 'A' = 01000001 -> parities over positions 1..=12
        let code = HammingCode::new(8).unwrap();
        assert_eq!(code.encode("A"), "100010010001");
    }

    #[test]
    fn test_round_trip_pads_with_nul() {
        for mode in [1, 3, 4, 7, 8, 11, 16, 26, 43, 57, 64] {
            let code = HammingCode::new(mode).unwrap();
            let encoded = code.encode(TEXT);
            assert_eq!(encoded.len(), code.encoded_len(TEXT.len()));

            let decoded = code.decode(&encoded).unwrap();
            assert_eq!(decoded.uncorrectable(), 0, "mode {}", mode);
            let text = decoded.text().unwrap();
            assert!(text.starts_with(TEXT));
            assert!(text[TEXT.len()..].chars().all(|c| c == '\0'));
            assert_eq!(decoded.trimmed_text(), TEXT);
        }
    }

    #[test]
    fn test_framed_round_trip_is_exact() {
        for mode in 1..=64 {
            let code = HammingCode::new(mode).unwrap();
            let encoded = code.encode_message(TEXT);
            assert_eq!(encoded.payload_bits, TEXT.len() * 8);

            let decoded = code.decode_message(&encoded).unwrap();
            assert_eq!(decoded.text(), Some(TEXT), "mode {}", mode);
        }
    }

    #[test]
    fn test_single_flip_per_codeword_is_corrected() {
        let code = HammingCode::new(43).unwrap();
        let encoded = code.encode_message(TEXT);
        let len = code.codeword_len();

        let noisy: String = encoded
            .bits
            .chars()
            .enumerate()
            .map(|(i, c)| {
                // flip a different position in every codeword
                let codeword = i / len;
                if i % len == codeword % len {
                    if c == '0' {
                        '1'
                    } else {
                        '0'
                    }
                } else {
                    c
                }
            })
            .collect();

        let decoded = code
            .decode_message(&EncodedMessage {
                bits: noisy,
                payload_bits: encoded.payload_bits,
            })
            .unwrap();
        assert_eq!(decoded.text(), Some(TEXT));
        assert_eq!(decoded.uncorrectable(), 0);
        assert_eq!(decoded.corrected(), code.codeword_count(TEXT.len()));
    }

    #[test]
    fn test_uncorrectable_is_counted() {
        let code = HammingCode::new(8).unwrap();
        let mut bits: Vec<char> = code.encode("AB").chars().collect();
        // second codeword: positions 5 and 11 give syndrome 14 > 12
        for index in [12 + 4, 12 + 10] {
            bits[index] = if bits[index] == '0' { '1' } else { '0' };
        }
        let noisy: String = bits.into_iter().collect();

        let decoded = code.decode(&noisy).unwrap();
        assert_eq!(decoded.uncorrectable(), 1);
        assert_eq!(decoded.bytes()[0], b'A');
    }

    #[test]
    fn test_trailing_remainder_is_ignored() {
        let code = HammingCode::new(8).unwrap();
        let mut encoded = code.encode("AB");
        encoded.push_str("10110");
        let decoded = code.decode(&encoded).unwrap();
        assert_eq!(decoded.text(), Some("AB"));
    }

    #[test]
    fn test_invalid_utf8_is_soft_failure() {
        let code = HammingCode::new(8).unwrap();
        // a lone continuation byte 0x80
        let encoded = render_bit_string(&code.encode_bits(&bytes_to_bits(&[0x80])));
        let decoded = code.decode(&encoded).unwrap();
        assert!(!decoded.is_text());
        assert_eq!(decoded.text(), None);
        assert_eq!(decoded.text_or_empty(), "");
        assert_eq!(decoded.bytes(), &[0x80]);
        assert_eq!(decoded.text_lossy(), "\u{FFFD}");
        assert_eq!(decoded.uncorrectable(), 0);
    }

    #[test]
    fn test_bytes_and_text_agree() {
        let code = HammingCode::new(43).unwrap();
        let decoded = code.decode_message(&code.encode_message(TEXT)).unwrap();
        assert_eq!(decoded.bytes(), TEXT.as_bytes());
        assert_eq!(decoded.text().map(str::as_bytes), Some(decoded.bytes()));
        assert_eq!(decoded.text_or_empty(), TEXT);

        let mut raw = bytes_to_bits(TEXT.as_bytes());
        raw.truncate(8);
        let decoded = code.decode(&render_bit_string(&code.encode_bits(&raw))).unwrap();
        assert_eq!(decoded.text(), None);
        assert_eq!(decoded.bytes()[0], TEXT.as_bytes()[0]);
    }

    #[test]
    fn test_invalid_symbol_is_rejected() {
        let code = HammingCode::new(8).unwrap();
        assert!(matches!(
            code.decode("0101 0101"),
            Err(Error::InvalidBitString { position: 4, found: ' ' })
        ));
    }

    #[test]
    fn test_empty_input() {
        let code = HammingCode::new(8).unwrap();
        assert!(code.encode("").is_empty());

        let decoded = code.decode("").unwrap();
        assert_eq!(decoded.text(), Some(""));
        assert_eq!(decoded.uncorrectable(), 0);
    }

    #[test]
    fn test_helper_functions() {
        let encoded = hamming_encode("Test", 8).unwrap();
        let decoded = hamming_decode(&encoded, 8).unwrap();
        assert_eq!(decoded.text(), Some("Test"));

        assert!(hamming_encode("Test", 0).is_err());
        assert!(hamming_decode(&encoded, 0).is_err());
    }
}
