//! CRC-32 (IEEE 802.3) used to compare sent and received messages.
//!
//! Reflected polynomial `0xEDB88320`, initial value and final XOR `0xFFFFFFFF`; this is the
//! checksum produced by zlib, PNG and Ethernet.

/// Reflected IEEE 802.3 polynomial.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

const INIT: u32 = 0xFFFF_FFFF;
const FINAL_XOR: u32 = 0xFFFF_FFFF;

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static TABLE: [u32; 256] = build_table();

/// Streaming CRC-32 state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    /// Starts a fresh checksum.
    pub fn new() -> Self {
        Crc32 { state: INIT }
    }

    /// Feeds more data.
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.state;
        for &b in data {
            let idx = (crc ^ b as u32) & 0xFF;
            crc = (crc >> 8) ^ TABLE[idx as usize];
        }
        self.state = crc;
    }

    /// The checksum of everything fed so far. Further updates continue from the same state.
    pub fn finalize(&self) -> u32 {
        self.state ^ FINAL_XOR
    }
}

/// One-shot CRC-32 of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
