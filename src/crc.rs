//! CRC-16 with polynomial 0x1021, seed 0xFFFF, no reflection and no final
//! XOR (CRC-16/IBM-3740). The per-byte update folds the eight polynomial
//! steps into a handful of shifts and XORs instead of using a table.

use std::io;

use log::trace;

use crate::error::{CrcError, Result};

/// Initial accumulator value.
pub const SEED: u16 = 0xFFFF;

/// Checksum of ASCII `"123456789"`.
pub const CHECK: u16 = 0x29B1;

/// Checksum of any message followed by its own big-endian checksum.
pub const RESIDUE: u16 = 0x0000;

#[inline]
const fn update_byte(crc: u16, byte: u8) -> u16 {
    let temp = (crc >> 8) ^ byte as u16;
    let mut crc = crc << 8;
    let mut quick = temp ^ (temp >> 4);
    crc ^= quick;
    quick <<= 5;
    crc ^= quick;
    quick <<= 7;
    crc ^ quick
}

/// Fold `data` into an existing accumulator.
///
/// `update(SEED, data)` is the checksum of `data`; passing a previous result
/// back in continues the computation over concatenated input.
pub const fn update(mut crc: u16, data: &[u8]) -> u16 {
    // Iterators aren't usable in const fn.
    let mut i = 0;
    while i < data.len() {
        crc = update_byte(crc, data[i]);
        i += 1;
    }
    crc
}

/// Checksum of the whole slice.
pub const fn crc16(data: &[u8]) -> u16 {
    update(SEED, data)
}

/// Checksum of the first `length` bytes of `message`.
///
/// Fails if `length` is larger than the message; bytes after `length` are
/// never read.
pub fn compute_crc(message: &[u8], length: u8) -> Result<u16> {
    let Some(bytes) = message.get(..length as usize) else {
        return Err(CrcError::LengthOutOfBounds {
            length,
            available: message.len(),
        });
    };

    let crc = crc16(bytes);
    trace!("crc16 over {} bytes = 0x{:04X}", length, crc);
    Ok(crc)
}

/// Streaming form of [`crc16`] for input that arrives in pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    state: u16,
    seed: u16,
}

impl Crc16 {
    pub const fn new() -> Self {
        Self::with_seed(SEED)
    }

    /// Start from an earlier accumulator value, e.g. to resume a checksum.
    pub const fn with_seed(seed: u16) -> Self {
        Self { state: seed, seed }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.state = update(self.state, data);
    }

    /// Checksum of everything fed so far. Does not consume or alter the state.
    pub const fn finalize(&self) -> u16 {
        self.state
    }

    /// Go back to the seed this hasher was created with.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc16 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod proptests;
