//! CRC-16 (polynomial 0x1021, seed 0xFFFF) checksum library.
//! Provides the table-free checksum engine, a streaming hasher and
//! helpers for appending or checking a 2-byte checksum trailer.

pub mod crc;
pub mod error;
pub mod trailer;

pub use crc::{CHECK, Crc16, RESIDUE, SEED, compute_crc, crc16, update};
pub use error::{CrcError, Result};
pub use trailer::{ByteOrder, append_checksum, verify, verify_trailer};
