//! Helpers for carrying the checksum as two bytes at the end of a buffer.

use log::debug;

use crate::crc::crc16;
use crate::error::{CrcError, Result};

/// Byte order of the 2-byte checksum trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// High byte first.
    #[default]
    Big,
    Little,
}

impl ByteOrder {
    fn encode(self, crc: u16) -> [u8; 2] {
        match self {
            ByteOrder::Big => crc.to_be_bytes(),
            ByteOrder::Little => crc.to_le_bytes(),
        }
    }

    fn decode(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        }
    }
}

/// Append the checksum of the current contents of `buf`.
pub fn append_checksum(buf: &mut Vec<u8>, order: ByteOrder) {
    let crc = crc16(buf);
    buf.extend_from_slice(&order.encode(crc));
}

/// Check `data` against a known checksum.
pub fn verify(data: &[u8], expected: u16) -> Result<()> {
    let computed = crc16(data);
    if computed != expected {
        return Err(CrcError::Mismatch { expected, computed });
    }
    Ok(())
}

/// Check that the last two bytes of `frame` are the checksum of the rest.
pub fn verify_trailer(frame: &[u8], order: ByteOrder) -> Result<()> {
    let Some((body, trailer)) = frame.split_last_chunk::<2>() else {
        return Err(CrcError::FrameTooShort { len: frame.len() });
    };

    let expected = order.decode(*trailer);
    debug!(
        "verifying {}-byte body against trailer 0x{:04X}",
        body.len(),
        expected
    );
    verify(body, expected)
}
