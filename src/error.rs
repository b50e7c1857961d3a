use thiserror::Error;

/// Errors returned by checksum computation and verification.
#[derive(Debug, Error)]
pub enum CrcError {
    /// The requested length runs past the end of the message.
    #[error("Length {length} exceeds message size of {available} bytes")]
    LengthOutOfBounds { length: u8, available: usize },

    /// A buffer is too short to carry a 2-byte checksum trailer.
    #[error("Frame of {len} bytes is too short for a checksum trailer")]
    FrameTooShort { len: usize },

    /// Stored and computed checksums disagree.
    #[error("CRC mismatch: expected 0x{expected:04X}, computed 0x{computed:04X}")]
    Mismatch { expected: u16, computed: u16 },

    /// A length that doesn't fit the 0..=255 range of a message length.
    #[error("Length {length} exceeds the maximum of 255 bytes")]
    LengthTooLarge { length: usize },

    /// Malformed hex input.
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Failure reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CrcError>;
