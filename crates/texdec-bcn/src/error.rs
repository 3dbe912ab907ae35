//! Error types for block decoding.

use thiserror::Error;

/// Errors that can occur while decoding a compressed block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// BC7 block with none of its eight mode bits set.
    #[error("reserved BC7 mode 8 (no mode bit set)")]
    ReservedMode,

    /// A BC7 field would extend past the 128-bit block.
    #[error("BC7 mode {mode}: reading {bits} bits at offset {offset} exceeds the 128-bit block")]
    BitBudget { mode: u8, offset: u32, bits: u8 },
}

/// Result type for block decoding.
pub type Result<T> = std::result::Result<T, Error>;
