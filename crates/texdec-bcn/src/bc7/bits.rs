//! Bit cursor over a single 128-bit BC7 block.

/// Number of bits in a BC7 block.
pub(crate) const BLOCK_BITS: u32 = 128;

/// LSB-first reader over one block. Owned by a single block decode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BitCursor {
    bytes: [u8; 16],
    pos: u32,
}

impl BitCursor {
    pub fn new(bytes: [u8; 16]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bit offset of the next read.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Read `count` bits (at most 32), or `None` if they would run past the block.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Option<u32> {
        debug_assert!(count <= 32);
        let count = u32::from(count);
        if self.pos + count > BLOCK_BITS {
            return None;
        }
        if count == 0 {
            return Some(0);
        }

        let value = u128::from_le_bytes(self.bytes) >> self.pos;
        self.pos += count;
        Some((value & ((1u128 << count) - 1)) as u32)
    }
}
