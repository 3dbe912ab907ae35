//! DXT3 (BC2) block decoding.

use crate::bc1;
use crate::DecodedBlock;

/// Size of a DXT3 block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Decode a DXT3 block: 16 explicit 4-bit alphas followed by a DXT1 color
/// block that always uses the opaque palette.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> DecodedBlock {
    let (alpha, rest) = block.split_at(8);
    let mut color = [0u8; bc1::BLOCK_SIZE];
    color.copy_from_slice(rest);

    let mut out = bc1::decode_color(&color, true);
    for (i, px) in out.iter_mut().enumerate() {
        let nibble = (alpha[i >> 1] >> ((i & 1) * 4)) & 0x0F;
        px[3] = nibble | (nibble << 4);
    }
    out
}
