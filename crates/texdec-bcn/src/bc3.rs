//! DXT5 (BC3) block decoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::bc1;
use crate::DecodedBlock;

/// Size of a DXT5 block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Decode a DXT5 block: interpolated alpha followed by a DXT1 color block
/// that always uses the opaque palette.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> DecodedBlock {
    let (alpha, rest) = block.split_at(8);
    let mut color = [0u8; bc1::BLOCK_SIZE];
    color.copy_from_slice(rest);

    let palette = alpha_palette(alpha[0], alpha[1]);
    let indices = LittleEndian::read_u48(&alpha[2..8]);

    let mut out = bc1::decode_color(&color, true);
    for (i, px) in out.iter_mut().enumerate() {
        px[3] = palette[((indices >> (3 * i)) & 0x7) as usize];
    }
    out
}

/// Build the eight-entry alpha palette for a pair of endpoints.
///
/// `a0 > a1` selects seven interpolation steps; otherwise five steps with
/// index 6 fixed at 0 and index 7 at 255.
pub fn alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let (w0, w1) = (u32::from(a0), u32::from(a1));
    let mut palette = [a0, a1, 0, 0, 0, 0, 0, 255];

    if a0 > a1 {
        for i in 2..8u32 {
            palette[i as usize] = (((8 - i) * w0 + (i - 1) * w1) / 7) as u8;
        }
    } else {
        for i in 2..6u32 {
            palette[i as usize] = (((6 - i) * w0 + (i - 1) * w1) / 5) as u8;
        }
    }
    palette
}
