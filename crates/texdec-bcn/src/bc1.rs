//! DXT1 (BC1) block decoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::color::rgb565_to_888;
use crate::{DecodedBlock, Rgba8, BLOCK_PIXELS};

/// Size of a DXT1 block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Decode a DXT1 block.
///
/// When `c0 > c1` the block uses the four-color opaque palette; otherwise
/// index 2 is the midpoint and index 3 is transparent black.
pub fn decode_block(block: &[u8; BLOCK_SIZE]) -> DecodedBlock {
    decode_color(block, false)
}

/// Decode the color half shared by DXT1, DXT3 and DXT5.
///
/// With `force_opaque` the four-color palette is used regardless of the
/// endpoint order, as DXT3 and DXT5 require.
pub(crate) fn decode_color(block: &[u8; BLOCK_SIZE], force_opaque: bool) -> DecodedBlock {
    let c0 = LittleEndian::read_u16(&block[0..2]);
    let c1 = LittleEndian::read_u16(&block[2..4]);
    let indices = LittleEndian::read_u32(&block[4..8]);

    let palette = palette(c0, c1, force_opaque || c0 > c1);

    let mut out = [[0u8; 4]; BLOCK_PIXELS];
    for (i, px) in out.iter_mut().enumerate() {
        *px = palette[((indices >> (2 * i)) & 0x3) as usize];
    }
    out
}

fn palette(c0: u16, c1: u16, opaque: bool) -> [Rgba8; 4] {
    let [r0, g0, b0] = rgb565_to_888(c0).map(u16::from);
    let [r1, g1, b1] = rgb565_to_888(c1).map(u16::from);

    let first = [r0 as u8, g0 as u8, b0 as u8, 255];
    let second = [r1 as u8, g1 as u8, b1 as u8, 255];

    if opaque {
        [
            first,
            second,
            [
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ],
            [
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ],
        ]
    } else {
        [
            first,
            second,
            [
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ],
            [0, 0, 0, 0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(c0: u16, c1: u16, indices: u32) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        LittleEndian::write_u16(&mut out[0..2], c0);
        LittleEndian::write_u16(&mut out[2..4], c1);
        LittleEndian::write_u32(&mut out[4..8], indices);
        out
    }

    /// Every 2-bit index set to the same value.
    fn uniform(index: u32) -> u32 {
        (0..16).fold(0, |acc, i| acc | (index << (2 * i)))
    }

    #[test]
    fn test_white_black_all_zero_indices() {
        let tile = decode_block(&block(0xFFFF, 0x0000, 0));
        assert!(tile.iter().all(|px| *px == [255, 255, 255, 255]));
    }

    #[test]
    fn test_opaque_palette_alpha() {
        // Every index value appears in the table.
        let tile = decode_block(&block(0xF800, 0x001F, 0xE4E4_E4E4));
        assert!(tile.iter().all(|px| px[3] == 255));
        assert_eq!(tile[0], [255, 0, 0, 255]);
        assert_eq!(tile[1], [0, 0, 255, 255]);
        assert_eq!(tile[2], [170, 0, 85, 255]);
        assert_eq!(tile[3], [85, 0, 170, 255]);
    }

    #[test]
    fn test_one_bit_alpha_palette() {
        let tile = decode_block(&block(0x001F, 0xF800, uniform(3)));
        assert!(tile.iter().all(|px| *px == [0, 0, 0, 0]));

        let tile = decode_block(&block(0x001F, 0xF800, uniform(2)));
        assert!(tile.iter().all(|px| *px == [127, 0, 127, 255]));
    }

    #[test]
    fn test_equal_endpoints_use_alpha_palette() {
        let tile = decode_block(&block(0x1234, 0x1234, uniform(3)));
        assert!(tile.iter().all(|px| *px == [0, 0, 0, 0]));
    }

    #[test]
    fn test_forced_opaque_ignores_endpoint_order() {
        let tile = decode_color(&block(0x0000, 0xFFFF, uniform(3)), true);
        assert!(tile.iter().all(|px| *px == [170, 170, 170, 255]));
    }

    #[test]
    fn test_index_order_is_row_major() {
        // Only pixel 5 (x = 1, y = 1) selects c1.
        let tile = decode_block(&block(0xFFFF, 0x0000, 1 << 10));
        for (i, px) in tile.iter().enumerate() {
            let expected = if i == 5 { [0, 0, 0, 255] } else { [255, 255, 255, 255] };
            assert_eq!(*px, expected, "pixel {i}");
        }
    }
}
