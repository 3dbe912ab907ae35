//! BC7 block decoding.
//!
//! A BC7 block is 128 bits read LSB-first. The position of the first set bit
//! selects one of eight modes, and the mode fixes the layout of everything
//! that follows:
//!
//! | Mode | Regions | Shape bits | Rotation | Endpoint bits (RGBA + p) | Index bits |
//! |------|---------|------------|----------|--------------------------|------------|
//! | 0    | 3       | 4          | -        | 4/4/4/0 + 1 per endpoint | 3          |
//! | 1    | 2       | 6          | -        | 6/6/6/0 + 1 per pair     | 3          |
//! | 2    | 3       | 6          | -        | 5/5/5/0                  | 2          |
//! | 3    | 2       | 6          | -        | 7/7/7/0 + 1 per endpoint | 2          |
//! | 4    | 1       | -          | 2 + 1    | 5/5/5/6                  | 2 and 3    |
//! | 5    | 1       | -          | 2        | 7/7/7/8                  | 2 and 2    |
//! | 6    | 1       | -          | -        | 7/7/7/7 + 1 per endpoint | 4          |
//! | 7    | 2       | 6          | -        | 5/5/5/5 + 1 per endpoint | 2          |
//!
//! The first pixel of every region (its fix-up pixel) stores its index with
//! one bit less, since the top bit is implied to be zero.

mod bits;
mod tables;

use bits::BitCursor;
use tables::{weights, ModeInfo, FIXUP_TABLE, MODES, PARTITION_TABLE};

use crate::srgb::srgb_to_linear;
use crate::{ColorSpace, DecodedBlock, Error, Result, Rgba8, BLOCK_PIXELS};

/// Size of a BC7 block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Maximum number of endpoints in any mode (three regions).
const MAX_ENDPOINTS: usize = 6;

/// Determine the mode of a block from its leading zero bits.
///
/// Returns [`Error::ReservedMode`] when none of the first eight bits is set.
pub fn block_mode(block: &[u8; BLOCK_SIZE]) -> Result<u8> {
    match block[0].trailing_zeros() {
        8 => Err(Error::ReservedMode),
        mode => Ok(mode as u8),
    }
}

/// Decode a BC7 block.
///
/// With [`ColorSpace::Srgb`] the RGB channels of every output pixel are
/// converted from sRGB to linear; alpha is left untouched.
pub fn decode_block(block: &[u8; BLOCK_SIZE], color_space: ColorSpace) -> Result<DecodedBlock> {
    let mut cursor = BitCursor::new(*block);

    let mut mode = 0u8;
    while mode < 8 && read(&mut cursor, mode, 1)? == 0 {
        mode += 1;
    }
    if mode == 8 {
        return Err(Error::ReservedMode);
    }

    let info = &MODES[usize::from(mode)];
    let shape = read(&mut cursor, mode, info.partition_bits)? as usize;
    let rotation = read(&mut cursor, mode, info.rotation_bits)?;
    let index_mode = read(&mut cursor, mode, info.index_mode_bits)?;

    let endpoints = read_endpoints(&mut cursor, mode, info)?;

    let subset_table = usize::from(info.subsets) - 1;
    let regions = &PARTITION_TABLE[subset_table][shape];
    let fixups = &FIXUP_TABLE[subset_table][shape][..usize::from(info.subsets)];

    let mut primary = [0u8; BLOCK_PIXELS];
    for (i, index) in primary.iter_mut().enumerate() {
        let bits = if fixups.contains(&(i as u8)) {
            info.index_prec - 1
        } else {
            info.index_prec
        };
        *index = read(&mut cursor, mode, bits)? as u8;
    }

    let mut secondary = [0u8; BLOCK_PIXELS];
    if info.index_prec2 > 0 {
        for (i, index) in secondary.iter_mut().enumerate() {
            let bits = if i == 0 {
                info.index_prec2 - 1
            } else {
                info.index_prec2
            };
            *index = read(&mut cursor, mode, bits)? as u8;
        }
    }

    // Index plane and precision driving color, then alpha.
    let (color_idx, color_prec, alpha_idx, alpha_prec) = if info.index_prec2 == 0 {
        (&primary, info.index_prec, &primary, info.index_prec)
    } else if index_mode == 0 {
        (&primary, info.index_prec, &secondary, info.index_prec2)
    } else {
        (&secondary, info.index_prec2, &primary, info.index_prec)
    };
    let color_weights = weights(color_prec);
    let alpha_weights = weights(alpha_prec);

    let mut out = [[0u8; 4]; BLOCK_PIXELS];
    for (i, px) in out.iter_mut().enumerate() {
        let region = usize::from(regions[i]);
        let e0 = &endpoints[region * 2];
        let e1 = &endpoints[region * 2 + 1];

        let cw = color_weights[usize::from(color_idx[i])];
        let aw = alpha_weights[usize::from(alpha_idx[i])];

        *px = [
            interpolate(e0[0], e1[0], cw),
            interpolate(e0[1], e1[1], cw),
            interpolate(e0[2], e1[2], cw),
            interpolate(e0[3], e1[3], aw),
        ];

        match rotation {
            1 => px.swap(0, 3),
            2 => px.swap(1, 3),
            3 => px.swap(2, 3),
            _ => {}
        }

        if color_space == ColorSpace::Srgb {
            for channel in &mut px[..3] {
                *channel = srgb_to_linear(*channel);
            }
        }
    }

    Ok(out)
}

/// Read one field, turning a budget overrun into an error naming the mode and offset.
#[inline]
fn read(cursor: &mut BitCursor, mode: u8, bits: u8) -> Result<u32> {
    let offset = cursor.position();
    cursor
        .read_bits(bits)
        .ok_or(Error::BitBudget { mode, offset, bits })
}

/// Read, p-bit augment and unquantize all endpoints of a block.
fn read_endpoints(
    cursor: &mut BitCursor,
    mode: u8,
    info: &ModeInfo,
) -> Result<[Rgba8; MAX_ENDPOINTS]> {
    let count = info.endpoints();
    let mut raw = [[0u32; 4]; MAX_ENDPOINTS];

    // All R values first, then all G, B and A.
    for channel in 0..4 {
        for endpoint in raw.iter_mut().take(count) {
            endpoint[channel] = read(cursor, mode, info.prec[channel])?;
        }
    }

    let mut pbits = [0u32; MAX_ENDPOINTS];
    for pbit in pbits.iter_mut().take(usize::from(info.pbits)) {
        *pbit = read(cursor, mode, 1)?;
    }

    let mut out = [[0u8; 4]; MAX_ENDPOINTS];
    for (i, (endpoint, unquantized)) in raw.iter().zip(out.iter_mut()).take(count).enumerate() {
        // One p-bit per endpoint, or one shared by each pair.
        let pbit = if usize::from(info.pbits) == count {
            pbits[i]
        } else {
            pbits[i >> 1]
        };

        for channel in 0..4 {
            let mut value = endpoint[channel];
            if info.prec[channel] != info.prec_with_p[channel] {
                value = (value << 1) | pbit;
            }
            unquantized[channel] = unquantize(value, info.prec_with_p[channel]);
        }

        if info.prec_with_p[3] == 0 {
            unquantized[3] = 255;
        }
    }

    Ok(out)
}

/// Expand a `prec`-bit value to 8 bits by replicating its high bits.
#[inline]
fn unquantize(value: u32, prec: u8) -> u8 {
    if prec == 0 {
        return 0;
    }
    let prec = u32::from(prec);
    let v = value << (8 - prec);
    (v | (v >> prec)) as u8
}

#[inline]
fn interpolate(c0: u8, c1: u8, weight: u32) -> u8 {
    ((u32::from(c0) * (64 - weight) + u32::from(c1) * weight + 32) >> 6) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Packs fields LSB-first into a block, mirroring the decoder's reads.
    struct BlockWriter {
        value: u128,
        pos: u32,
    }

    impl BlockWriter {
        fn new() -> Self {
            Self { value: 0, pos: 0 }
        }

        fn mode(mut self, mode: u8) -> Self {
            self.put(1 << mode, mode + 1);
            self
        }

        fn put(&mut self, value: u32, bits: u8) {
            self.value |= u128::from(value) << self.pos;
            self.pos += u32::from(bits);
        }

        fn finish(self) -> [u8; BLOCK_SIZE] {
            assert!(self.pos <= 128, "fixture overflows: {} bits", self.pos);
            self.value.to_le_bytes()
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    #[case(7)]
    fn test_single_bit_selects_mode(#[case] mode: u8) {
        let block = (1u128 << mode).to_le_bytes();
        assert_eq!(block_mode(&block), Ok(mode));
        assert!(decode_block(&block, ColorSpace::Linear).is_ok());
    }

    #[test]
    fn test_all_zero_block_is_reserved_mode() {
        let block = [0u8; BLOCK_SIZE];
        assert_eq!(block_mode(&block), Err(Error::ReservedMode));
        assert_eq!(decode_block(&block, ColorSpace::Linear), Err(Error::ReservedMode));
    }

    #[test]
    fn test_mode_bit_beyond_eight_is_reserved() {
        let block = (1u128 << 12).to_le_bytes();
        assert_eq!(decode_block(&block, ColorSpace::Linear), Err(Error::ReservedMode));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    #[case(7)]
    fn test_every_mode_fills_exactly_128_bits(#[case] mode: u8) {
        let info = &MODES[usize::from(mode)];
        let subsets = usize::from(info.subsets);
        let endpoint_bits: u32 = info.prec.iter().map(|&p| u32::from(p)).sum::<u32>()
            * info.endpoints() as u32;
        let index_bits = 16 * u32::from(info.index_prec) - subsets as u32
            + if info.index_prec2 > 0 {
                16 * u32::from(info.index_prec2) - 1
            } else {
                0
            };
        let total = u32::from(mode)
            + 1
            + u32::from(info.partition_bits)
            + u32::from(info.rotation_bits)
            + u32::from(info.index_mode_bits)
            + endpoint_bits
            + u32::from(info.pbits)
            + index_bits;
        assert_eq!(total, 128);
    }

    #[test]
    fn test_mode6_solid_color() {
        // R = 100, G = 50, B = 200, A = 255 at 8 bits (7 bits + p-bit).
        let mut w = BlockWriter::new().mode(6);
        for (v0, v1) in [(50, 50), (25, 25), (100, 100), (127, 127)] {
            w.put(v0, 7);
            w.put(v1, 7);
        }
        w.put(0, 1);
        w.put(0, 1);
        let tile = decode_block(&w.finish(), ColorSpace::Linear).unwrap();

        assert!(tile.iter().all(|px| *px == [100, 50, 200, 254]));
    }

    #[test]
    fn test_mode6_interpolates_between_endpoints() {
        // Endpoint 0 black, endpoint 1 white. The fix-up pixel holds index 7
        // (3 bits), every other pixel index 15.
        let mut w = BlockWriter::new().mode(6);
        for _ in 0..3 {
            w.put(0, 7);
            w.put(127, 7);
        }
        w.put(127, 7);
        w.put(127, 7);
        w.put(0, 1);
        w.put(1, 1);
        w.put(0b111, 3);
        for _ in 1..16 {
            w.put(0b1111, 4);
        }
        let tile = decode_block(&w.finish(), ColorSpace::Linear).unwrap();

        assert_eq!(tile[0], [120, 120, 120, 254]);
        assert!(tile[1..].iter().all(|px| *px == [255, 255, 255, 255]));
    }

    #[test]
    fn test_mode5_rotation_swaps_red_and_alpha() {
        // Color endpoints red = 255, alpha = 0; rotation 1 puts them the other way round.
        let mut w = BlockWriter::new().mode(5);
        w.put(1, 2);
        for value in [127, 127, 0, 0, 0, 0] {
            w.put(value, 7);
        }
        w.put(0, 8);
        w.put(0, 8);
        let tile = decode_block(&w.finish(), ColorSpace::Linear).unwrap();

        assert!(tile.iter().all(|px| *px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_mode4_index_selector_swaps_planes() {
        // Color from a 2-bit plane, alpha from a 3-bit plane; selector flips them.
        let build = |selector: u32| {
            let mut w = BlockWriter::new().mode(4);
            w.put(0, 2);
            w.put(selector, 1);
            for (v0, v1) in [(0, 31), (0, 31), (0, 31)] {
                w.put(v0, 5);
                w.put(v1, 5);
            }
            w.put(0, 6);
            w.put(63, 6);
            // 2-bit plane: all 1 (fix-up pixel has 1 bit).
            w.put(1, 1);
            for _ in 1..16 {
                w.put(1, 2);
            }
            // 3-bit plane: all 3 (fix-up pixel has 2 bits).
            w.put(3, 2);
            for _ in 1..16 {
                w.put(3, 3);
            }
            w.finish()
        };

        let w2 = weights(2)[1];
        let w3 = weights(3)[3];
        let from2 = interpolate(0, 255, w2);
        let from3 = interpolate(0, 255, w3);

        let plain = decode_block(&build(0), ColorSpace::Linear).unwrap();
        assert!(plain.iter().all(|px| *px == [from2, from2, from2, from3]));

        let swapped = decode_block(&build(1), ColorSpace::Linear).unwrap();
        assert!(swapped.iter().all(|px| *px == [from3, from3, from3, from2]));
    }

    #[test]
    fn test_mode1_partition_regions_and_shared_pbits() {
        // Shape 0 splits columns {0,1} and {2,3}; region 0 red, region 1 blue.
        // The set p-bits lift every zero channel to 1 of 127, i.e. 2 of 255.
        let mut w = BlockWriter::new().mode(1);
        w.put(0, 6);
        for values in [[63, 63, 0, 0], [0, 0, 0, 0], [0, 0, 63, 63]] {
            for v in values {
                w.put(v, 6);
            }
        }
        w.put(1, 1);
        w.put(1, 1);
        let tile = decode_block(&w.finish(), ColorSpace::Linear).unwrap();

        for (i, px) in tile.iter().enumerate() {
            let expected = if i % 4 < 2 { [255, 2, 2, 255] } else { [2, 2, 255, 255] };
            assert_eq!(*px, expected, "pixel {i}");
        }
    }

    #[test]
    fn test_srgb_converts_color_only() {
        let mut w = BlockWriter::new().mode(6);
        for (v0, v1) in [(64, 64), (64, 64), (64, 64), (64, 64)] {
            w.put(v0, 7);
            w.put(v1, 7);
        }
        w.put(0, 1);
        w.put(0, 1);
        let block = w.finish();

        let linear = decode_block(&block, ColorSpace::Linear).unwrap();
        let srgb = decode_block(&block, ColorSpace::Srgb).unwrap();

        assert_eq!(linear[0], [128, 128, 128, 128]);
        assert_eq!(srgb[0], [srgb_to_linear(128), srgb_to_linear(128), srgb_to_linear(128), 128]);
        assert_eq!(srgb[0][0], 55);
    }

    #[test]
    fn test_unquantize_replicates_high_bits() {
        assert_eq!(unquantize(0b11111, 5), 255);
        assert_eq!(unquantize(0b10000, 5), 0b1000_0100);
        assert_eq!(unquantize(0x7F, 7), 255);
        assert_eq!(unquantize(0x80, 8), 0x80);
    }
}
