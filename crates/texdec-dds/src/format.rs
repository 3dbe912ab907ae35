//! Pixel format resolution.
//!
//! Maps the legacy pixel format block or the DX10 `dxgi_format` to a
//! [`SurfaceFormat`]: which decoder applies and how many bytes each mip
//! level occupies in the file.

use std::fmt;

use texdec_bcn::ColorSpace;

use crate::header::{DdsHeaderDxt10, DdsPixelFormat, FourCC};

/// Decoder selected for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    /// BC1, opaque or one-bit alpha.
    Dxt1,
    /// BC2, explicit 4-bit alpha.
    Dxt3,
    /// BC3, interpolated alpha.
    Dxt5,
    /// BC7 in the given color space.
    Bc7(ColorSpace),
    /// Uncompressed data described by channel masks.
    Uncompressed(PixelLayout),
    /// Recognized layout with no decoder.
    Unsupported(&'static str),
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockFormat::Dxt1 => f.write_str("DXT1"),
            BlockFormat::Dxt3 => f.write_str("DXT3"),
            BlockFormat::Dxt5 => f.write_str("DXT5"),
            BlockFormat::Bc7(ColorSpace::Linear) => f.write_str("BC7"),
            BlockFormat::Bc7(ColorSpace::Srgb) => f.write_str("BC7 sRGB"),
            BlockFormat::Uncompressed(layout) => {
                write!(f, "uncompressed {}-bit", layout.bytes_per_pixel * 8)
            }
            BlockFormat::Unsupported(name) => f.write_str(name),
        }
    }
}

/// Channel masks of an uncompressed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Bytes per pixel, 1 to 4.
    pub bytes_per_pixel: u8,
    /// Red, green, blue and alpha masks. A zero mask means the channel is absent.
    pub masks: [u32; 4],
    /// The red mask holds a gray value replicated to all color channels.
    pub luminance: bool,
}

impl PixelLayout {
    const fn rgba(bytes_per_pixel: u8, masks: [u32; 4]) -> Self {
        Self {
            bytes_per_pixel,
            masks,
            luminance: false,
        }
    }

    const fn gray(bytes_per_pixel: u8, mask: u32) -> Self {
        Self {
            bytes_per_pixel,
            masks: [mask, 0, 0, 0],
            luminance: true,
        }
    }
}

/// How the byte size of one mip level is derived from its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    /// 4x4 blocks of `block_size` bytes.
    Block { block_size: usize },
    /// Two pixels share four bytes (R8G8_B8G8 style).
    Packed,
    /// Plain rows of `bits_per_pixel` each.
    Bits { bits_per_pixel: u32 },
}

impl Pitch {
    /// Bytes per stored row (or row of blocks), or `None` on overflow.
    pub fn row_pitch(&self, width: u32) -> Option<usize> {
        let width = width as usize;
        match *self {
            Pitch::Block { block_size } => width.div_ceil(4).max(1).checked_mul(block_size),
            Pitch::Packed => width.div_ceil(2).checked_mul(4),
            Pitch::Bits { bits_per_pixel } => width
                .checked_mul(bits_per_pixel as usize)
                .map(|bits| bits.div_ceil(8)),
        }
    }

    /// Number of stored rows (or rows of blocks).
    pub fn rows(&self, height: u32) -> usize {
        let height = height as usize;
        match self {
            Pitch::Block { .. } => height.div_ceil(4).max(1),
            Pitch::Packed | Pitch::Bits { .. } => height,
        }
    }

    /// Byte size of one level with the given dimensions, or `None` if it
    /// does not fit in `usize`.
    pub fn level_size(&self, width: u32, height: u32) -> Option<usize> {
        self.row_pitch(width)?.checked_mul(self.rows(height))
    }
}

/// A resolved surface format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFormat {
    /// Decoder to use.
    pub block: BlockFormat,
    /// Storage size rule.
    pub pitch: Pitch,
}

impl SurfaceFormat {
    const fn new(block: BlockFormat, pitch: Pitch) -> Self {
        Self { block, pitch }
    }

    const fn blocks(block: BlockFormat, block_size: usize) -> Self {
        Self::new(block, Pitch::Block { block_size })
    }

    const fn bits(block: BlockFormat, bits_per_pixel: u32) -> Self {
        Self::new(block, Pitch::Bits { bits_per_pixel })
    }

    /// Whether a decoder exists for this format.
    pub fn is_supported(&self) -> bool {
        !matches!(self.block, BlockFormat::Unsupported(_))
    }
}

/// Resolve the surface format of a file.
///
/// Returns `None` when the storage size cannot be determined, in which case
/// the pixel data can only be passed through untouched.
pub fn resolve(
    pixel_format: &DdsPixelFormat,
    dx10: Option<&DdsHeaderDxt10>,
) -> Option<SurfaceFormat> {
    match dx10 {
        Some(ext) => resolve_dxgi(ext.dxgi_format()),
        None => resolve_legacy(pixel_format),
    }
}

fn resolve_legacy(pf: &DdsPixelFormat) -> Option<SurfaceFormat> {
    if pf.has_four_cc() {
        return resolve_four_cc(pf.four_cc);
    }

    let bits = pf.rgb_bit_count;
    if bits == 0 {
        return None;
    }
    if pf.has_any(DdsPixelFormat::YUV) {
        return Some(SurfaceFormat::bits(BlockFormat::Unsupported("YUV"), bits));
    }
    if !pf.has_any(
        DdsPixelFormat::RGB
            | DdsPixelFormat::LUMINANCE
            | DdsPixelFormat::ALPHA
            | DdsPixelFormat::ALPHAPIXELS,
    ) {
        return None;
    }

    let block = match bits {
        8 | 16 | 24 | 32 => {
            let bytes_per_pixel = (bits / 8) as u8;
            let mut masks = pf.masks();
            if !pf.has_any(DdsPixelFormat::ALPHAPIXELS | DdsPixelFormat::ALPHA) {
                masks[3] = 0;
            }
            let luminance = pf.has_any(DdsPixelFormat::LUMINANCE);
            if luminance {
                masks[1] = 0;
                masks[2] = 0;
            }
            if pf.has_any(DdsPixelFormat::ALPHA) && !pf.has_any(DdsPixelFormat::RGB) && !luminance
            {
                masks[0] = 0;
                masks[1] = 0;
                masks[2] = 0;
            }
            BlockFormat::Uncompressed(PixelLayout {
                bytes_per_pixel,
                masks,
                luminance,
            })
        }
        _ => BlockFormat::Unsupported("uncompressed wide pixel"),
    };
    Some(SurfaceFormat::bits(block, bits))
}

fn resolve_four_cc(four_cc: FourCC) -> Option<SurfaceFormat> {
    let format = match four_cc {
        FourCC::DXT1 => SurfaceFormat::blocks(BlockFormat::Dxt1, 8),
        FourCC::DXT2 | FourCC::DXT3 => SurfaceFormat::blocks(BlockFormat::Dxt3, 16),
        FourCC::DXT4 | FourCC::DXT5 => SurfaceFormat::blocks(BlockFormat::Dxt5, 16),
        FourCC::ATI1 | FourCC::BC4U | FourCC::BC4S => {
            SurfaceFormat::blocks(BlockFormat::Unsupported("BC4"), 8)
        }
        FourCC::ATI2 | FourCC::BC5U | FourCC::BC5S => {
            SurfaceFormat::blocks(BlockFormat::Unsupported("BC5"), 16)
        }
        FourCC::RGBG | FourCC::GRGB => {
            SurfaceFormat::new(BlockFormat::Unsupported("R8G8_B8G8"), Pitch::Packed)
        }
        _ => return None,
    };
    Some(format)
}

fn resolve_dxgi(format: u32) -> Option<SurfaceFormat> {
    const RGBA8: PixelLayout =
        PixelLayout::rgba(4, [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000]);
    const BGRA8: PixelLayout =
        PixelLayout::rgba(4, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000]);
    const BGRX8: PixelLayout = PixelLayout::rgba(4, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0]);
    const B5G6R5: PixelLayout = PixelLayout::rgba(2, [0xF800, 0x07E0, 0x001F, 0]);
    const B5G5R5A1: PixelLayout = PixelLayout::rgba(2, [0x7C00, 0x03E0, 0x001F, 0x8000]);
    const R8: PixelLayout = PixelLayout::gray(1, 0xFF);
    const A8: PixelLayout = PixelLayout::rgba(1, [0, 0, 0, 0xFF]);

    let resolved = match format {
        70..=72 => SurfaceFormat::blocks(BlockFormat::Dxt1, 8),
        73..=75 => SurfaceFormat::blocks(BlockFormat::Dxt3, 16),
        76..=78 => SurfaceFormat::blocks(BlockFormat::Dxt5, 16),
        79..=81 => SurfaceFormat::blocks(BlockFormat::Unsupported("BC4"), 8),
        82..=84 => SurfaceFormat::blocks(BlockFormat::Unsupported("BC5"), 16),
        94..=96 => SurfaceFormat::blocks(BlockFormat::Unsupported("BC6H"), 16),
        97 | 98 => SurfaceFormat::blocks(BlockFormat::Bc7(ColorSpace::Linear), 16),
        99 => SurfaceFormat::blocks(BlockFormat::Bc7(ColorSpace::Srgb), 16),
        68 | 69 => SurfaceFormat::new(BlockFormat::Unsupported("R8G8_B8G8"), Pitch::Packed),
        27..=32 => SurfaceFormat::bits(BlockFormat::Uncompressed(RGBA8), 32),
        87 | 90 | 91 => SurfaceFormat::bits(BlockFormat::Uncompressed(BGRA8), 32),
        88 | 92 | 93 => SurfaceFormat::bits(BlockFormat::Uncompressed(BGRX8), 32),
        85 => SurfaceFormat::bits(BlockFormat::Uncompressed(B5G6R5), 16),
        86 => SurfaceFormat::bits(BlockFormat::Uncompressed(B5G5R5A1), 16),
        60..=64 => SurfaceFormat::bits(BlockFormat::Uncompressed(R8), 8),
        65 => SurfaceFormat::bits(BlockFormat::Uncompressed(A8), 8),
        _ => match dxgi_bits_per_pixel(format) {
            0 => return None,
            bits => SurfaceFormat::bits(BlockFormat::Unsupported("DXGI"), bits),
        },
    };
    Some(resolved)
}

/// Bits per pixel of a DXGI format, or 0 when unknown.
#[rustfmt::skip]
pub fn dxgi_bits_per_pixel(format: u32) -> u32 {
    match format {
        1..=4 => 128,
        5..=8 => 96,
        9..=22 | 102 | 108 | 109 => 64,
        23..=47 | 67..=69 | 87..=93 | 100 | 101 | 107 => 32,
        104 | 105 | 132 => 24,
        48..=59 | 85 | 86 | 114 | 115 | 130 | 131 => 16,
        103 | 106 | 110 => 12,
        60..=65 | 73..=78 | 82..=84 | 94..=99 | 111..=113 => 8,
        70..=72 | 79..=81 => 4,
        66 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use zerocopy::FromZeros;

    fn four_cc(code: FourCC) -> DdsPixelFormat {
        let mut pf = DdsPixelFormat::new_zeroed();
        pf.flags = DdsPixelFormat::FOURCC;
        pf.four_cc = code;
        pf
    }

    fn dxgi(format: u32) -> Option<SurfaceFormat> {
        let ext = DdsHeaderDxt10 {
            dxgi_format: format,
            resource_dimension: 3,
            misc_flag: 0,
            array_size: 1,
            misc_flags2: 0,
        };
        resolve(&four_cc(FourCC::DX10), Some(&ext))
    }

    #[rstest]
    #[case(FourCC::DXT1, BlockFormat::Dxt1, 8)]
    #[case(FourCC::DXT2, BlockFormat::Dxt3, 16)]
    #[case(FourCC::DXT3, BlockFormat::Dxt3, 16)]
    #[case(FourCC::DXT4, BlockFormat::Dxt5, 16)]
    #[case(FourCC::DXT5, BlockFormat::Dxt5, 16)]
    #[case(FourCC::ATI1, BlockFormat::Unsupported("BC4"), 8)]
    #[case(FourCC::BC5S, BlockFormat::Unsupported("BC5"), 16)]
    fn test_legacy_four_cc(
        #[case] code: FourCC,
        #[case] block: BlockFormat,
        #[case] block_size: usize,
    ) {
        let format = resolve(&four_cc(code), None).unwrap();
        assert_eq!(format.block, block);
        assert_eq!(format.pitch, Pitch::Block { block_size });
    }

    #[test]
    fn test_unknown_four_cc_passes_through() {
        assert_eq!(resolve(&four_cc(FourCC([0x71, 0, 0, 0])), None), None);
    }

    #[rstest]
    #[case(71, BlockFormat::Dxt1)]
    #[case(74, BlockFormat::Dxt3)]
    #[case(77, BlockFormat::Dxt5)]
    #[case(97, BlockFormat::Bc7(ColorSpace::Linear))]
    #[case(98, BlockFormat::Bc7(ColorSpace::Linear))]
    #[case(99, BlockFormat::Bc7(ColorSpace::Srgb))]
    #[case(95, BlockFormat::Unsupported("BC6H"))]
    #[case(80, BlockFormat::Unsupported("BC4"))]
    fn test_dxgi_block_formats(#[case] code: u32, #[case] block: BlockFormat) {
        assert_eq!(dxgi(code).unwrap().block, block);
    }

    #[test]
    fn test_dxgi_uncompressed_and_unknown() {
        let rgba = dxgi(28).unwrap();
        assert_eq!(rgba.pitch, Pitch::Bits { bits_per_pixel: 32 });
        assert!(matches!(rgba.block, BlockFormat::Uncompressed(l) if l.masks[0] == 0xFF));

        let float = dxgi(2).unwrap();
        assert_eq!(float.block, BlockFormat::Unsupported("DXGI"));
        assert_eq!(float.pitch, Pitch::Bits { bits_per_pixel: 128 });

        assert_eq!(dxgi(0), None);
        assert_eq!(dxgi(400), None);
        assert_eq!(dxgi(68).unwrap().pitch, Pitch::Packed);
    }

    #[test]
    fn test_legacy_rgb_masks() {
        let mut pf = DdsPixelFormat::new_zeroed();
        pf.flags = DdsPixelFormat::RGB;
        pf.rgb_bit_count = 32;
        pf.r_bit_mask = 0x00FF_0000;
        pf.g_bit_mask = 0x0000_FF00;
        pf.b_bit_mask = 0x0000_00FF;
        pf.a_bit_mask = 0xFF00_0000;

        let opaque = resolve(&pf, None).unwrap();
        let BlockFormat::Uncompressed(layout) = opaque.block else {
            panic!("expected uncompressed, got {:?}", opaque.block);
        };
        assert_eq!(layout.masks[3], 0, "alpha mask ignored without ALPHAPIXELS");

        pf.flags |= DdsPixelFormat::ALPHAPIXELS;
        let BlockFormat::Uncompressed(layout) = resolve(&pf, None).unwrap().block else {
            panic!("expected uncompressed");
        };
        assert_eq!(layout.masks[3], 0xFF00_0000);
        assert_eq!(layout.bytes_per_pixel, 4);
    }

    #[test]
    fn test_legacy_without_bits_passes_through() {
        let mut pf = DdsPixelFormat::new_zeroed();
        pf.flags = DdsPixelFormat::RGB;
        assert_eq!(resolve(&pf, None), None);
    }

    #[rstest]
    #[case(Pitch::Block { block_size: 8 }, 1, 1, 8)]
    #[case(Pitch::Block { block_size: 8 }, 4, 4, 8)]
    #[case(Pitch::Block { block_size: 16 }, 5, 3, 32)]
    #[case(Pitch::Block { block_size: 16 }, 64, 64, 4096)]
    #[case(Pitch::Packed, 3, 2, 16)]
    #[case(Pitch::Bits { bits_per_pixel: 32 }, 3, 2, 24)]
    #[case(Pitch::Bits { bits_per_pixel: 1 }, 9, 2, 4)]
    fn test_level_size(
        #[case] pitch: Pitch,
        #[case] width: u32,
        #[case] height: u32,
        #[case] size: usize,
    ) {
        assert_eq!(pitch.level_size(width, height), Some(size));
    }

    #[test]
    fn test_level_size_overflow() {
        let bits = Pitch::Bits { bits_per_pixel: 32 };
        assert_eq!(bits.level_size(u32::MAX, u32::MAX), None);
        assert_eq!(Pitch::Packed.level_size(u32::MAX, u32::MAX), None);
    }
}
