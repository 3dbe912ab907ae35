//! DDS header structures.

use std::fmt;
use std::io::{self, Read};

use texdec_common::ReadExt;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result, DDS_MAGIC};

/// DDS file header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// `caps2` bit marking a cubemap.
    pub const CAPS2_CUBEMAP: u32 = 0x200;

    /// Image width of the base level.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height of the base level.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of mip levels, treating a stored 0 as 1.
    #[inline]
    pub fn mip_count(&self) -> u32 {
        self.mipmap_count.max(1)
    }

    /// Check if the surface is a cubemap.
    #[inline]
    pub fn is_cubemap(&self) -> bool {
        self.caps2 & Self::CAPS2_CUBEMAP != 0
    }

    /// Number of stored faces: 6 for a cubemap, otherwise 1.
    #[inline]
    pub fn face_count(&self) -> u32 {
        if self.is_cubemap() {
            6
        } else {
            1
        }
    }

    /// Check if this is a DX10 extended header.
    pub fn is_dx10(&self) -> bool {
        self.pixel_format.has_four_cc() && self.pixel_format.four_cc == FourCC::DX10
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// Texture contains alpha data.
    pub const ALPHAPIXELS: u32 = 0x1;
    /// Alpha-only uncompressed data.
    pub const ALPHA: u32 = 0x2;
    /// Compressed data identified by `four_cc`.
    pub const FOURCC: u32 = 0x4;
    /// Uncompressed RGB data.
    pub const RGB: u32 = 0x40;
    /// YUV uncompressed data.
    pub const YUV: u32 = 0x200;
    /// Single-channel luminance data.
    pub const LUMINANCE: u32 = 0x20000;

    /// Check if the FourCC flag is set.
    #[inline]
    pub fn has_four_cc(&self) -> bool {
        self.flags & Self::FOURCC != 0
    }

    /// Check if any of the given flags is set.
    #[inline]
    pub fn has_any(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    /// Red, green, blue and alpha masks in that order.
    #[inline]
    pub fn masks(&self) -> [u32; 4] {
        [self.r_bit_mask, self.g_bit_mask, self.b_bit_mask, self.a_bit_mask]
    }
}

/// Four-character code for compression type.
#[derive(Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT2 compression (premultiplied DXT3).
    pub const DXT2: Self = Self(*b"DXT2");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT4 compression (premultiplied DXT5).
    pub const DXT4: Self = Self(*b"DXT4");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");
    /// DX10 extended header.
    pub const DX10: Self = Self(*b"DX10");
    /// ATI1 (BC4) compression.
    pub const ATI1: Self = Self(*b"ATI1");
    /// ATI2 (BC5) compression.
    pub const ATI2: Self = Self(*b"ATI2");
    /// BC4U compression.
    pub const BC4U: Self = Self(*b"BC4U");
    /// BC4S compression.
    pub const BC4S: Self = Self(*b"BC4S");
    /// BC5U compression.
    pub const BC5U: Self = Self(*b"BC5U");
    /// BC5S compression.
    pub const BC5S: Self = Self(*b"BC5S");
    /// Packed R8G8_B8G8.
    pub const RGBG: Self = Self(*b"RGBG");
    /// Packed G8R8_G8B8.
    pub const GRGB: Self = Self(*b"GRGB");
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({self})")
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            for &b in &self.0 {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08X}", u32::from_le_bytes(self.0))
        }
    }
}

/// DX10 extended header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeaderDxt10 {
    /// DXGI format.
    pub dxgi_format: u32,
    /// Resource dimension.
    pub resource_dimension: u32,
    /// Misc flags.
    pub misc_flag: u32,
    /// Array size.
    pub array_size: u32,
    /// Misc flags 2.
    pub misc_flags2: u32,
}

impl DdsHeaderDxt10 {
    /// DXGI format code.
    #[inline]
    pub fn dxgi_format(&self) -> u32 {
        self.dxgi_format
    }
}

/// Read the magic, the primary header and, if announced, the DX10 header.
///
/// On success the reader is positioned at the first byte of pixel data.
/// A stream that ends inside the headers yields [`Error::TruncatedHeader`].
pub fn read_headers<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<(DdsHeader, Option<DdsHeaderDxt10>)> {
    reader.expect_magic(DDS_MAGIC).map_err(|e| match e {
        texdec_common::Error::InvalidMagic { actual, .. } => {
            let mut magic = [0u8; 4];
            for (dst, src) in magic.iter_mut().zip(&actual) {
                *dst = *src;
            }
            Error::InvalidMagic(magic)
        }
        e if e.is_truncation() => Error::TruncatedHeader,
        e => Error::Common(e),
    })?;

    let header: DdsHeader = reader.read_struct().map_err(truncated)?;

    let dx10 = if header.is_dx10() {
        Some(reader.read_struct::<DdsHeaderDxt10>().map_err(truncated)?)
    } else {
        None
    };

    Ok((header, dx10))
}

fn truncated(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedHeader
    } else {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::FromZeros;

    fn header_bytes(four_cc: FourCC, flags: u32, caps2: u32) -> Vec<u8> {
        let mut header = DdsHeader::new_zeroed();
        header.size = DdsHeader::SIZE;
        header.width = 64;
        header.height = 32;
        header.caps2 = caps2;
        header.pixel_format.size = DdsPixelFormat::SIZE;
        header.pixel_format.flags = flags;
        header.pixel_format.four_cc = four_cc;

        let mut out = DDS_MAGIC.to_vec();
        out.extend_from_slice(header.as_bytes());
        out
    }

    #[test]
    fn test_struct_sizes() {
        assert_eq!(std::mem::size_of::<DdsHeader>(), DdsHeader::SIZE as usize);
        assert_eq!(std::mem::size_of::<DdsPixelFormat>(), DdsPixelFormat::SIZE as usize);
        assert_eq!(std::mem::size_of::<DdsHeaderDxt10>(), 20);
    }

    #[test]
    fn test_read_plain_header() {
        let mut data = header_bytes(FourCC::DXT1, DdsPixelFormat::FOURCC, 0);
        data.extend_from_slice(&[0xAB; 8]);
        let mut cursor = &data[..];

        let (header, dx10) = read_headers(&mut cursor).unwrap();
        assert_eq!(header.width(), 64);
        assert_eq!(header.height(), 32);
        assert_eq!(header.mip_count(), 1);
        assert_eq!(header.face_count(), 1);
        assert!(dx10.is_none());
        assert_eq!(cursor, &[0xAB; 8]);
    }

    #[test]
    fn test_read_dx10_header() {
        let mut data = header_bytes(FourCC::DX10, DdsPixelFormat::FOURCC, DdsHeader::CAPS2_CUBEMAP);
        let ext = DdsHeaderDxt10 {
            dxgi_format: 98,
            resource_dimension: 3,
            misc_flag: 0,
            array_size: 1,
            misc_flags2: 0,
        };
        data.extend_from_slice(ext.as_bytes());
        let mut cursor = &data[..];

        let (header, dx10) = read_headers(&mut cursor).unwrap();
        assert_eq!(header.face_count(), 6);
        assert_eq!(dx10.map(|h| h.dxgi_format()), Some(98));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_dx10_tag_without_fourcc_flag_is_ignored() {
        let data = header_bytes(FourCC::DX10, DdsPixelFormat::RGB, 0);
        let (_, dx10) = read_headers(&mut &data[..]).unwrap();
        assert!(dx10.is_none());
    }

    #[test]
    fn test_bad_magic() {
        let mut data = header_bytes(FourCC::DXT1, DdsPixelFormat::FOURCC, 0);
        data[..4].copy_from_slice(b"\x89PNG");
        let err = read_headers(&mut &data[..]).unwrap_err();
        assert!(matches!(err, Error::InvalidMagic(m) if &m == b"\x89PNG"));
    }

    #[test]
    fn test_truncated_headers() {
        let data = header_bytes(FourCC::DXT1, DdsPixelFormat::FOURCC, 0);
        let err = read_headers(&mut &data[..60]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));

        let err = read_headers(&mut &data[..2]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));

        let data = header_bytes(FourCC::DX10, DdsPixelFormat::FOURCC, 0);
        let err = read_headers(&mut &data[..]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader));
    }

    #[test]
    fn test_four_cc_display() {
        assert_eq!(FourCC::DXT5.to_string(), "DXT5");
        assert_eq!(FourCC([0x71, 0, 0, 0]).to_string(), "0x00000071");
    }
}
