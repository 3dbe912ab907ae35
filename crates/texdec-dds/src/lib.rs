//! DDS texture decoding.
//!
//! Reads a DDS container (with or without the DX10 extended header), finds
//! the requested cubemap face and mip level, and decodes it into an RGBA8
//! [`Raster`]:
//!
//! - DXT1, DXT3 and DXT5 (BC1-BC3), including the DXGI variants
//! - BC7 in all eight modes, with sRGB to linear conversion for `*_SRGB`
//! - Uncompressed formats described by channel masks
//!
//! Formats whose storage size is unknown are passed through untouched as
//! [`Decoded::Opaque`].
//!
//! # Example
//!
//! ```no_run
//! use texdec_dds::{decode_stream, DecodeRequest, Decoded};
//!
//! let data = std::fs::read("path/to/texture.dds")?;
//! let request = DecodeRequest::new().with_depth_slice(0);
//!
//! match decode_stream(&data[..], &request)? {
//!     Some(Decoded::Raster(raster)) => println!("{}x{}", raster.width(), raster.height()),
//!     Some(Decoded::Opaque(bytes)) => println!("{} bytes of unknown pixel data", bytes.len()),
//!     None => println!("not decodable"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod effect;
mod error;
mod file;
mod format;
mod header;
mod locate;
mod raster;
mod source;
mod uncompressed;

pub use decode::{decode, decode_stream, try_decode, DecodeRequest, Decoded};
pub use effect::{AlphaToGray, ChannelMask, PostEffect};
pub use error::{Error, ErrorKind, Result};
pub use file::{DdsFile, MipLevel};
pub use format::{dxgi_bits_per_pixel, BlockFormat, PixelLayout, Pitch, SurfaceFormat};
pub use header::{DdsHeader, DdsHeaderDxt10, DdsPixelFormat, FourCC};
pub use locate::CUBEMAP_FACE_GAP;
pub use raster::Raster;
pub use source::{Seekable, SliceSource, Streaming};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
