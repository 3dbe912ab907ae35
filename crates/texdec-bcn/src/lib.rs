//! Block-compressed texture decoders.
//!
//! Every decoder in this crate turns one compressed block into a 4×4 tile of
//! RGBA8 pixels, stored row-major as a [`DecodedBlock`]:
//!
//! - [`bc1`] - DXT1: 8 bytes, two RGB565 endpoints, optional 1-bit alpha
//! - [`bc2`] - DXT3: 8 bytes of explicit 4-bit alpha + a DXT1 color block
//! - [`bc3`] - DXT5: interpolated 8-bit alpha + a DXT1 color block
//! - [`bc7`] - BC7: 16 bytes, eight modes with partitions, p-bits and rotation
//!
//! Decoders never look at image dimensions; clipping partial edge tiles is
//! the caller's job.
//!
//! # Example
//!
//! ```
//! use texdec_bcn::bc1;
//!
//! // c0 = white, c1 = black, every index 0.
//! let block = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
//! let tile = bc1::decode_block(&block);
//!
//! assert!(tile.iter().all(|px| *px == [255, 255, 255, 255]));
//! ```

mod error;

pub mod bc1;
pub mod bc2;
pub mod bc3;
pub mod bc7;
pub mod color;
pub mod srgb;

pub use error::{Error, Result};

/// Width and height of a compressed block in pixels.
pub const BLOCK_DIM: usize = 4;

/// Number of pixels in a compressed block.
pub const BLOCK_PIXELS: usize = BLOCK_DIM * BLOCK_DIM;

/// One RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// A decoded 4×4 tile, row-major.
pub type DecodedBlock = [Rgba8; BLOCK_PIXELS];

/// Transfer function of a block's stored color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Values are written out as stored.
    #[default]
    Linear,
    /// Values are sRGB encoded and get converted to linear after decoding.
    Srgb,
}
