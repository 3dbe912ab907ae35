//! Texdec - block-compressed texture decoding library.
//!
//! This crate provides a unified interface to the texdec crates.
//!
//! # Crates
//!
//! - [`texdec_common`] - Common utilities (binary reading, stream helpers)
//! - [`texdec_bcn`] - Per-block decoders (BC1, BC2, BC3, BC7)
//! - [`texdec_dds`] - DDS container parsing and RGBA8 decoding
//!
//! # Example
//!
//! ```no_run
//! use texdec::prelude::*;
//!
//! let file = std::fs::File::open("texture.dds")?;
//! let request = DecodeRequest::new().with_ignore_alpha(true);
//!
//! if let Some(Decoded::Raster(raster)) = decode(std::io::BufReader::new(file), &request)? {
//!     println!("{}x{}", raster.width(), raster.height());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use texdec_bcn as bcn;
pub use texdec_common as common;
pub use texdec_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use texdec_bcn::{ColorSpace, DecodedBlock, Rgba8};
    pub use texdec_common::{BinaryReader, ReadExt};
    pub use texdec_dds::{
        decode, decode_stream, try_decode, AlphaToGray, BlockFormat, ChannelMask, DdsFile,
        DecodeRequest, Decoded, ErrorKind, PostEffect, Raster,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
