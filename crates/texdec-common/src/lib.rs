//! Common utilities for texdec.
//!
//! This crate provides the binary reading primitives shared by the texdec crates:
//!
//! - [`BinaryReader`] - Zero-copy little-endian reading from byte slices
//! - [`ReadExt`] - Fixed-layout struct reading and byte skipping for streams

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::{BinaryReader, ReadExt};
