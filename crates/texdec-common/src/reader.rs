//! Binary readers for byte slices and streams.
//!
//! [`BinaryReader`] is a cursor-like type that reads little-endian values
//! from a byte slice without copying. [`ReadExt`] adds fixed-layout struct
//! reading and skipping to any [`Read`] stream.

use std::io::{self, Read};

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// # Example
///
/// ```
/// use texdec_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// assert_eq!(reader.read_u16().unwrap(), 0x0605);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Create a new reader starting at a specific position.
    #[inline]
    pub const fn new_at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian 24-bit value into the low bits of a u32.
    #[inline]
    pub fn read_u24(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(3)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read an unsigned little-endian value of 1 to 4 bytes.
    pub fn read_uint(&mut self, bytes: usize) -> Result<u32> {
        match bytes {
            1 => self.read_u8().map(u32::from),
            2 => self.read_u16().map(u32::from),
            3 => self.read_u24(),
            4 => self.read_u32(),
            _ => Err(Error::UnexpectedEof {
                needed: bytes,
                available: self.remaining().min(4),
            }),
        }
    }
}

/// Extension trait for reading binary data from streams.
///
/// Works on any [`Read`], including non-seekable sources such as
/// decompression streams.
pub trait ReadExt: Read {
    /// Read a fixed-layout structure from the stream.
    fn read_struct<T: FromBytes>(&mut self) -> io::Result<T> {
        let size = std::mem::size_of::<T>();
        let mut bytes = vec![0u8; size];
        self.read_exact(&mut bytes)?;
        T::read_from_bytes(&bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{:?}", e)))
    }

    /// Read exactly `count` bytes into a new buffer.
    ///
    /// The buffer grows with the data actually read, so a large `count` on a
    /// short stream fails with `UnexpectedEof` instead of allocating `count`
    /// bytes up front.
    fn read_vec(&mut self, count: usize) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Read::take(&mut *self, count as u64).read_to_end(&mut bytes)?;
        if bytes.len() < count {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("needed {count} bytes, stream ended after {}", bytes.len()),
            ));
        }
        Ok(bytes)
    }

    /// Expect specific magic bytes at the current position.
    fn expect_magic(&mut self, expected: &[u8]) -> Result<()> {
        let actual = self.read_vec(expected.len())?;
        if actual != expected {
            return Err(Error::InvalidMagic {
                expected: expected.to_vec(),
                actual,
            });
        }
        Ok(())
    }

    /// Discard up to `count` bytes, returning how many were actually consumed.
    ///
    /// Reaching the end of the stream early is not an error.
    fn skip_bytes(&mut self, count: u64) -> io::Result<u64> {
        let mut limited = Read::take(&mut *self, count);
        io::copy(&mut limited, &mut io::sink())
    }
}

impl<R: Read + ?Sized> ReadExt for R {}
