//! Pixel data sources.
//!
//! The locator only moves forward through the file. [`Seekable`] jumps over
//! unwanted surfaces, [`Streaming`] reads and discards them so that
//! decompressors and pipes work too.

use std::io::{self, Read, Seek, SeekFrom};

use texdec_common::ReadExt;

/// A forward-only byte source that can skip bytes it does not need.
pub trait SliceSource: Read {
    /// Move past `count` bytes. Reaching the end of the stream is not an error;
    /// the next read reports it.
    fn skip(&mut self, count: u64) -> io::Result<()>;
}

impl<S: SliceSource + ?Sized> SliceSource for &mut S {
    fn skip(&mut self, count: u64) -> io::Result<()> {
        (**self).skip(count)
    }
}

/// Source backed by a seekable reader.
#[derive(Debug)]
pub struct Seekable<R>(pub R);

impl<R: Read> Read for Seekable<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R: Read + Seek> SliceSource for Seekable<R> {
    fn skip(&mut self, count: u64) -> io::Result<()> {
        let offset = i64::try_from(count)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "skip offset too large"))?;
        self.0.seek(SeekFrom::Current(offset))?;
        Ok(())
    }
}

/// Source backed by a reader that can only be consumed.
#[derive(Debug)]
pub struct Streaming<R>(pub R);

impl<R: Read> Read for Streaming<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R: Read> SliceSource for Streaming<R> {
    fn skip(&mut self, count: u64) -> io::Result<()> {
        self.0.skip_bytes(count)?;
        Ok(())
    }
}
