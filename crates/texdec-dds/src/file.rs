//! Parsed DDS file headers.

use std::io::Read;

use crate::format::{self, Pitch, SurfaceFormat};
use crate::header::{read_headers, DdsHeader, DdsHeaderDxt10};
use crate::{Error, Raster, Result};

/// Headers of a DDS file together with its resolved format.
#[derive(Debug, Clone, Copy)]
pub struct DdsFile {
    header: DdsHeader,
    dx10: Option<DdsHeaderDxt10>,
    format: Option<SurfaceFormat>,
}

/// One stored surface in the face/mip chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipLevel {
    /// Level index, 0 is the largest.
    pub index: u32,
    pub width: u32,
    pub height: u32,
    /// Stored byte size.
    pub size: usize,
}

impl DdsFile {
    /// Read the headers from `reader`, leaving it at the start of pixel data.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let (header, dx10) = read_headers(reader)?;
        if header.width() == 0 || header.height() == 0 {
            return Err(Error::InvalidHeader(format!(
                "zero-sized surface {}x{}",
                header.width(),
                header.height()
            )));
        }

        let (width, height) = (header.width(), header.height());
        let full_chain = u32::BITS - width.max(height).leading_zeros();
        if header.mip_count() > full_chain {
            return Err(Error::InvalidHeader(format!(
                "{} mip levels for a {width}x{height} surface",
                header.mip_count()
            )));
        }

        let format = format::resolve(&header.pixel_format, dx10.as_ref());
        if let Some(format) = &format {
            // Every smaller level is no larger than the base level.
            let fits = format.pitch.level_size(width, height).is_some()
                && Raster::byte_len(width, height).is_some();
            if !fits {
                return Err(Error::InvalidHeader(format!(
                    "{width}x{height} surface is too large"
                )));
            }
        }

        Ok(Self {
            header,
            dx10,
            format,
        })
    }

    pub fn header(&self) -> &DdsHeader {
        &self.header
    }

    pub fn dx10_header(&self) -> Option<&DdsHeaderDxt10> {
        self.dx10.as_ref()
    }

    /// Resolved format, or `None` if the pixel data can only be passed through.
    pub fn format(&self) -> Option<&SurfaceFormat> {
        self.format.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    pub fn mip_count(&self) -> u32 {
        self.header.mip_count()
    }

    pub fn face_count(&self) -> u32 {
        self.header.face_count()
    }

    /// Bytes before the pixel data: magic, header and optional DX10 header.
    pub fn header_len(&self) -> usize {
        let base = crate::DDS_MAGIC.len() + DdsHeader::SIZE as usize;
        if self.dx10.is_some() {
            base + std::mem::size_of::<DdsHeaderDxt10>()
        } else {
            base
        }
    }

    /// The mip levels stored for each face, largest first.
    ///
    /// Empty when the format could not be resolved.
    pub fn mip_chain(&self) -> Vec<MipLevel> {
        match self.format {
            Some(format) => self.levels(format.pitch).collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn levels(&self, pitch: Pitch) -> impl Iterator<Item = MipLevel> {
        let (base_w, base_h) = (self.width(), self.height());
        (0..self.mip_count()).map(move |index| {
            let width = base_w.checked_shr(index).unwrap_or(0).max(1);
            let height = base_h.checked_shr(index).unwrap_or(0).max(1);
            MipLevel {
                index,
                width,
                height,
                size: pitch.level_size(width, height).unwrap_or(usize::MAX),
            }
        })
    }
}
