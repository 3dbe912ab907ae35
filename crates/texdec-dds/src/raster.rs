//! RGBA8 output surface.

use texdec_bcn::{DecodedBlock, Rgba8, BLOCK_DIM};

/// A decoded image: `width * height` RGBA8 pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent black raster.
    ///
    /// # Panics
    ///
    /// Panics if [`Raster::byte_len`] is `None` for these dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let len = Self::byte_len(width, height).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Byte length of a `width` x `height` raster, or `None` if a buffer
    /// that large cannot exist.
    pub fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)
            .filter(|&len| len <= isize::MAX as usize)
    }

    /// Wrap existing RGBA8 data. Returns `None` if the length does not match.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (Self::byte_len(width, height) == Some(pixels.len())).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(px)
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba8) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.pixels[offset..offset + 4].copy_from_slice(&value);
        }
    }

    /// Iterate over all pixels mutably.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.pixels.chunks_exact_mut(4)
    }

    /// Set every alpha value to 255.
    pub fn force_opaque(&mut self) {
        for px in self.pixels_mut() {
            px[3] = 255;
        }
    }

    /// Write a decoded tile whose top-left pixel is at block `(bx, by)`.
    /// Pixels past the right or bottom edge are dropped.
    pub(crate) fn write_block(&mut self, bx: u32, by: u32, tile: &DecodedBlock) {
        let x0 = bx * BLOCK_DIM as u32;
        let y0 = by * BLOCK_DIM as u32;
        if x0 >= self.width || y0 >= self.height {
            return;
        }
        let cols = (self.width - x0).min(BLOCK_DIM as u32) as usize;
        let rows = (self.height - y0).min(BLOCK_DIM as u32);

        for row in 0..rows {
            let start = self.offset(x0, y0 + row);
            let src = &tile[row as usize * BLOCK_DIM..][..cols];
            for (dst, px) in self.pixels[start..start + cols * 4]
                .chunks_exact_mut(4)
                .zip(src)
            {
                dst.copy_from_slice(px);
            }
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}
