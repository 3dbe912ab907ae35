//! Mask-described uncompressed pixels.

use texdec_common::BinaryReader;

use crate::format::PixelLayout;
use crate::{Raster, Result};

/// Decode a level of uncompressed pixels into `raster`.
pub(crate) fn decode(data: &[u8], layout: &PixelLayout, raster: &mut Raster) -> Result<()> {
    let bytes_per_pixel = layout.bytes_per_pixel as usize;
    let row_pitch = raster.width() as usize * bytes_per_pixel;
    let channels = layout.masks.map(Channel::new);

    for y in 0..raster.height() {
        let mut reader = BinaryReader::new_at(data, y as usize * row_pitch);
        for x in 0..raster.width() {
            let value = reader.read_uint(bytes_per_pixel)?;
            let [r, g, b, a] = channels.map(|c| c.map(|c| c.extract(value)));
            let px = if layout.luminance {
                [r.unwrap_or(0); 3]
            } else {
                [r.unwrap_or(0), g.unwrap_or(0), b.unwrap_or(0)]
            };
            raster.set_pixel(x, y, [px[0], px[1], px[2], a.unwrap_or(255)]);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Channel {
    mask: u32,
    shift: u32,
    max: u32,
}

impl Channel {
    fn new(mask: u32) -> Option<Self> {
        if mask == 0 {
            return None;
        }
        let shift = mask.trailing_zeros();
        Some(Self {
            mask,
            shift,
            max: mask >> shift,
        })
    }

    /// Scale the masked bits to 0..=255, rounding to nearest.
    fn extract(self, value: u32) -> u8 {
        let v = u64::from((value & self.mask) >> self.shift);
        let max = u64::from(self.max);
        ((v * 255 + max / 2) / max) as u8
    }
}
