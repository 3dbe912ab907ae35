//! RGB565 endpoint expansion shared by the DXT decoders.

/// Expand a packed RGB565 color to 8 bits per channel.
///
/// Each field is rescaled as `t = v * 255 + half; out = ((t >> k) + t) >> k`,
/// with `k = 5` for the red and blue fields and `k = 6` for green.
#[inline]
pub fn rgb565_to_888(color: u16) -> [u8; 3] {
    let r = (color >> 11) & 0x1F;
    let g = (color >> 5) & 0x3F;
    let b = color & 0x1F;
    [expand5(r), expand6(g), expand5(b)]
}

#[inline]
fn expand5(v: u16) -> u8 {
    let t = u32::from(v) * 255 + 16;
    (((t >> 5) + t) >> 5) as u8
}

#[inline]
fn expand6(v: u16) -> u8 {
    let t = u32::from(v) * 255 + 32;
    (((t >> 6) + t) >> 6) as u8
}

/// Pack an 8-bit-per-channel color into RGB565 with rounding.
///
/// Only used to build fixtures; decoding never needs it.
#[cfg(test)]
pub(crate) fn rgb888_to_565(rgb: [u8; 3]) -> u16 {
    let r = (u32::from(rgb[0]) * 31 + 127) / 255;
    let g = (u32::from(rgb[1]) * 63 + 127) / 255;
    let b = (u32::from(rgb[2]) * 31 + 127) / 255;
    ((r << 11) | (g << 5) | b) as u16
}
