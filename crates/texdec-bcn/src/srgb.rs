//! sRGB to linear transfer for 8-bit channels.

/// Convert one sRGB-encoded channel to linear, rounding to the nearest byte.
///
/// Uses the piecewise sRGB curve: `s / 12.92` up to 0.04045, otherwise
/// `((s + 0.055) / 1.055)^2.4`, on the value normalized to 0..1.
#[inline]
pub fn srgb_to_linear(value: u8) -> u8 {
    let s = f32::from(value) / 255.0;
    let linear = if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    };
    (linear * 255.0).round().clamp(0.0, 255.0) as u8
}
