//! Post-decode raster effects.

use crate::Raster;

/// Transformation applied to a finished raster before it is returned.
pub trait PostEffect: Send + Sync {
    fn apply(&self, raster: &mut Raster);
}

impl<F> PostEffect for F
where
    F: Fn(&mut Raster) + Send + Sync,
{
    fn apply(&self, raster: &mut Raster) {
        self(raster)
    }
}

/// Keeps the selected channels. Dropped color channels become 0, a dropped
/// alpha channel becomes 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMask {
    keep: [bool; 4],
}

impl ChannelMask {
    /// Color only, fully opaque.
    pub const RGB: Self = Self::new(true, true, true, false);

    pub const fn new(red: bool, green: bool, blue: bool, alpha: bool) -> Self {
        Self {
            keep: [red, green, blue, alpha],
        }
    }
}

impl PostEffect for ChannelMask {
    fn apply(&self, raster: &mut Raster) {
        for px in raster.pixels_mut() {
            for (channel, keep) in self.keep.iter().enumerate() {
                if !keep {
                    px[channel] = if channel == 3 { 255 } else { 0 };
                }
            }
        }
    }
}

/// Replaces each pixel with an opaque gray of its alpha value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphaToGray;

impl PostEffect for AlphaToGray {
    fn apply(&self, raster: &mut Raster) {
        for px in raster.pixels_mut() {
            let a = px[3];
            px.copy_from_slice(&[a, a, a, 255]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        Raster::from_vec(2, 1, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap()
    }

    #[test]
    fn test_channel_mask() {
        let mut raster = sample();
        ChannelMask::RGB.apply(&mut raster);
        assert_eq!(raster.as_bytes(), &[10, 20, 30, 255, 50, 60, 70, 255]);

        let mut raster = sample();
        ChannelMask::new(false, true, false, true).apply(&mut raster);
        assert_eq!(raster.as_bytes(), &[0, 20, 0, 40, 0, 60, 0, 80]);
    }

    #[test]
    fn test_alpha_to_gray() {
        let mut raster = sample();
        AlphaToGray.apply(&mut raster);
        assert_eq!(raster.pixel(1, 0), Some([80, 80, 80, 255]));
    }

    #[test]
    fn test_closure_effect() {
        let invert = |raster: &mut Raster| {
            for px in raster.pixels_mut() {
                px[0] = 255 - px[0];
            }
        };
        let mut raster = sample();
        invert.apply(&mut raster);
        assert_eq!(raster.pixel(0, 0), Some([245, 20, 30, 40]));
    }
}
