//! Single-channel luma color type

use super::rgb_float::RgbFloat;
use super::rgb_int::RgbInt;
use super::space::{Channels, ColorSpace, ColorSpaceKind};

/// Rec. 709 luma coefficients, applied to gamma-encoded channels.
///
/// The one luma formula used everywhere in the crate, whether the source
/// is integer or floating point RGB.
pub(crate) const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Luma of an RGB channel vector, in the same units as the input.
#[inline]
pub(crate) fn luma(rgb: Channels) -> f32 {
    rgb[0] * LUMA_WEIGHTS[0] + rgb[1] * LUMA_WEIGHTS[1] + rgb[2] * LUMA_WEIGHTS[2]
}

/// A gray level in 0.0..=1.0.
///
/// Converting from RGB keeps only the luma; converting back produces a
/// neutral gray with all three channels equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grayscale {
    /// Luma (0.0..=1.0)
    pub value: f32,
}

impl Grayscale {
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

impl From<RgbFloat> for Grayscale {
    fn from(rgb: RgbFloat) -> Self {
        Self::new(luma([rgb.r, rgb.g, rgb.b]))
    }
}

impl From<RgbInt> for Grayscale {
    fn from(rgb: RgbInt) -> Self {
        Self::from(RgbFloat::from(rgb))
    }
}

impl From<Grayscale> for RgbFloat {
    fn from(gray: Grayscale) -> Self {
        RgbFloat::new(gray.value, gray.value, gray.value)
    }
}

impl ColorSpace for Grayscale {
    const KIND: ColorSpaceKind = ColorSpaceKind::Grayscale;

    fn from_rgb(rgb: RgbInt) -> Self {
        Self::from(rgb)
    }

    fn to_rgb(&self) -> RgbInt {
        RgbInt::from(RgbFloat::from(*self))
    }

    fn from_rgb_float(rgb: RgbFloat) -> Self {
        Self::from(rgb)
    }

    fn to_rgb_float(&self) -> RgbFloat {
        RgbFloat::from(*self)
    }

    #[inline]
    fn channels(&self) -> Channels {
        [self.value, 0.0, 0.0]
    }

    #[inline]
    fn from_channels(channels: Channels) -> Self {
        Self::new(channels[0])
    }

    #[inline]
    fn distance_sq(&self, other: &Self, _extra_weight: f32) -> f32 {
        let diff = self.value - other.value;
        diff * diff
    }

    #[inline]
    fn saturate_channels(&self) -> Self {
        Self::new(self.value.clamp(0.0, 1.0))
    }

    #[inline]
    fn brightness(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum: f32 = LUMA_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_integer_and_float_paths_agree() {
        // Both conversion paths share one formula, so they must match exactly
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 90), (255, 0, 128)] {
            let from_int = Grayscale::from(RgbInt::new(r, g, b));
            let from_float = Grayscale::from(RgbFloat::from_u8(r, g, b));
            assert_eq!(from_int, from_float);
        }
    }

    #[test]
    fn test_to_rgb_is_neutral() {
        let gray = Grayscale::new(0.5);
        assert_eq!(gray.to_rgb(), RgbInt::new(128, 128, 128));
    }

    #[test]
    fn test_gray_round_trip_for_neutral_input() {
        for i in 0..=255u8 {
            let back = Grayscale::from_rgb(RgbInt::new(i, i, i)).to_rgb();
            assert!(
                (back.r as i32 - i as i32).abs() <= 1,
                "gray {i} came back as {}",
                back.r
            );
        }
    }

    #[test]
    fn test_saturate_and_distance() {
        assert_eq!(Grayscale::new(1.4).saturate_channels(), Grayscale::new(1.0));
        assert_eq!(Grayscale::new(-0.3).saturate_channels(), Grayscale::new(0.0));
        let d = Grayscale::new(0.25).distance_sq(&Grayscale::new(0.75), 5.0);
        assert!((d - 0.25).abs() < 1e-6);
    }
}
