//! Floating point sRGB color type

use super::grayscale::luma;
use super::rgb_int::RgbInt;
use super::space::{norm_sq, sub, Channels, ColorSpace, ColorSpaceKind};

/// A gamma-encoded sRGB color with channels in 0.0..=1.0.
///
/// Values outside the range are allowed as intermediates (accumulated
/// dithering error) and are brought back with
/// [`saturate_channels()`](ColorSpace::saturate_channels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbFloat {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
}

impl RgbFloat {
    /// Create a new color from float channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use palette_dither::RgbFloat;
    /// let white = RgbFloat::from_u8(255, 255, 255);
    /// assert_eq!(white.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from(RgbInt::new(r, g, b))
    }
}

impl From<RgbInt> for RgbFloat {
    fn from(rgb: RgbInt) -> Self {
        Self {
            r: rgb.r as f32 / 255.0,
            g: rgb.g as f32 / 255.0,
            b: rgb.b as f32 / 255.0,
        }
    }
}

impl ColorSpace for RgbFloat {
    const KIND: ColorSpaceKind = ColorSpaceKind::RgbFloat;

    fn from_rgb(rgb: RgbInt) -> Self {
        Self::from(rgb)
    }

    fn to_rgb(&self) -> RgbInt {
        RgbInt::from(*self)
    }

    #[inline]
    fn from_rgb_float(rgb: RgbFloat) -> Self {
        rgb
    }

    #[inline]
    fn to_rgb_float(&self) -> RgbFloat {
        *self
    }

    #[inline]
    fn channels(&self) -> Channels {
        [self.r, self.g, self.b]
    }

    #[inline]
    fn from_channels(channels: Channels) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    #[inline]
    fn distance_sq(&self, other: &Self, _extra_weight: f32) -> f32 {
        norm_sq(sub(self.channels(), other.channels()))
    }

    #[inline]
    fn saturate_channels(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    fn brightness(&self) -> f32 {
        luma(self.channels())
    }
}
