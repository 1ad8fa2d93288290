//! 8-bit sRGB color type

use super::grayscale::luma;
use super::rgb_float::RgbFloat;
use super::space::{Channels, ColorSpace, ColorSpaceKind};

/// An 8-bit sRGB color, the representation stored in pixel buffers.
///
/// As a [`ColorSpace`] its channel vector is in 0.0..=255.0 units, so
/// distances are in squared 8-bit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbInt {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl RgbInt {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0x00BBGGRR` (red in the low byte).
    ///
    /// # Example
    /// ```
    /// use palette_dither::RgbInt;
    /// assert_eq!(RgbInt::from_packed(0x0000_00FF), RgbInt::new(255, 0, 0));
    /// ```
    #[inline]
    pub const fn from_packed(rgb: u32) -> Self {
        Self {
            r: (rgb & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: ((rgb >> 16) & 0xFF) as u8,
        }
    }

    /// Pack into `0x00BBGGRR` (red in the low byte).
    #[inline]
    pub const fn packed(self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16
    }

    /// Channels as a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl From<RgbFloat> for RgbInt {
    /// Scale to 0..=255, rounding and saturating each channel.
    fn from(rgb: RgbFloat) -> Self {
        Self {
            r: to_byte(rgb.r * 255.0),
            g: to_byte(rgb.g * 255.0),
            b: to_byte(rgb.b * 255.0),
        }
    }
}

impl From<[u8; 3]> for RgbInt {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl ColorSpace for RgbInt {
    const KIND: ColorSpaceKind = ColorSpaceKind::RgbInt;

    #[inline]
    fn from_rgb(rgb: RgbInt) -> Self {
        rgb
    }

    #[inline]
    fn to_rgb(&self) -> RgbInt {
        *self
    }

    fn from_rgb_float(rgb: RgbFloat) -> Self {
        Self::from(rgb)
    }

    fn to_rgb_float(&self) -> RgbFloat {
        RgbFloat::from(*self)
    }

    #[inline]
    fn channels(&self) -> Channels {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    #[inline]
    fn from_channels(channels: Channels) -> Self {
        Self {
            r: to_byte(channels[0]),
            g: to_byte(channels[1]),
            b: to_byte(channels[2]),
        }
    }

    #[inline]
    fn distance_sq(&self, other: &Self, _extra_weight: f32) -> f32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as f32
    }

    #[inline]
    fn saturate_channels(&self) -> Self {
        *self
    }

    fn brightness(&self) -> f32 {
        luma(self.channels()) / 255.0
    }
}
