//! The [`ColorSpace`] trait shared by every representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{RgbFloat, RgbInt};

/// Component vector used for arithmetic on colors.
///
/// Three-component spaces use all slots in declaration order.
/// [`Grayscale`](super::Grayscale) uses the first slot and leaves the others at zero.
pub type Channels = [f32; 3];

/// Weight passed to [`ColorSpace::distance_sq`] when no lightness emphasis
/// is wanted.
pub const DEFAULT_DISTANCE_WEIGHT: f32 = 1.0;

/// Runtime tag naming one of the five representations.
///
/// Used where the representation is picked from configuration rather than
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpaceKind {
    /// 8-bit integer sRGB.
    RgbInt,
    /// Floating point sRGB in 0.0..=1.0.
    RgbFloat,
    /// CIE XYZ (D65).
    Xyz,
    /// CIE L*a*b*.
    #[default]
    Cielab,
    /// Luma only.
    Grayscale,
}

impl ColorSpaceKind {
    /// All representations, in declaration order.
    pub const ALL: [ColorSpaceKind; 5] = [
        ColorSpaceKind::RgbInt,
        ColorSpaceKind::RgbFloat,
        ColorSpaceKind::Xyz,
        ColorSpaceKind::Cielab,
        ColorSpaceKind::Grayscale,
    ];

    /// Configuration name of the representation.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpaceKind::RgbInt => "rgb_int",
            ColorSpaceKind::RgbFloat => "rgb_float",
            ColorSpaceKind::Xyz => "xyz",
            ColorSpaceKind::Cielab => "cielab",
            ColorSpaceKind::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for ColorSpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities every color representation provides.
///
/// The generic algorithms only ever touch colors through this trait:
/// conversion to and from 8-bit RGB, a channel vector for averaging and
/// error accumulation, a squared distance, clamping to the valid gamut, and
/// a brightness scalar used to order k-means seeds.
pub trait ColorSpace: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Runtime tag of this representation.
    const KIND: ColorSpaceKind;

    /// Convert an 8-bit sRGB triple into this representation.
    fn from_rgb(rgb: RgbInt) -> Self;

    /// Convert back to 8-bit sRGB, rounding and saturating.
    fn to_rgb(&self) -> RgbInt;

    /// Convert from floating point sRGB (the canonical conversion hop).
    fn from_rgb_float(rgb: RgbFloat) -> Self;

    /// Convert to floating point sRGB (the canonical conversion hop).
    fn to_rgb_float(&self) -> RgbFloat;

    /// Component vector of this color.
    fn channels(&self) -> Channels;

    /// Build a color from a component vector.
    ///
    /// Representations with integer storage round and saturate here.
    fn from_channels(channels: Channels) -> Self;

    /// Squared distance to `other`.
    ///
    /// `extra_weight` scales the lightness difference before squaring in
    /// representations that separate lightness ([`Cielab`](super::Cielab)); every other
    /// representation ignores it.
    fn distance_sq(&self, other: &Self, extra_weight: f32) -> f32;

    /// Clamp every component into this representation's valid range.
    fn saturate_channels(&self) -> Self;

    /// A brightness scalar in roughly 0.0..=1.0.
    fn brightness(&self) -> f32;
}

/// Convert a color between any two representations.
///
/// Goes through [`RgbFloat`], which is lossless between floating point
/// representations inside the sRGB gamut. For adjacent pairs the direct
/// `From` implementations avoid the hop (e.g. `Cielab::from(xyz)`).
///
/// # Example
///
/// ```
/// use palette_dither::{convert, Cielab, Grayscale, RgbInt};
///
/// let lab: Cielab = convert(RgbInt::new(255, 255, 255));
/// assert!((lab.l - 100.0).abs() < 0.01);
///
/// let gray: Grayscale = convert(lab);
/// assert!((gray.value - 1.0).abs() < 1e-3);
/// ```
pub fn convert<A: ColorSpace, B: ColorSpace>(value: A) -> B {
    B::from_rgb_float(value.to_rgb_float())
}

#[inline]
pub(crate) fn add(a: Channels, b: Channels) -> Channels {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub(crate) fn sub(a: Channels, b: Channels) -> Channels {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub(crate) fn scale(a: Channels, factor: f32) -> Channels {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}

#[inline]
pub(crate) fn norm_sq(a: Channels) -> f32 {
    a[0] * a[0] + a[1] * a[1] + a[2] * a[2]
}
