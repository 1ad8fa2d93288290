//! CIE 1931 XYZ color type (D65)

use super::rgb_float::RgbFloat;
use super::rgb_int::RgbInt;
use super::space::{norm_sq, sub, Channels, ColorSpace, ColorSpaceKind};

/// D65 reference white, scaled so Y = 100.
pub(crate) const REFERENCE_WHITE: [f32; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB -> XYZ, rows X, Y, Z.
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ -> linear sRGB, rows R, G, B.
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Remove the sRGB transfer curve from a gamma-encoded channel.
#[inline]
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply the sRGB transfer curve to a linear channel.
#[inline]
pub(crate) fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn mul(m: &[[f32; 3]; 3], v: Channels) -> Channels {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A CIE XYZ color relative to D65, with Y in 0.0..=100.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<RgbFloat> for Xyz {
    fn from(rgb: RgbFloat) -> Self {
        let linear = [
            srgb_to_linear(rgb.r),
            srgb_to_linear(rgb.g),
            srgb_to_linear(rgb.b),
        ];
        let [x, y, z] = mul(&RGB_TO_XYZ, linear);
        Self::new(x * 100.0, y * 100.0, z * 100.0)
    }
}

impl From<Xyz> for RgbFloat {
    fn from(xyz: Xyz) -> Self {
        let [r, g, b] = mul(&XYZ_TO_RGB, [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0]);
        RgbFloat::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
            .saturate_channels()
    }
}

impl From<RgbInt> for Xyz {
    fn from(rgb: RgbInt) -> Self {
        Self::from(RgbFloat::from(rgb))
    }
}

impl ColorSpace for Xyz {
    const KIND: ColorSpaceKind = ColorSpaceKind::Xyz;

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
        [self.x, self.y, self.z]
    }

    #[inline]
    fn from_channels(channels: Channels) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    #[inline]
    fn distance_sq(&self, other: &Self, _extra_weight: f32) -> f32 {
        norm_sq(sub(self.channels(), other.channels()))
    }

    fn saturate_channels(&self) -> Self {
        Self {
            x: self.x.clamp(0.0, REFERENCE_WHITE[0]),
            y: self.y.clamp(0.0, REFERENCE_WHITE[1]),
            z: self.z.clamp(0.0, REFERENCE_WHITE[2]),
        }
    }

    #[inline]
    fn brightness(&self) -> f32 {
        self.y / 100.0
    }
}
