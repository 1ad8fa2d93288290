//! CIE L*a*b* color type

use super::rgb_float::RgbFloat;
use super::rgb_int::RgbInt;
use super::space::{Channels, ColorSpace, ColorSpaceKind};
use super::xyz::{Xyz, REFERENCE_WHITE};

/// Below this normalized value the cube root is replaced by a linear segment.
const EPSILON: f32 = 0.008856;
const KAPPA_SLOPE: f32 = 7.787;
const OFFSET: f32 = 16.0 / 116.0;

/// Range of each axis reachable from the sRGB gamut.
const L_RANGE: (f32, f32) = (0.0, 100.0);
const A_RANGE: (f32, f32) = (-86.1846, 98.2542);
const B_RANGE: (f32, f32) = (-107.864, 94.4825);

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn f_inv(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}

/// A CIE L*a*b* color relative to D65.
///
/// `l` spans 0..=100; `a` and `b` are signed opponent axes. Distances can
/// emphasize lightness through the `extra_weight` argument of
/// [`distance_sq()`](ColorSpace::distance_sq), which is how the ditherer
/// keeps gradients from breaking up into hue noise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cielab {
    /// Lightness (0.0..=100.0)
    pub l: f32,
    /// Green (-) to red (+)
    pub a: f32,
    /// Blue (-) to yellow (+)
    pub b: f32,
}

impl Cielab {
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

impl From<Xyz> for Cielab {
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / REFERENCE_WHITE[0]);
        let fy = f(xyz.y / REFERENCE_WHITE[1]);
        let fz = f(xyz.z / REFERENCE_WHITE[2]);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Cielab> for Xyz {
    fn from(lab: Cielab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;
        Xyz::new(
            f_inv(fx) * REFERENCE_WHITE[0],
            f_inv(fy) * REFERENCE_WHITE[1],
            f_inv(fz) * REFERENCE_WHITE[2],
        )
    }
}

impl From<RgbFloat> for Cielab {
    fn from(rgb: RgbFloat) -> Self {
        Self::from(Xyz::from(rgb))
    }
}

impl From<Cielab> for RgbFloat {
    fn from(lab: Cielab) -> Self {
        RgbFloat::from(Xyz::from(lab))
    }
}

impl From<RgbInt> for Cielab {
    fn from(rgb: RgbInt) -> Self {
        Self::from(RgbFloat::from(rgb))
    }
}

impl ColorSpace for Cielab {
    const KIND: ColorSpaceKind = ColorSpaceKind::Cielab;

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
        [self.l, self.a, self.b]
    }

    #[inline]
    fn from_channels(channels: Channels) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// `(dL * extra_weight)^2 + da^2 + db^2`
    #[inline]
    fn distance_sq(&self, other: &Self, extra_weight: f32) -> f32 {
        let dl = (self.l - other.l) * extra_weight;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    fn saturate_channels(&self) -> Self {
        Self {
            l: self.l.clamp(L_RANGE.0, L_RANGE.1),
            a: self.a.clamp(A_RANGE.0, A_RANGE.1),
            b: self.b.clamp(B_RANGE.0, B_RANGE.1),
        }
    }

    #[inline]
    fn brightness(&self) -> f32 {
        self.l / 100.0
    }
}
