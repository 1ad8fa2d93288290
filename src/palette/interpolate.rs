//! Evenly spaced palettes between two colors.

use crate::color::{add, scale, sub, ColorSpace};
use crate::error::QuantizeError;

use super::Palette;

/// `count` colors spaced evenly on the straight line from `first` to
/// `second` in `S`'s channel space, both endpoints included.
///
/// The line is straight in the chosen space, so the same endpoints give
/// different ramps in, say, [`RgbFloat`](crate::RgbFloat) and
/// [`Cielab`](crate::Cielab).
///
/// # Errors
///
/// Returns [`QuantizeError::InvalidInterpolationCount`] if `count < 2`.
///
/// # Example
///
/// ```
/// use palette_dither::{interpolate, RgbInt};
///
/// let ramp = interpolate(RgbInt::new(0, 0, 0), RgbInt::new(255, 0, 0), 3).unwrap();
/// assert_eq!(ramp.entries()[1], RgbInt::new(128, 0, 0));
/// ```
pub fn interpolate<S: ColorSpace>(
    first: S,
    second: S,
    count: usize,
) -> Result<Palette<S>, QuantizeError> {
    if count < 2 {
        return Err(QuantizeError::InvalidInterpolationCount { count });
    }

    let start = first.channels();
    let delta = sub(second.channels(), start);
    let last = (count - 1) as f32;

    Ok((0..count)
        .map(|i| S::from_channels(add(start, scale(delta, i as f32 / last))))
        .collect())
}
