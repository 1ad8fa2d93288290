//! Fixed N-level grayscale Floyd-Steinberg.
//!
//! No histogram or palette: every pixel's luma is rounded to one of `N`
//! evenly spaced gray levels. Instead of a padded working buffer, each pixel
//! picks one of eight weight sets depending on which of its neighbors exist,
//! so no error is sent outside the image.

use crate::buffer::{PixelBuffer, PixelView};
use crate::color::{Grayscale, RgbInt};
use crate::error::QuantizeError;

/// Taps relative to the scan direction: ahead, behind-below, below,
/// ahead-below.
const OFFSETS: [(isize, usize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Weight sets indexed by `has_behind * 4 + has_ahead * 2 + has_below`.
const EDGE_WEIGHTS: [[f32; 4]; 8] = [
    // single pixel on the last row
    [0.0, 0.0, 0.0, 0.0],
    // one column wide
    [0.0, 0.0, 1.0, 0.0],
    // leading edge, last row
    [7.0 / 16.0, 0.0, 0.0, 0.0],
    // leading edge
    [8.0 / 16.0, 0.0, 6.0 / 16.0, 2.0 / 16.0],
    // trailing edge, last row
    [0.0, 0.0, 0.0, 0.0],
    // trailing edge
    [0.0, 7.0 / 16.0, 9.0 / 16.0, 0.0],
    // last row
    [7.0 / 16.0, 0.0, 0.0, 0.0],
    // interior
    [7.0 / 16.0, 3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0],
];

#[inline]
fn weight_set(has_behind: bool, has_ahead: bool, has_below: bool) -> &'static [f32; 4] {
    &EDGE_WEIGHTS[has_behind as usize * 4 + has_ahead as usize * 2 + has_below as usize]
}

/// Gray value (0..=255) of level `index` out of `levels`.
#[inline]
fn level_value(index: usize, levels: usize) -> u8 {
    (255 * index / (levels - 1)) as u8
}

/// Dither to `levels` evenly spaced grays, written to R, G and B.
///
/// Luma uses the crate-wide Rec. 709 weights on 0..=255 values. A pixel
/// becomes level `floor(v / 255 * (levels - 1) + 0.5)`. Rows alternate
/// direction. Alpha and padding are copied through; fully transparent
/// pixels are left as they are.
///
/// # Errors
///
/// Returns [`QuantizeError::InvalidLevels`] if `levels < 2`.
///
/// # Example
///
/// ```
/// use palette_dither::{dither_gray_levels, PixelBuffer};
///
/// let image = PixelBuffer::from_rgba(2, 1, &[[0, 0, 0, 255], [255, 255, 255, 255]]).unwrap();
/// let output = dither_gray_levels(&image.view(), 3).unwrap();
/// assert_eq!(output.pixel(0, 0), [0, 0, 0, 255]);
/// assert_eq!(output.pixel(1, 0), [255, 255, 255, 255]);
/// ```
pub fn dither_gray_levels(
    view: &PixelView<'_>,
    levels: usize,
) -> Result<PixelBuffer, QuantizeError> {
    if levels < 2 {
        return Err(QuantizeError::InvalidLevels { levels });
    }

    let width = view.width();
    let height = view.height();
    let mut output = view.to_buffer();

    let mut values = vec![0.0f32; width * height];
    let mut opaque = vec![false; width * height];
    for y in 0..height {
        for x in 0..width {
            if let Some(rgb) = view.opaque_rgb(x, y) {
                values[y * width + x] = luma_255(rgb);
                opaque[y * width + x] = true;
            }
        }
    }

    let steps = (levels - 1) as f32;
    for y in 0..height {
        let reverse = y % 2 == 1;
        let step: isize = if reverse { -1 } else { 1 };
        let has_below = y + 1 < height;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let idx = y * width + x;
            if !opaque[idx] {
                continue;
            }

            let old = values[idx].clamp(0.0, 255.0);
            let level = ((old / 255.0 * steps + 0.5).floor() as usize).min(levels - 1);
            let new = level_value(level, levels);
            output.set_rgb(x, y, RgbInt::new(new, new, new));
            let error = old - new as f32;

            let (has_behind, has_ahead) = if reverse {
                (x + 1 < width, x > 0)
            } else {
                (x > 0, x + 1 < width)
            };
            let weights = weight_set(has_behind, has_ahead, has_below);

            for (&(dx, dy), &weight) in OFFSETS.iter().zip(weights) {
                if weight <= 0.0 {
                    continue;
                }
                // The weight set guarantees the target exists
                let tx = (x as isize + dx * step) as usize;
                values[(y + dy) * width + tx] += error * weight;
            }
        }
    }

    tracing::debug!(levels, width, height, "Dithered to gray levels");
    Ok(output)
}

#[inline]
fn luma_255(rgb: RgbInt) -> f32 {
    Grayscale::from(rgb).value * 255.0
}
