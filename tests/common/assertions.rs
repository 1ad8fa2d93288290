//! Assertion helpers for tests.

use palette_dither::{PixelBuffer, RgbInt};
use pretty_assertions::assert_eq;

/// Assert every opaque pixel of `image` is one of `palette`.
pub fn assert_only_palette_colors(image: &PixelBuffer, palette: &[RgbInt]) {
    for color in image.distinct_colors() {
        assert!(
            palette.contains(&color),
            "Color {:?} is not in palette {:?}",
            color,
            palette
        );
    }
}

/// Assert both buffers have the same width, height and stride.
pub fn assert_same_shape(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        (actual.width(), actual.height(), actual.stride()),
        (expected.width(), expected.height(), expected.stride()),
        "Buffer shape differs"
    );
}

/// Assert alpha of every pixel is unchanged.
pub fn assert_alpha_preserved(actual: &PixelBuffer, source: &PixelBuffer) {
    assert_same_shape(actual, source);
    for y in 0..source.height() {
        for x in 0..source.width() {
            assert_eq!(
                actual.pixel(x, y)[3],
                source.pixel(x, y)[3],
                "Alpha changed at ({x}, {y})"
            );
        }
    }
}

/// Fraction of pixels whose red channel is 255.
pub fn white_ratio(image: &PixelBuffer) -> f64 {
    let total = image.width() * image.height();
    let whites = (0..total)
        .filter(|i| image.pixel(i % image.width(), i / image.width())[0] == 255)
        .count();
    whites as f64 / total as f64
}
