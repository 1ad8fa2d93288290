//! Palettes and palette generation
//!
//! A [`Palette`] is an ordered list of colors in one color space. Palettes
//! come from [`generate`] (weighted k-means over an image histogram) or
//! [`interpolate`] (an even ramp between two colors).

mod interpolate;
mod kmeans;
mod palette;

pub use interpolate::interpolate;
pub use kmeans::{generate, KMeansOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};
pub use palette::Palette;
