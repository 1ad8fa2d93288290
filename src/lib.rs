#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! palette-dither: palette generation, quantization and error diffusion
//!
//! Reduce an RGBA image to a small palette picked from the image itself,
//! then map every pixel onto it, with or without dithering.
//!
//! # Quick Start
//!
//! The [`Palettizer`] builder runs the whole pipeline:
//!
//! ```
//! use palette_dither::{ColorSpaceKind, KernelChoice, Palettizer, PixelView};
//!
//! let data: Vec<u8> = (0..16u8).flat_map(|i| [i * 16, i * 8, 255 - i * 16, 255]).collect();
//! let view = PixelView::packed(&data, 4, 4).unwrap();
//!
//! let outcome = Palettizer::new(3)
//!     .color_space(ColorSpaceKind::Cielab)
//!     .kernel(KernelChoice::JjnBell)
//!     .seed([1, 2, 3, 4])
//!     .process(&view)
//!     .unwrap();
//!
//! assert_eq!(outcome.palette.len(), 3);
//! assert!(outcome.image.distinct_colors().len() <= 3);
//! ```
//!
//! # Building Blocks
//!
//! Each stage is usable on its own:
//!
//! ```
//! use palette_dither::{
//!     generate, quantize, KMeansOptions, PixelHistogram, PixelView, RgbFloat, XorShift128,
//! };
//!
//! let data = [0u8, 0, 0, 255, 250, 250, 250, 255, 5, 5, 5, 255];
//! let view = PixelView::packed(&data, 3, 1).unwrap();
//!
//! let histogram = PixelHistogram::<RgbFloat>::from_view(&view);
//! let mut rng = XorShift128::new([1, 2, 3, 4]);
//! let palette = generate(&histogram, 2, &mut rng, &KMeansOptions::new()).unwrap();
//!
//! let output = quantize(&view, &palette).unwrap();
//! assert_eq!(output.pixel(0, 0), output.pixel(2, 0));
//! ```
//!
//! # Color Spaces
//!
//! Clustering, matching and error diffusion all happen in one working
//! space chosen by the caller:
//!
//! - [`RgbInt`]: 8-bit sRGB, integer distance
//! - [`RgbFloat`]: sRGB in 0.0..=1.0
//! - [`Xyz`]: CIE XYZ, D65 white
//! - [`Cielab`]: CIE L*a*b* (default), lightness weighted while dithering
//! - [`Grayscale`]: single luma channel
//!
//! # Pixel Layout
//!
//! Buffers are 8-bit RGBA, four bytes per pixel, rows `stride` bytes apart.
//! Pixels with alpha 0 are ignored everywhere and copied through unchanged.

pub mod api;
pub mod buffer;
pub mod color;
pub mod config;
pub mod dither;
pub mod error;
pub mod histogram;
pub mod palette;
pub mod quantize;
pub mod rng;

#[cfg(test)]
mod domain_tests;

pub use api::{PaletteOutcome, Palettizer};
pub use buffer::{PixelBuffer, PixelView};
pub use color::{
    convert, Channels, Cielab, ColorSpace, ColorSpaceKind, Grayscale, RgbFloat, RgbInt, Xyz,
    DEFAULT_DISTANCE_WEIGHT,
};
pub use config::QuantizeConfig;
pub use dither::{
    dither, dither_gray_levels, dither_into, DitherOptions, Kernel, KernelChoice, KernelTap,
};
pub use error::{KernelError, QuantizeError};
pub use histogram::{HistogramEntry, PixelHistogram};
pub use palette::{generate, interpolate, KMeansOptions, Palette};
pub use quantize::{quantize, quantize_into};
pub use rng::XorShift128;
