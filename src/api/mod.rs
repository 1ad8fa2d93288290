//! High-level filter entry point.
//!
//! [`Palettizer`] wraps the whole pipeline (histogram, k-means, then
//! quantization or dithering) behind a builder whose color space is picked
//! at runtime.

mod builder;

pub use builder::{PaletteOutcome, Palettizer};
