//! Color representations and conversions
//!
//! Five interchangeable representations of a pixel, all implementing
//! [`ColorSpace`] so the palette, quantization and dithering algorithms can
//! be written once and run in any of them.
//!
//! # Color Spaces
//!
//! - [`RgbInt`]: 8-bit sRGB triples, exactly what the pixel buffer stores.
//! - [`RgbFloat`]: sRGB scaled to 0.0..=1.0.
//! - [`Xyz`]: CIE 1931 XYZ (D65), roughly 0..=100 per axis.
//! - [`Cielab`]: CIE L*a*b*, perceptually close to uniform.
//! - [`Grayscale`]: a single luma value in 0.0..=1.0.
//!
//! # Example
//!
//! ```
//! use palette_dither::{Cielab, ColorSpace, RgbInt};
//!
//! let red = RgbInt::new(255, 0, 0);
//! let lab = Cielab::from_rgb(red);
//! assert!((lab.l - 53.24).abs() < 0.5);
//!
//! // Back to 8-bit, within one step per channel
//! let back = lab.to_rgb();
//! assert!(back.r >= 254 && back.g <= 1 && back.b <= 1);
//! ```

mod cielab;
mod grayscale;
mod rgb_float;
mod rgb_int;
mod space;
mod xyz;

pub use cielab::Cielab;
pub use grayscale::Grayscale;
pub use rgb_float::RgbFloat;
pub use rgb_int::RgbInt;
pub use space::{convert, Channels, ColorSpace, ColorSpaceKind, DEFAULT_DISTANCE_WEIGHT};
pub use xyz::Xyz;

pub(crate) use space::{add, scale, sub};
