//! Error diffusion dithering.
//!
//! Every opaque pixel is mapped to its nearest palette color and the
//! difference is pushed onto neighbors that have not been visited yet,
//! so the average tone of a region survives even with very few colors.
//!
//! # Algorithms
//!
//! - [`dither`] runs any validated [`Kernel`] in any [`ColorSpace`]. The
//!   reference kernels are [`Kernel::floyd_steinberg`] and
//!   [`Kernel::jjn_bell`].
//! - [`dither_gray_levels`] is a fixed N-level grayscale Floyd-Steinberg
//!   that needs no palette and handles image borders with edge-specific
//!   weight sets instead of padding.
//!
//! # Example
//!
//! ```
//! use palette_dither::{dither, DitherOptions, Grayscale, Kernel, Palette, PixelBuffer, RgbInt};
//!
//! let image = PixelBuffer::from_rgba(4, 4, &[[128, 128, 128, 255]; 16]).unwrap();
//! let palette = Palette::<Grayscale>::from_rgb(&[RgbInt::new(0, 0, 0), RgbInt::new(255, 255, 255)]);
//!
//! let output = dither(&image.view(), &palette, &Kernel::floyd_steinberg(), &DitherOptions::new()).unwrap();
//! let whites = (0..16).filter(|i| output.pixel(i % 4, i / 4)[0] == 255).count();
//! assert!(whites > 4 && whites < 12);
//! ```

mod gray_levels;
mod kernel;
mod options;

pub use gray_levels::dither_gray_levels;
pub use kernel::{
    Kernel, KernelChoice, KernelTap, FLOYD_STEINBERG, FLOYD_STEINBERG_DIVISOR, JJN_BELL,
    JJN_BELL_DIVISOR, MAX_TAP_REACH, WEIGHT_SUM_TOLERANCE,
};
pub use options::{DitherOptions, DEFAULT_LIGHTNESS_WEIGHT};

use crate::buffer::{PixelBuffer, PixelView};
use crate::color::{add, scale, sub, Channels, ColorSpace};
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Dither `view` onto `palette` with the given kernel.
///
/// Returns a new buffer with the source's shape and stride; alpha and row
/// padding are copied through. Fully transparent pixels are left as they
/// are and neither receive nor spread error.
///
/// # Errors
///
/// Returns [`QuantizeError::EmptyPalette`] if the palette is empty and the
/// image has at least one opaque pixel.
pub fn dither<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Result<PixelBuffer, QuantizeError> {
    let mut output = view.to_buffer();
    diffuse(view, palette, kernel, options, &mut output)?;
    Ok(output)
}

/// Like [`dither`], writing into a caller-supplied buffer.
///
/// # Errors
///
/// Returns [`QuantizeError::DimensionMismatch`] if `output` does not have
/// the source's width and height, plus the errors of [`dither`].
pub fn dither_into<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
    kernel: &Kernel,
    options: &DitherOptions,
    output: &mut PixelBuffer,
) -> Result<(), QuantizeError> {
    output.ensure_shape_of(view)?;
    output.copy_pixels_from(view);
    diffuse(view, palette, kernel, options, output)
}

/// Precompute flat working-buffer offsets for a kernel.
fn flat_offsets(kernel: &Kernel, row_len: usize) -> Vec<(isize, f32)> {
    kernel
        .taps()
        .iter()
        .map(|t| (t.dy as isize * row_len as isize + t.dx as isize, t.weight))
        .collect()
}

/// Row length and cell count of the padded working buffer.
fn working_size(width: usize, height: usize, pad: usize, below: usize) -> Option<(usize, usize)> {
    let row_len = pad.checked_mul(2)?.checked_add(width)?;
    let rows = height.checked_add(below)?;
    let cells = row_len.checked_mul(rows)?;
    // Flat offsets are signed
    isize::try_from(cells).ok()?;
    Some((row_len, cells))
}

fn diffuse<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
    kernel: &Kernel,
    options: &DitherOptions,
    output: &mut PixelBuffer,
) -> Result<(), QuantizeError> {
    if palette.is_empty() {
        if view.has_opaque() {
            return Err(QuantizeError::EmptyPalette);
        }
        return Ok(());
    }

    let width = view.width();
    let height = view.height();
    if width == 0 || height == 0 {
        return Ok(());
    }

    // Working buffer padded on both sides by the kernel's horizontal reach,
    // which covers the mirrored kernel too, and below by its vertical reach
    let pad = kernel.horizontal_reach();
    let (row_len, cells) = working_size(width, height, pad, kernel.vertical_reach())
        .ok_or_else(|| {
            QuantizeError::InvalidBuffer(format!(
                "working buffer for {width}x{height} with kernel reach {pad} overflows"
            ))
        })?;
    let mut work: Vec<Channels> = vec![[0.0; 3]; cells];
    let mut opaque = vec![false; width * height];

    for y in 0..height {
        for x in 0..width {
            if let Some(rgb) = view.opaque_rgb(x, y) {
                work[y * row_len + pad + x] = S::from_rgb(rgb).channels();
                opaque[y * width + x] = true;
            }
        }
    }

    let forward = flat_offsets(kernel, row_len);
    let mirrored = flat_offsets(&kernel.mirrored(), row_len);
    let palette_rgb = palette.to_rgb();

    for y in 0..height {
        // Determine scan direction
        let reverse = options.serpentine && y % 2 == 1;
        let offsets = if reverse { &mirrored } else { &forward };

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            if !opaque[y * width + x] {
                continue;
            }

            let cell = y * row_len + pad + x;
            let clamped = S::from_channels(work[cell]).saturate_channels();
            let Some((index, _)) = palette.find_nearest(&clamped, options.lightness_weight)
            else {
                continue;
            };
            let chosen = palette.entries()[index].channels();
            let error = sub(clamped.channels(), chosen);
            work[cell] = chosen;
            output.set_rgb(x, y, palette_rgb[index]);

            for &(offset, weight) in offsets {
                let Some(target) = cell.checked_add_signed(offset) else {
                    continue;
                };
                if let Some(value) = work.get_mut(target) {
                    *value = add(*value, scale(error, weight));
                }
            }
        }
    }

    tracing::debug!(
        color_space = %S::KIND,
        palette = palette.len(),
        taps = kernel.taps().len(),
        serpentine = options.serpentine,
        width,
        height,
        "Dithered image"
    );
    Ok(())
}
