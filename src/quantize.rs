//! Nearest-color quantization without error diffusion.

use crate::buffer::{PixelBuffer, PixelView};
use crate::color::{ColorSpace, DEFAULT_DISTANCE_WEIGHT};
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Map every opaque pixel to its nearest palette color.
///
/// Returns a new buffer with the source's shape and stride. Alpha, row
/// padding and fully transparent pixels are copied through unchanged.
///
/// # Errors
///
/// Returns [`QuantizeError::EmptyPalette`] if the palette is empty and the
/// image has at least one opaque pixel. A fully transparent image comes back
/// unchanged whatever the palette.
///
/// # Example
///
/// ```
/// use palette_dither::{quantize, Palette, PixelView, RgbFloat, RgbInt};
///
/// let data = [10u8, 10, 10, 255, 240, 240, 240, 255];
/// let view = PixelView::packed(&data, 2, 1).unwrap();
/// let palette = Palette::<RgbFloat>::from_rgb(&[RgbInt::new(0, 0, 0), RgbInt::new(255, 255, 255)]);
///
/// let output = quantize(&view, &palette).unwrap();
/// assert_eq!(output.pixel(0, 0), [0, 0, 0, 255]);
/// assert_eq!(output.pixel(1, 0), [255, 255, 255, 255]);
/// ```
pub fn quantize<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
) -> Result<PixelBuffer, QuantizeError> {
    let mut output = view.to_buffer();
    map_pixels(view, palette, &mut output)?;
    Ok(output)
}

/// Like [`quantize`], writing into a caller-supplied buffer.
///
/// The target's pixels are overwritten from `view` first, so its previous
/// contents do not matter; its own stride is kept.
///
/// # Errors
///
/// Returns [`QuantizeError::DimensionMismatch`] if `output` does not have
/// the source's width and height, plus the errors of [`quantize`].
pub fn quantize_into<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
    output: &mut PixelBuffer,
) -> Result<(), QuantizeError> {
    output.ensure_shape_of(view)?;
    output.copy_pixels_from(view);
    map_pixels(view, palette, output)
}

fn map_pixels<S: ColorSpace>(
    view: &PixelView<'_>,
    palette: &Palette<S>,
    output: &mut PixelBuffer,
) -> Result<(), QuantizeError> {
    if palette.is_empty() {
        if view.has_opaque() {
            return Err(QuantizeError::EmptyPalette);
        }
        return Ok(());
    }

    // Palette colors converted back once
    let palette_rgb = palette.to_rgb();
    let mut mapped = 0usize;

    for y in 0..view.height() {
        for x in 0..view.width() {
            let Some(rgb) = view.opaque_rgb(x, y) else {
                continue;
            };
            let color = S::from_rgb(rgb);
            if let Some((index, _)) = palette.find_nearest(&color, DEFAULT_DISTANCE_WEIGHT) {
                output.set_rgb(x, y, palette_rgb[index]);
                mapped += 1;
            }
        }
    }

    tracing::debug!(
        color_space = %S::KIND,
        palette = palette.len(),
        pixels = mapped,
        "Quantized image"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Cielab, Grayscale, RgbFloat, RgbInt};

    fn bw<S: ColorSpace>() -> Palette<S> {
        Palette::from_rgb(&[RgbInt::new(0, 0, 0), RgbInt::new(255, 255, 255)])
    }

    #[test]
    fn test_transparent_pixels_pass_through() {
        let image = PixelBuffer::from_rgba(2, 1, &[[100, 100, 100, 0], [200, 200, 200, 9]]).unwrap();
        let output = quantize(&image.view(), &bw::<RgbFloat>()).unwrap();
        assert_eq!(output.pixel(0, 0), [100, 100, 100, 0]);
        assert_eq!(output.pixel(1, 0), [255, 255, 255, 9]);
    }

    #[test]
    fn test_padding_preserved() {
        let data = [20, 20, 20, 255, 0xAA, 0xBB, 230, 230, 230, 255, 0xCC, 0xDD];
        let view = PixelView::new(&data, 1, 2, 6).unwrap();
        let output = quantize(&view, &bw::<Grayscale>()).unwrap();
        assert_eq!(
            output.as_bytes(),
            &[0, 0, 0, 255, 0xAA, 0xBB, 255, 255, 255, 255, 0xCC, 0xDD]
        );
    }

    #[test]
    fn test_empty_palette_with_opaque_pixel_fails() {
        let image = PixelBuffer::from_rgba(1, 1, &[[1, 2, 3, 255]]).unwrap();
        let result = quantize(&image.view(), &Palette::<Cielab>::default());
        assert!(matches!(result, Err(QuantizeError::EmptyPalette)));
    }

    #[test]
    fn test_empty_palette_on_transparent_image_is_identity() {
        let image = PixelBuffer::from_rgba(1, 1, &[[1, 2, 3, 0]]).unwrap();
        let output = quantize(&image.view(), &Palette::<Cielab>::default()).unwrap();
        assert_eq!(output, image);
    }

    #[test]
    fn test_quantize_into_rejects_wrong_shape() {
        let image = PixelBuffer::new(3, 2);
        let mut target = PixelBuffer::new(2, 3);
        let result = quantize_into(&image.view(), &bw::<RgbInt>(), &mut target);
        assert!(matches!(result, Err(QuantizeError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_quantize_into_matches_quantize() {
        let image = PixelBuffer::from_rgba(
            2,
            2,
            &[[10, 0, 0, 255], [200, 210, 220, 255], [90, 90, 90, 0], [140, 140, 140, 255]],
        )
        .unwrap();
        let palette = bw::<Cielab>();
        let expected = quantize(&image.view(), &palette).unwrap();

        // Padded target; the stride differs from the source
        let mut target = PixelBuffer::from_raw(vec![7; 2 * 12], 2, 2, 12).unwrap();
        quantize_into(&image.view(), &palette, &mut target).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(target.pixel(x, y), expected.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_idempotent_on_palette_colors() {
        let palette_rgb = [
            RgbInt::new(0, 0, 0),
            RgbInt::new(255, 0, 0),
            RgbInt::new(30, 160, 90),
        ];
        let pixels: Vec<[u8; 4]> = (0..9)
            .map(|i| {
                let c = palette_rgb[i % 3];
                [c.r, c.g, c.b, 255]
            })
            .collect();
        let image = PixelBuffer::from_rgba(3, 3, &pixels).unwrap();

        let rgb_int = quantize(&image.view(), &Palette::<RgbInt>::from_rgb(&palette_rgb)).unwrap();
        assert_eq!(rgb_int, image);
        let rgb_float =
            quantize(&image.view(), &Palette::<RgbFloat>::from_rgb(&palette_rgb)).unwrap();
        assert_eq!(rgb_float, image);
    }
}
