//! Domain-critical regression tests for palette-dither.
//!
//! Each test documents the class of bug it guards against rather than a
//! single happy path.

#[cfg(test)]
mod domain_tests {
    use crate::buffer::PixelBuffer;
    use crate::color::{Cielab, ColorSpace, Grayscale, RgbFloat, RgbInt};
    use crate::dither::{dither, DitherOptions, Kernel, KernelTap};
    use crate::error::KernelError;
    use crate::histogram::PixelHistogram;
    use crate::palette::{generate, interpolate, KMeansOptions, Palette};
    use crate::quantize::quantize;
    use crate::rng::XorShift128;

    fn bw<S: ColorSpace>() -> Palette<S> {
        Palette::from_rgb(&[RgbInt::new(0, 0, 0), RgbInt::new(255, 255, 255)])
    }

    fn solid(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
        PixelBuffer::from_rgba(
            width,
            height,
            &vec![[rgb[0], rgb[1], rgb[2], 255]; width * height],
        )
        .unwrap()
    }

    fn ramp_image() -> PixelBuffer {
        let pixels: Vec<[u8; 4]> = (0..64u32)
            .map(|i| {
                let i = i as u8;
                [i.wrapping_mul(37), i.wrapping_mul(11), 255 - i * 3, 255]
            })
            .collect();
        PixelBuffer::from_rgba(8, 8, &pixels).unwrap()
    }

    fn white_ratio(image: &PixelBuffer) -> f64 {
        let total = image.width() * image.height();
        let whites = (0..total)
            .filter(|i| image.pixel(i % image.width(), i / image.width())[0] == 255)
            .count();
        whites as f64 / total as f64
    }

    // ========================================================================
    // Palette generation
    // ========================================================================

    /// If this breaks, it means: seeding no longer spreads the initial
    /// centers from darkest to brightest, or refinement merged two clusters
    /// that have nothing in common.
    #[test]
    fn test_two_color_image_gives_exact_two_color_palette() {
        let image = PixelBuffer::from_rgba(
            2,
            2,
            &[
                [0, 0, 0, 255],
                [255, 255, 255, 255],
                [255, 255, 255, 255],
                [0, 0, 0, 255],
            ],
        )
        .unwrap();
        let histogram = PixelHistogram::<RgbFloat>::from_view(&image.view());
        let mut rng = XorShift128::new([1, 2, 3, 4]);
        let palette = generate(&histogram, 2, &mut rng, &KMeansOptions::new()).unwrap();

        let mut colors = palette.to_rgb();
        colors.sort_by_key(|c| c.packed());
        assert_eq!(
            colors,
            vec![RgbInt::new(0, 0, 0), RgbInt::new(255, 255, 255)],
            "REGRESSION: black/white image did not produce a black/white palette"
        );

        let output = quantize(&image.view(), &palette).unwrap();
        assert_eq!(output, image, "REGRESSION: palette colors were altered");
    }

    /// If this breaks, it means: transparent pixels leak into the histogram
    /// or the quantizer started touching pixels it should ignore.
    #[test]
    fn test_fully_transparent_image_is_left_alone() {
        let image = PixelBuffer::from_rgba(1, 1, &[[12, 34, 56, 0]]).unwrap();
        let histogram = PixelHistogram::<Cielab>::from_view(&image.view());
        assert!(histogram.is_empty());

        let mut rng = XorShift128::new([1, 2, 3, 4]);
        let palette = generate(&histogram, 4, &mut rng, &KMeansOptions::new()).unwrap();
        assert!(palette.is_empty(), "REGRESSION: palette built from no pixels");

        let output = quantize(&image.view(), &palette).unwrap();
        assert_eq!(output, image);
    }

    /// If this breaks, it means: palette generation depends on something
    /// other than the histogram and the PRNG seed (hash map iteration order
    /// is the usual suspect).
    #[test]
    fn test_same_seed_same_palette() {
        let image = ramp_image();
        let run = || {
            let histogram = PixelHistogram::<Cielab>::from_view(&image.view());
            let mut rng = XorShift128::new([7, 7, 7, 7]);
            generate(&histogram, 5, &mut rng, &KMeansOptions::new()).unwrap()
        };
        assert_eq!(
            run(),
            run(),
            "REGRESSION: identical seed produced different palettes"
        );
    }

    /// If this breaks, it means: the ramp endpoints are off by one step or
    /// the midpoint is no longer rounded half up on the way back to 8-bit.
    #[test]
    fn test_interpolated_midpoint() {
        let palette = interpolate(RgbFloat::new(0.0, 0.0, 0.0), RgbFloat::new(1.0, 1.0, 1.0), 3)
            .unwrap();
        assert_eq!(
            palette.to_rgb(),
            vec![
                RgbInt::new(0, 0, 0),
                RgbInt::new(128, 128, 128),
                RgbInt::new(255, 255, 255)
            ]
        );
    }

    // ========================================================================
    // Quantization
    // ========================================================================

    /// If this breaks, it means: quantizing an already quantized image moves
    /// pixels, so palette colors and their round trip through the working
    /// space disagree.
    #[test]
    fn test_quantize_is_idempotent() {
        let image = ramp_image();
        let histogram = PixelHistogram::<Cielab>::from_view(&image.view());
        let mut rng = XorShift128::new([3, 1, 4, 1]);
        let palette = generate(&histogram, 6, &mut rng, &KMeansOptions::new()).unwrap();

        let once = quantize(&image.view(), &palette).unwrap();
        let twice = quantize(&once.view(), &palette).unwrap();
        assert_eq!(once, twice, "REGRESSION: quantization is not idempotent");
    }

    // ========================================================================
    // Dithering
    // ========================================================================

    /// If this breaks, it means: error is lost or amplified during
    /// diffusion. A mid gray on a black/white palette must come out close
    /// to half white.
    #[test]
    fn test_mid_gray_dithers_to_half_white() {
        let image = solid(32, 32, [128, 128, 128]);
        for kernel in [Kernel::floyd_steinberg(), Kernel::jjn_bell()] {
            let output = dither(&image.view(), &bw::<RgbFloat>(), &kernel, &DitherOptions::new())
                .unwrap();
            let ratio = white_ratio(&output);
            assert!(
                (ratio - 0.5).abs() < 0.1,
                "REGRESSION: mid gray produced {ratio:.3} white ratio, expected ~0.50"
            );
        }
    }

    /// If this breaks, it means: dithering invents error on pixels that
    /// already match a palette color exactly.
    #[test]
    fn test_dither_of_palette_colors_is_identity() {
        let palette_rgb = [
            RgbInt::new(0, 0, 0),
            RgbInt::new(200, 30, 30),
            RgbInt::new(255, 255, 255),
        ];
        let pixels: Vec<[u8; 4]> = (0..25)
            .map(|i| {
                let c = palette_rgb[(i * 7) % 3];
                [c.r, c.g, c.b, 255]
            })
            .collect();
        let image = PixelBuffer::from_rgba(5, 5, &pixels).unwrap();
        let output = dither(
            &image.view(),
            &Palette::<RgbInt>::from_rgb(&palette_rgb),
            &Kernel::jjn_bell(),
            &DitherOptions::new(),
        )
        .unwrap();
        assert_eq!(output, image);
    }

    /// If this breaks, it means: dithered output contains colors that are
    /// not in the palette (for example an unclamped working value written
    /// straight to the buffer).
    #[test]
    fn test_dither_output_only_uses_palette_colors() {
        let image = ramp_image();
        let palette = Palette::<Grayscale>::from_rgb(&[
            RgbInt::new(0, 0, 0),
            RgbInt::new(128, 128, 128),
            RgbInt::new(255, 255, 255),
        ]);
        let allowed = palette.to_rgb();
        let output = dither(
            &image.view(),
            &palette,
            &Kernel::floyd_steinberg(),
            &DitherOptions::new(),
        )
        .unwrap();
        for color in output.distinct_colors() {
            assert!(
                allowed.contains(&color),
                "REGRESSION: {color:?} is not a palette color"
            );
        }
    }

    /// If this breaks, it means: a kernel that drops half of the error is
    /// accepted, which silently darkens every dithered image.
    #[test]
    fn test_kernel_losing_error_rejected() {
        let result = Kernel::new(vec![KernelTap::new(1, 0, 0.25), KernelTap::new(0, 1, 0.25)]);
        assert!(matches!(result, Err(KernelError::WeightSum { .. })));
    }
}
