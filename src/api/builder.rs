//! Palettizer builder -- the one-call palette filter.

use rand::SeedableRng;

use crate::buffer::{PixelBuffer, PixelView};
use crate::color::{Cielab, ColorSpace, ColorSpaceKind, Grayscale, RgbFloat, RgbInt, Xyz};
use crate::config::QuantizeConfig;
use crate::dither::{dither, KernelChoice};
use crate::error::QuantizeError;
use crate::histogram::PixelHistogram;
use crate::palette::generate;
use crate::quantize::quantize;
use crate::rng::XorShift128;

/// Result of [`Palettizer::process`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOutcome {
    /// The reduced image, same shape and stride as the input.
    pub image: PixelBuffer,
    /// The generated palette as 8-bit colors, in cluster order.
    pub palette: Vec<RgbInt>,
}

/// Reduce an image to a generated palette, optionally with dithering.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - Values are validated when [`process()`](Self::process) runs, or up
///   front with [`from_config()`](Self::from_config)
/// - [`process()`](Self::process) takes `&self`, so the builder is reusable
///   across images; without a seed each call draws a fresh entropy seed
///
/// # Example
///
/// ```
/// use palette_dither::{ColorSpaceKind, Palettizer, PixelBuffer};
///
/// let image = PixelBuffer::from_rgba(
///     2,
///     2,
///     &[[0, 0, 0, 255], [255, 255, 255, 255], [255, 255, 255, 255], [0, 0, 0, 255]],
/// )
/// .unwrap();
///
/// let outcome = Palettizer::new(2)
///     .color_space(ColorSpaceKind::RgbFloat)
///     .seed([1, 2, 3, 4])
///     .process(&image.view())
///     .unwrap();
///
/// assert_eq!(outcome.palette.len(), 2);
/// assert_eq!(outcome.image, image);
/// ```
#[derive(Debug, Clone)]
pub struct Palettizer {
    config: QuantizeConfig,
}

impl Palettizer {
    /// A palettizer for `colors` palette entries with default settings:
    /// Cielab, Floyd-Steinberg dithering, serpentine scan, entropy seed.
    pub fn new(colors: usize) -> Self {
        Self {
            config: QuantizeConfig::new(colors),
        }
    }

    /// Build from a configuration, validating it first.
    pub fn from_config(config: QuantizeConfig) -> Result<Self, QuantizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Set the working color space.
    #[inline]
    pub fn color_space(mut self, kind: ColorSpaceKind) -> Self {
        self.config.color_space = kind;
        self
    }

    /// Set the diffusion kernel.
    #[inline]
    pub fn kernel(mut self, kernel: KernelChoice) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Enable or disable error diffusion.
    #[inline]
    pub fn dithering(mut self, enabled: bool) -> Self {
        self.config.dither = enabled;
        self
    }

    /// Set the squared k-means convergence threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the k-means iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the lightness emphasis used while dithering.
    #[inline]
    pub fn lightness_weight(mut self, weight: f32) -> Self {
        self.config.lightness_weight = weight;
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.config.serpentine = enabled;
        self
    }

    /// Use a fixed PRNG seed so repeated runs give the same palette.
    #[inline]
    pub fn seed(mut self, seed: [u32; 4]) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &QuantizeConfig {
        &self.config
    }

    /// Run histogram, palette generation and quantization or dithering.
    ///
    /// A fully transparent image yields an empty palette and comes back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`QuantizeError`] if the configuration is invalid.
    pub fn process(&self, view: &PixelView<'_>) -> Result<PaletteOutcome, QuantizeError> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => XorShift128::new(seed),
            None => XorShift128::from_entropy(),
        };

        match self.config.color_space {
            ColorSpaceKind::RgbInt => self.run::<RgbInt>(view, &mut rng),
            ColorSpaceKind::RgbFloat => self.run::<RgbFloat>(view, &mut rng),
            ColorSpaceKind::Xyz => self.run::<Xyz>(view, &mut rng),
            ColorSpaceKind::Cielab => self.run::<Cielab>(view, &mut rng),
            ColorSpaceKind::Grayscale => self.run::<Grayscale>(view, &mut rng),
        }
    }

    fn run<S: ColorSpace>(
        &self,
        view: &PixelView<'_>,
        rng: &mut XorShift128,
    ) -> Result<PaletteOutcome, QuantizeError> {
        let histogram = PixelHistogram::<S>::from_view(view);
        let palette = generate(
            &histogram,
            self.config.colors,
            rng,
            &self.config.kmeans_options(),
        )?;

        let image = if palette.is_empty() {
            view.to_buffer()
        } else if self.config.dither {
            let kernel = self.config.kernel.build()?;
            dither(view, &palette, &kernel, &self.config.dither_options())?
        } else {
            quantize(view, &palette)?
        };

        tracing::info!(
            color_space = %S::KIND,
            colors = palette.len(),
            dither = self.config.dither,
            width = view.width(),
            height = view.height(),
            "Palettized image"
        );

        Ok(PaletteOutcome {
            image,
            palette: palette.to_rgb(),
        })
    }
}
