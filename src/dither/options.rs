//! Dithering options and configuration.

/// Default lightness emphasis for palette matching while dithering.
pub const DEFAULT_LIGHTNESS_WEIGHT: f32 = 5.0;

/// Configuration options for error diffusion dithering.
///
/// # Example
///
/// ```
/// use palette_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .serpentine(false)
///     .lightness_weight(1.0);
/// assert!(!options.serpentine);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Enable serpentine scanning (alternating row direction).
    ///
    /// When enabled, odd rows are processed right-to-left with the kernel
    /// mirrored, which keeps error from drifting along one diagonal.
    ///
    /// Default: `true`
    pub serpentine: bool,

    /// Multiplier on the lightness difference when picking the nearest
    /// palette color. Only [`Cielab`](crate::Cielab) distances use it.
    ///
    /// Default: `5.0`
    pub lightness_weight: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            serpentine: true,
            lightness_weight: DEFAULT_LIGHTNESS_WEIGHT,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Set the lightness emphasis used for palette matching.
    #[inline]
    pub fn lightness_weight(mut self, weight: f32) -> Self {
        self.lightness_weight = weight;
        self
    }
}
