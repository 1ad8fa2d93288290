//! Filter configuration.
//!
//! [`QuantizeConfig`] is the whole configuration surface of the palette
//! filter. It deserializes from YAML with defaults for everything except
//! the palette size:
//!
//! ```yaml
//! colors: 16
//! color_space: cielab
//! dither: true
//! kernel:
//!   type: jjn_bell
//! seed: [1, 2, 3, 4]
//! ```

use serde::{Deserialize, Serialize};

use crate::color::ColorSpaceKind;
use crate::dither::{DitherOptions, KernelChoice, DEFAULT_LIGHTNESS_WEIGHT};
use crate::error::QuantizeError;
use crate::palette::{KMeansOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD};

/// Palette filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizeConfig {
    /// Number of palette colors (K)
    pub colors: usize,

    /// Color space used for clustering, matching and error diffusion
    #[serde(default)]
    pub color_space: ColorSpaceKind,

    /// Squared k-means convergence threshold
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// k-means iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Apply error diffusion; plain nearest-color mapping otherwise
    #[serde(default = "default_true")]
    pub dither: bool,

    /// Diffusion kernel
    #[serde(default)]
    pub kernel: KernelChoice,

    /// Lightness emphasis for palette matching while dithering
    #[serde(default = "default_lightness_weight")]
    pub lightness_weight: f32,

    /// Alternate scan direction per row while dithering
    #[serde(default = "default_true")]
    pub serpentine: bool,

    /// PRNG seed for reproducible palettes; entropy when absent
    #[serde(default)]
    pub seed: Option<[u32; 4]>,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_lightness_weight() -> f32 {
    DEFAULT_LIGHTNESS_WEIGHT
}

fn default_true() -> bool {
    true
}

impl QuantizeConfig {
    /// Defaults for everything but the palette size.
    pub fn new(colors: usize) -> Self {
        Self {
            colors,
            color_space: ColorSpaceKind::default(),
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dither: true,
            kernel: KernelChoice::default(),
            lightness_weight: DEFAULT_LIGHTNESS_WEIGHT,
            serpentine: true,
            seed: None,
        }
    }

    /// Parse and validate YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::{ColorSpaceKind, QuantizeConfig};
    ///
    /// let config = QuantizeConfig::from_yaml_str("colors: 8\ncolor_space: rgb_float\n").unwrap();
    /// assert_eq!(config.colors, 8);
    /// assert_eq!(config.color_space, ColorSpaceKind::RgbFloat);
    /// assert!(config.dither);
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self, QuantizeError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        tracing::debug!(
            colors = config.colors,
            color_space = %config.color_space,
            dither = config.dither,
            "Loaded quantize configuration"
        );
        Ok(config)
    }

    /// Check every value for range errors and build the kernel once.
    pub fn validate(&self) -> Result<(), QuantizeError> {
        if self.colors == 0 {
            return Err(QuantizeError::InvalidColorCount {
                requested: self.colors,
            });
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(QuantizeError::InvalidOption {
                name: "threshold",
                reason: format!("must be a finite non-negative number, got {}", self.threshold),
            });
        }
        if self.max_iterations == 0 {
            return Err(QuantizeError::InvalidOption {
                name: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.lightness_weight.is_finite() || self.lightness_weight <= 0.0 {
            return Err(QuantizeError::InvalidOption {
                name: "lightness_weight",
                reason: format!("must be a finite positive number, got {}", self.lightness_weight),
            });
        }
        self.kernel.build()?;
        Ok(())
    }

    pub fn kmeans_options(&self) -> KMeansOptions {
        KMeansOptions::new()
            .threshold(self.threshold)
            .max_iterations(self.max_iterations)
    }

    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .serpentine(self.serpentine)
            .lightness_weight(self.lightness_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::KernelTap;
    use crate::error::KernelError;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = QuantizeConfig::from_yaml_str("colors: 4").unwrap();
        assert_eq!(config, QuantizeConfig::new(4));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
colors: 3
color_space: grayscale
threshold: 0.001
max_iterations: 20
dither: false
kernel:
  type: custom
  taps:
    - { dx: 1, dy: 0, weight: 0.75 }
    - { dx: 0, dy: 1, weight: 0.25 }
lightness_weight: 2.0
serpentine: false
seed: [9, 8, 7, 6]
"#;
        let config = QuantizeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.color_space, ColorSpaceKind::Grayscale);
        assert_eq!(config.max_iterations, 20);
        assert!(!config.dither);
        assert!(!config.serpentine);
        assert_eq!(config.seed, Some([9, 8, 7, 6]));
        assert_eq!(
            config.kernel,
            KernelChoice::Custom {
                taps: vec![KernelTap::new(1, 0, 0.75), KernelTap::new(0, 1, 0.25)]
            }
        );
        assert_eq!(config.kmeans_options().threshold, 0.001);
        assert_eq!(config.dither_options().lightness_weight, 2.0);
    }

    #[test]
    fn test_missing_colors_is_parse_error() {
        let result = QuantizeConfig::from_yaml_str("color_space: xyz");
        assert!(matches!(result, Err(QuantizeError::Config(_))));
    }

    #[test]
    fn test_unknown_color_space_is_parse_error() {
        let result = QuantizeConfig::from_yaml_str("colors: 2\ncolor_space: hsv");
        assert!(matches!(result, Err(QuantizeError::Config(_))));
    }

    #[test]
    fn test_zero_colors_rejected() {
        let result = QuantizeConfig::from_yaml_str("colors: 0");
        assert!(matches!(
            result,
            Err(QuantizeError::InvalidColorCount { requested: 0 })
        ));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut config = QuantizeConfig::new(2);
        config.threshold = -1.0;
        assert!(matches!(
            config.validate(),
            Err(QuantizeError::InvalidOption { name: "threshold", .. })
        ));

        let mut config = QuantizeConfig::new(2);
        config.max_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(QuantizeError::InvalidOption { name: "max_iterations", .. })
        ));

        let mut config = QuantizeConfig::new(2);
        config.lightness_weight = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(QuantizeError::InvalidOption { name: "lightness_weight", .. })
        ));
    }

    #[test]
    fn test_bad_custom_kernel_rejected() {
        let yaml = "colors: 2\nkernel:\n  type: custom\n  taps:\n    - { dx: 1, dy: 0, weight: 0.5 }\n";
        let result = QuantizeConfig::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(QuantizeError::InvalidKernel(KernelError::WeightSum { .. }))
        ));
    }
}
