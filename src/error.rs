use thiserror::Error;

/// Errors returned by palette generation, quantization and dithering.
///
/// Every variant describes a caller mistake (bad argument, bad buffer, bad
/// configuration). Pure computation has nothing to retry, so none of these
/// are transient.
#[derive(Debug, Error)]
pub enum QuantizeError {
    #[error("Palette size must be at least 1, got {requested}")]
    InvalidColorCount { requested: usize },

    #[error("Interpolated palettes need at least 2 colors, got {count}")]
    InvalidInterpolationCount { count: usize },

    #[error("Gray level dithering needs at least 2 levels, got {levels}")]
    InvalidLevels { levels: usize },

    #[error("Invalid kernel: {0}")]
    InvalidKernel(#[from] KernelError),

    #[error("Cannot pick a nearest color from an empty palette")]
    EmptyPalette,

    #[error(
        "Output buffer is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("Invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Reasons a diffusion kernel is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("kernel has no taps")]
    Empty,

    #[error("tap {index} targets the current pixel")]
    ZeroOffset { index: usize },

    #[error("tap {index} points to a previous row")]
    NegativeRow { index: usize },

    #[error("tap {index} points to an already processed pixel on the current row")]
    BackwardTap { index: usize },

    #[error("weights sum to {sum}, expected 1")]
    WeightSum { sum: f32 },

    #[error("tap {index} has a non-finite weight")]
    InvalidWeight { index: usize },

    #[error("tap {index} reaches further than {limit} pixels")]
    ReachTooLarge { index: usize, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_count_message() {
        let error = QuantizeError::InvalidColorCount { requested: 0 };
        assert_eq!(error.to_string(), "Palette size must be at least 1, got 0");
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = QuantizeError::DimensionMismatch {
            expected_width: 4,
            expected_height: 2,
            actual_width: 2,
            actual_height: 4,
        };
        assert_eq!(error.to_string(), "Output buffer is 2x4, expected 4x2");
    }

    #[test]
    fn test_kernel_error_wraps() {
        let error: QuantizeError = KernelError::WeightSum { sum: 0.5 }.into();
        assert_eq!(error.to_string(), "Invalid kernel: weights sum to 0.5, expected 1");
        match error {
            QuantizeError::InvalidKernel(KernelError::WeightSum { .. }) => {}
            _ => panic!("Expected InvalidKernel variant"),
        }
    }

    #[test]
    fn test_config_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let error: QuantizeError = yaml_error.into();
        assert!(error.to_string().starts_with("Config parse error:"));
    }
}
