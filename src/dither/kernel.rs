//! Error diffusion kernel definitions.
//!
//! A kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error. Offsets are given for a left-to-right scan;
//! right-to-left rows use [`Kernel::mirrored`].

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// Accepted deviation of the weight sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Largest `|dx|` or `dy` a tap may have.
pub const MAX_TAP_REACH: u32 = 64;

/// One diffusion target.
///
/// - `dx`: horizontal offset (positive = ahead in scan direction)
/// - `dy`: vertical offset (0 = current row, positive = rows below)
/// - `weight`: fraction of the error sent to this neighbor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelTap {
    pub dx: i32,
    pub dy: i32,
    pub weight: f32,
}

impl KernelTap {
    #[inline]
    pub const fn new(dx: i32, dy: i32, weight: f32) -> Self {
        Self { dx, dy, weight }
    }
}

/// Floyd-Steinberg taps as (dx, dy, numerator) over [`FLOYD_STEINBERG_DIVISOR`].
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: &[(i32, i32, u8)] = &[
    (1, 0, 7),  // right
    (-1, 1, 3), // bottom-left
    (0, 1, 5),  // bottom
    (1, 1, 1),  // bottom-right
];
pub const FLOYD_STEINBERG_DIVISOR: u8 = 16;

/// Jarvis-Judice-Ninke style "bell" taps over [`JJN_BELL_DIVISOR`].
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JJN_BELL: &[(i32, i32, u8)] = &[
    (1, 0, 7),
    (2, 0, 5),
    (-2, 1, 3),
    (-1, 1, 5),
    (0, 1, 7),
    (1, 1, 5),
    (2, 1, 3),
    (-2, 2, 1),
    (-1, 2, 3),
    (0, 2, 5),
    (1, 2, 3),
    (2, 2, 1),
];
pub const JJN_BELL_DIVISOR: u8 = 48;

/// A validated error diffusion kernel.
///
/// Invariants, checked by [`Kernel::new`]:
/// - at least one tap
/// - no tap on a previous row (`dy >= 0`)
/// - no tap on the current pixel, and taps on the current row point ahead
///   (`dx > 0` when `dy == 0`)
/// - every offset within [`MAX_TAP_REACH`] pixels
/// - finite weights summing to 1 within [`WEIGHT_SUM_TOLERANCE`]
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    taps: Vec<KernelTap>,
}

impl Kernel {
    /// Validate and wrap a list of taps.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::{Kernel, KernelTap};
    ///
    /// // Send everything right
    /// let kernel = Kernel::new(vec![KernelTap::new(1, 0, 1.0)]).unwrap();
    /// assert_eq!(kernel.taps().len(), 1);
    ///
    /// // Half the error would be lost
    /// assert!(Kernel::new(vec![KernelTap::new(1, 0, 0.5)]).is_err());
    /// ```
    pub fn new(taps: Vec<KernelTap>) -> Result<Self, KernelError> {
        if taps.is_empty() {
            return Err(KernelError::Empty);
        }
        for (index, tap) in taps.iter().enumerate() {
            if !tap.weight.is_finite() {
                return Err(KernelError::InvalidWeight { index });
            }
            if tap.dy < 0 {
                return Err(KernelError::NegativeRow { index });
            }
            if tap.dx.unsigned_abs() > MAX_TAP_REACH || tap.dy.unsigned_abs() > MAX_TAP_REACH {
                return Err(KernelError::ReachTooLarge {
                    index,
                    limit: MAX_TAP_REACH,
                });
            }
            if tap.dy == 0 && tap.dx == 0 {
                return Err(KernelError::ZeroOffset { index });
            }
            if tap.dy == 0 && tap.dx < 0 {
                return Err(KernelError::BackwardTap { index });
            }
        }
        let sum: f32 = taps.iter().map(|t| t.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(KernelError::WeightSum { sum });
        }
        Ok(Self { taps })
    }

    /// Build from integer numerators over a common divisor.
    pub fn from_ratios(entries: &[(i32, i32, u8)], divisor: u8) -> Result<Self, KernelError> {
        let divisor = divisor as f32;
        Self::new(
            entries
                .iter()
                .map(|&(dx, dy, w)| KernelTap::new(dx, dy, w as f32 / divisor))
                .collect(),
        )
    }

    /// Tables known to satisfy the invariants skip validation.
    fn from_table(entries: &[(i32, i32, u8)], divisor: u8) -> Self {
        let divisor = divisor as f32;
        Self {
            taps: entries
                .iter()
                .map(|&(dx, dy, w)| KernelTap::new(dx, dy, w as f32 / divisor))
                .collect(),
        }
    }

    /// The classic 4-tap Floyd-Steinberg kernel.
    pub fn floyd_steinberg() -> Self {
        Self::from_table(FLOYD_STEINBERG, FLOYD_STEINBERG_DIVISOR)
    }

    /// The 12-tap Jarvis-Judice-Ninke style bell kernel.
    pub fn jjn_bell() -> Self {
        Self::from_table(JJN_BELL, JJN_BELL_DIVISOR)
    }

    #[inline]
    pub fn taps(&self) -> &[KernelTap] {
        &self.taps
    }

    /// The kernel for right-to-left rows: every `dx` negated.
    ///
    /// Current-row taps of the result point left, so it is not a valid
    /// input to [`Kernel::new`].
    pub fn mirrored(&self) -> Self {
        Self {
            taps: self
                .taps
                .iter()
                .map(|t| KernelTap::new(-t.dx, t.dy, t.weight))
                .collect(),
        }
    }

    /// Largest `|dx|` over all taps.
    pub fn horizontal_reach(&self) -> usize {
        self.taps
            .iter()
            .map(|t| t.dx.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
    }

    /// Largest `dy` over all taps.
    pub fn vertical_reach(&self) -> usize {
        self.taps.iter().map(|t| t.dy as usize).max().unwrap_or(0)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f32 {
        self.taps.iter().map(|t| t.weight).sum()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::floyd_steinberg()
    }
}

/// Kernel selection as it appears in configuration.
///
/// ```yaml
/// kernel:
///   type: custom
///   taps:
///     - { dx: 1, dy: 0, weight: 0.5 }
///     - { dx: 0, dy: 1, weight: 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelChoice {
    #[default]
    FloydSteinberg,
    JjnBell,
    Custom { taps: Vec<KernelTap> },
}

impl KernelChoice {
    /// Build the selected kernel, validating custom taps.
    pub fn build(&self) -> Result<Kernel, KernelError> {
        match self {
            KernelChoice::FloydSteinberg => Ok(Kernel::floyd_steinberg()),
            KernelChoice::JjnBell => Ok(Kernel::jjn_bell()),
            KernelChoice::Custom { taps } => Kernel::new(taps.clone()),
        }
    }
}
