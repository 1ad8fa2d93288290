//! Weighted k-means palette generation.
//!
//! Clusters are seeded deterministically from a brightness-sorted,
//! PRNG-shuffled view of the histogram, then refined with Lloyd iterations
//! until no center moves more than the configured threshold.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{ColorSpace, DEFAULT_DISTANCE_WEIGHT};
use crate::error::QuantizeError;
use crate::histogram::{HistogramEntry, PixelHistogram};

use super::Palette;

/// Default squared center-movement threshold: half an 8-bit step, squared.
pub const DEFAULT_THRESHOLD: f32 = (0.5 / 255.0) * (0.5 / 255.0);

/// Default cap on refinement iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Tuning for [`generate`].
///
/// # Example
///
/// ```
/// use palette_dither::KMeansOptions;
///
/// let options = KMeansOptions::new().threshold(1e-4).max_iterations(50);
/// assert_eq!(options.max_iterations, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansOptions {
    /// Refinement stops once the largest squared center movement of an
    /// iteration is at or below this value.
    ///
    /// Default: `(0.5/255)²`
    pub threshold: f32,

    /// Hard cap on refinement iterations. Reaching it logs a warning and
    /// returns the centers as they are.
    ///
    /// Default: `300`
    pub max_iterations: usize,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KMeansOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the squared convergence threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the iteration cap.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Pick a palette of `colors` entries for the histogram.
///
/// The result always has exactly `colors` entries when the histogram is not
/// empty; entries may coincide when there are fewer distinct colors than
/// requested. An empty histogram (e.g. a fully transparent image) yields an
/// empty palette.
///
/// # Errors
///
/// Returns [`QuantizeError::InvalidColorCount`] if `colors` is zero.
///
/// # Example
///
/// ```
/// use palette_dither::{generate, KMeansOptions, PixelHistogram, RgbInt, Grayscale, XorShift128};
///
/// let histogram = PixelHistogram::<Grayscale>::from_counts([
///     (RgbInt::new(0, 0, 0), 10),
///     (RgbInt::new(255, 255, 255), 10),
/// ]);
/// let mut rng = XorShift128::new([1, 2, 3, 4]);
/// let palette = generate(&histogram, 2, &mut rng, &KMeansOptions::new()).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
pub fn generate<S, R>(
    histogram: &PixelHistogram<S>,
    colors: usize,
    rng: &mut R,
    options: &KMeansOptions,
) -> Result<Palette<S>, QuantizeError>
where
    S: ColorSpace,
    R: Rng + ?Sized,
{
    if colors == 0 {
        return Err(QuantizeError::InvalidColorCount { requested: colors });
    }

    let entries = histogram.entries();
    if entries.is_empty() {
        tracing::debug!(color_space = %S::KIND, "Empty histogram, returning empty palette");
        return Ok(Palette::default());
    }

    tracing::debug!(
        color_space = %S::KIND,
        colors,
        distinct = entries.len(),
        "Starting k-means"
    );

    let centers = initial_centers(entries, colors, rng);
    let refined = refine(entries, centers, options);

    if refined.converged {
        tracing::debug!(
            iterations = refined.iterations,
            "k-means converged"
        );
    } else {
        tracing::warn!(
            max_iterations = options.max_iterations,
            "k-means stopped at the iteration cap before converging"
        );
    }

    Ok(Palette::new(refined.centers))
}

/// Seed centers: shuffle, stable-sort by brightness, then take evenly spaced
/// positions from darkest to brightest.
fn initial_centers<S, R>(entries: &[HistogramEntry<S>], colors: usize, rng: &mut R) -> Vec<S>
where
    S: ColorSpace,
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.shuffle(rng);

    let brightness: Vec<f32> = entries.iter().map(|e| e.color.brightness()).collect();
    // sort_by is stable, so equally bright entries keep their shuffled order
    order.sort_by(|&a, &b| brightness[a].total_cmp(&brightness[b]));

    let last = order.len() - 1;
    (0..colors)
        .map(|i| {
            let position = if colors == 1 { 0 } else { i * last / (colors - 1) };
            entries[order[position]].color
        })
        .collect()
}

struct Refinement<S> {
    centers: Vec<S>,
    iterations: usize,
    converged: bool,
}

/// Index of the nearest center; the earliest one wins ties.
fn nearest_center<S: ColorSpace>(centers: &[S], color: &S) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let dist = color.distance_sq(center, DEFAULT_DISTANCE_WEIGHT);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Lloyd iterations, repeated while some center still moves more than the
/// threshold.
fn refine<S: ColorSpace>(
    entries: &[HistogramEntry<S>],
    mut centers: Vec<S>,
    options: &KMeansOptions,
) -> Refinement<S> {
    let mut sums = vec![[0.0f64; 3]; centers.len()];
    let mut totals = vec![0u64; centers.len()];

    for iteration in 1..=options.max_iterations {
        sums.fill([0.0; 3]);
        totals.fill(0);

        for entry in entries {
            let nearest = nearest_center(&centers, &entry.color);
            let weight = entry.weight as f64;
            for (sum, value) in sums[nearest].iter_mut().zip(entry.color.channels()) {
                *sum += value as f64 * weight;
            }
            totals[nearest] += entry.weight as u64;
        }

        let mut max_movement = 0.0f32;
        for ((center, sum), &total) in centers.iter_mut().zip(&sums).zip(&totals) {
            // Empty clusters keep their center
            if total == 0 {
                continue;
            }
            let total = total as f64;
            let mean = S::from_channels(sum.map(|s| (s / total) as f32));
            max_movement = max_movement.max(center.distance_sq(&mean, DEFAULT_DISTANCE_WEIGHT));
            *center = mean;
        }

        tracing::trace!(iteration, max_movement, "k-means iteration");

        if max_movement <= options.threshold {
            return Refinement {
                centers,
                iterations: iteration,
                converged: true,
            };
        }
    }

    Refinement {
        centers,
        iterations: options.max_iterations,
        converged: false,
    }
}
