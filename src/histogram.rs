//! Distinct-color histogram of an image.

use std::collections::HashMap;

use crate::buffer::PixelView;
use crate::color::{ColorSpace, RgbInt};

/// One distinct opaque color and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramEntry<S> {
    /// The source 8-bit color.
    pub rgb: RgbInt,
    /// `rgb` converted into the working color space.
    pub color: S,
    /// Number of pixels with this color (always at least 1).
    pub weight: u32,
}

/// Distinct opaque colors of an image with occurrence counts.
///
/// Entries keep the order in which each color first appears in a row-major
/// scan, which makes palette generation reproducible for a fixed seed.
/// Fully transparent pixels are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelHistogram<S> {
    entries: Vec<HistogramEntry<S>>,
}

impl<S: ColorSpace> PixelHistogram<S> {
    /// Count the opaque colors of `view`.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::{PixelHistogram, PixelView, RgbFloat};
    ///
    /// let data = [0u8, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255, 0];
    /// let view = PixelView::packed(&data, 3, 1).unwrap();
    /// let histogram = PixelHistogram::<RgbFloat>::from_view(&view);
    ///
    /// // The white pixel is transparent
    /// assert_eq!(histogram.len(), 1);
    /// assert_eq!(histogram.entries()[0].weight, 2);
    /// ```
    pub fn from_view(view: &PixelView<'_>) -> Self {
        let mut index: HashMap<u32, usize> = HashMap::new();
        let mut entries: Vec<HistogramEntry<S>> = Vec::new();

        for y in 0..view.height() {
            for [r, g, b, a] in view.row(y) {
                if a == 0 {
                    continue;
                }
                let rgb = RgbInt::new(r, g, b);
                match index.get(&rgb.packed()) {
                    Some(&i) => entries[i].weight += 1,
                    None => {
                        index.insert(rgb.packed(), entries.len());
                        entries.push(HistogramEntry {
                            rgb,
                            color: S::from_rgb(rgb),
                            weight: 1,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            color_space = %S::KIND,
            distinct = entries.len(),
            width = view.width(),
            height = view.height(),
            "Built pixel histogram"
        );

        Self { entries }
    }

    /// Build from `(color, count)` pairs, merging duplicates and dropping
    /// zero counts.
    pub fn from_counts(counts: impl IntoIterator<Item = (RgbInt, u32)>) -> Self {
        let mut index: HashMap<u32, usize> = HashMap::new();
        let mut entries: Vec<HistogramEntry<S>> = Vec::new();
        for (rgb, weight) in counts {
            if weight == 0 {
                continue;
            }
            match index.get(&rgb.packed()) {
                Some(&i) => entries[i].weight = entries[i].weight.saturating_add(weight),
                None => {
                    index.insert(rgb.packed(), entries.len());
                    entries.push(HistogramEntry {
                        rgb,
                        color: S::from_rgb(rgb),
                        weight,
                    });
                }
            }
        }
        Self { entries }
    }
}

impl<S> PixelHistogram<S> {
    /// Entries in first-appearance order.
    #[inline]
    pub fn entries(&self) -> &[HistogramEntry<S>] {
        &self.entries
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of opaque pixels counted.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| e.weight as u64).sum()
    }
}
