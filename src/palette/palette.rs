//! Ordered color palette with nearest-color lookup.

use crate::color::{ColorSpace, RgbInt};

/// An ordered list of colors in one color space.
///
/// Entries may coincide (k-means can converge two clusters onto the same
/// center); lookups always return the first of equally near entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<S> {
    colors: Vec<S>,
}

impl<S> Default for Palette<S> {
    fn default() -> Self {
        Self { colors: Vec::new() }
    }
}

impl<S> Palette<S> {
    #[inline]
    pub fn new(colors: Vec<S>) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[S] {
        &self.colors
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.colors.iter()
    }

    pub fn into_vec(self) -> Vec<S> {
        self.colors
    }
}

impl<S: ColorSpace> Palette<S> {
    /// Convert 8-bit colors into this palette's color space.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::{Grayscale, Palette, RgbInt};
    ///
    /// let palette = Palette::<Grayscale>::from_rgb(&[
    ///     RgbInt::new(0, 0, 0),
    ///     RgbInt::new(255, 255, 255),
    /// ]);
    /// let (index, _) = palette.find_nearest(&Grayscale::new(0.8), 1.0).unwrap();
    /// assert_eq!(index, 1);
    /// ```
    pub fn from_rgb(colors: &[RgbInt]) -> Self {
        Self::new(colors.iter().map(|&rgb| S::from_rgb(rgb)).collect())
    }

    /// Index and squared distance of the entry nearest to `color`.
    ///
    /// `extra_weight` is forwarded to [`ColorSpace::distance_sq`]. Ties go
    /// to the earlier entry. Returns `None` for an empty palette.
    pub fn find_nearest(&self, color: &S, extra_weight: f32) -> Option<(usize, f32)> {
        // Linear scan; palettes here are small
        let mut best: Option<(usize, f32)> = None;
        for (i, entry) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(entry, extra_weight);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best
    }

    /// The palette converted to 8-bit RGB, in order.
    pub fn to_rgb(&self) -> Vec<RgbInt> {
        self.colors.iter().map(ColorSpace::to_rgb).collect()
    }
}

impl<S> FromIterator<S> for Palette<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, S> IntoIterator for &'a Palette<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
