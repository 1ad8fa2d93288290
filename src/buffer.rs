//! RGBA8 pixel buffers.
//!
//! [`PixelView`] borrows an interleaved RGBA rectangle with an arbitrary row
//! stride; [`PixelBuffer`] owns one. Both are validated on construction so
//! the algorithms can index rows without bounds surprises.

use crate::color::RgbInt;
use crate::error::QuantizeError;

/// Bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

fn check_shape(
    data_len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), QuantizeError> {
    let row_bytes = width
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| QuantizeError::InvalidBuffer(format!("width {width} overflows")))?;
    if stride < row_bytes {
        return Err(QuantizeError::InvalidBuffer(format!(
            "stride {stride} is smaller than {row_bytes} bytes per row"
        )));
    }
    if height == 0 {
        return Ok(());
    }
    // Zero-width rows still start every `stride` bytes
    let required = stride
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(row_bytes))
        .ok_or_else(|| {
            QuantizeError::InvalidBuffer(format!("{width}x{height} with stride {stride} overflows"))
        })?;
    if data_len < required {
        return Err(QuantizeError::InvalidBuffer(format!(
            "{data_len} bytes is too small for {width}x{height} with stride {stride} ({required} needed)"
        )));
    }
    Ok(())
}

/// A borrowed RGBA8 image.
///
/// Rows start every `stride` bytes; bytes between the end of one row's
/// pixels and the start of the next are padding and never interpreted.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelView<'a> {
    /// Wrap `data` as a `width` x `height` image with the given row stride.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizeError::InvalidBuffer`] if `stride < width * 4` or
    /// `data` is too short to hold every row.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, QuantizeError> {
        check_shape(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Wrap tightly packed rows (`stride == width * 4`).
    ///
    /// # Example
    ///
    /// ```
    /// use palette_dither::PixelView;
    ///
    /// let data = [255u8, 0, 0, 255, 0, 0, 255, 255];
    /// let view = PixelView::packed(&data, 2, 1).unwrap();
    /// assert_eq!(view.pixel(1, 0), [0, 0, 255, 255]);
    /// ```
    pub fn packed(data: &'a [u8], width: usize, height: usize) -> Result<Self, QuantizeError> {
        Self::new(data, width, height, width * BYTES_PER_PIXEL)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The underlying bytes, padding included.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// RGBA bytes of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * BYTES_PER_PIXEL;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// The RGB part of a pixel, or `None` if it is fully transparent.
    #[inline]
    pub fn opaque_rgb(&self, x: usize, y: usize) -> Option<RgbInt> {
        let [r, g, b, a] = self.pixel(x, y);
        (a != 0).then_some(RgbInt::new(r, g, b))
    }

    /// Pixels of row `y` as RGBA chunks, padding excluded.
    pub fn row(&self, y: usize) -> impl Iterator<Item = [u8; 4]> + 'a {
        let start = y * self.stride;
        self.data[start..start + self.width * BYTES_PER_PIXEL]
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Whether any pixel has a non-zero alpha.
    pub fn has_opaque(&self) -> bool {
        (0..self.height).any(|y| self.row(y).any(|p| p[3] != 0))
    }

    /// Copy into an owned buffer with the same shape and stride.
    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            data: self.data.to_vec(),
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }
}

/// An owned RGBA8 image.
///
/// Returned by the quantizer and the ditherer; it keeps the row stride of
/// the source so padding bytes survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    stride: usize,
}

impl PixelBuffer {
    /// A fully transparent black image with packed rows.
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width * BYTES_PER_PIXEL;
        Self {
            data: vec![0; stride * height],
            width,
            height,
            stride,
        }
    }

    /// Take ownership of existing bytes.
    pub fn from_raw(
        data: Vec<u8>,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, QuantizeError> {
        check_shape(data.len(), width, height, stride)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Build a packed image from row-major RGBA pixels.
    pub fn from_rgba(
        width: usize,
        height: usize,
        pixels: &[[u8; 4]],
    ) -> Result<Self, QuantizeError> {
        if pixels.len() != width * height {
            return Err(QuantizeError::InvalidBuffer(format!(
                "{} pixels given for {width}x{height}",
                pixels.len()
            )));
        }
        let data = pixels.iter().flatten().copied().collect();
        Self::from_raw(data, width, height, width * BYTES_PER_PIXEL)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow as a [`PixelView`].
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// RGBA bytes of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.view().pixel(x, y)
    }

    /// Overwrite the RGB part of a pixel, keeping its alpha.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, rgb: RgbInt) {
        let i = y * self.stride + x * BYTES_PER_PIXEL;
        self.data[i] = rgb.r;
        self.data[i + 1] = rgb.g;
        self.data[i + 2] = rgb.b;
    }

    /// The underlying bytes, padding included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Distinct opaque RGB values, in first-appearance order.
    pub fn distinct_colors(&self) -> Vec<RgbInt> {
        let view = self.view();
        let mut seen = std::collections::HashSet::new();
        let mut colors = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(rgb) = view.opaque_rgb(x, y) {
                    if seen.insert(rgb) {
                        colors.push(rgb);
                    }
                }
            }
        }
        colors
    }

    /// Fail unless this buffer can receive the output for `source`.
    pub(crate) fn ensure_shape_of(&self, source: &PixelView<'_>) -> Result<(), QuantizeError> {
        if self.width != source.width() || self.height != source.height() {
            return Err(QuantizeError::DimensionMismatch {
                expected_width: source.width(),
                expected_height: source.height(),
                actual_width: self.width,
                actual_height: self.height,
            });
        }
        Ok(())
    }

    /// Copy every pixel of `source` into this buffer, keeping this
    /// buffer's stride.
    pub(crate) fn copy_pixels_from(&mut self, source: &PixelView<'_>) {
        let row_bytes = self.width * BYTES_PER_PIXEL;
        for y in 0..self.height {
            let from = y * source.stride();
            let to = y * self.stride;
            self.data[to..to + row_bytes].copy_from_slice(&source.data()[from..from + row_bytes]);
        }
    }
}
