//! Test images and constants.

use palette_dither::{PixelBuffer, RgbInt};

/// Fixed seeds used across tests
pub mod seeds {
    pub const DEFAULT: [u32; 4] = [1, 2, 3, 4];
    pub const OTHER: [u32; 4] = [0xDEAD, 0xBEEF, 0xCAFE, 0xF00D];
}

pub const BLACK: RgbInt = RgbInt::new(0, 0, 0);
pub const WHITE: RgbInt = RgbInt::new(255, 255, 255);

/// Every pixel the same opaque color.
pub fn solid(width: usize, height: usize, rgb: RgbInt) -> PixelBuffer {
    PixelBuffer::from_rgba(width, height, &vec![[rgb.r, rgb.g, rgb.b, 255]; width * height])
        .unwrap()
}

/// Black/white checkerboard.
pub fn checkerboard(width: usize, height: usize) -> PixelBuffer {
    let pixels: Vec<[u8; 4]> = (0..width * height)
        .map(|i| {
            let v = if (i % width + i / width) % 2 == 0 { 0 } else { 255 };
            [v, v, v, 255]
        })
        .collect();
    PixelBuffer::from_rgba(width, height, &pixels).unwrap()
}

/// Horizontal gray ramp from black on the left to white on the right.
pub fn gray_ramp(width: usize, height: usize) -> PixelBuffer {
    let pixels: Vec<[u8; 4]> = (0..width * height)
        .map(|i| {
            let x = i % width;
            let v = (x * 255 / (width - 1).max(1)) as u8;
            [v, v, v, 255]
        })
        .collect();
    PixelBuffer::from_rgba(width, height, &pixels).unwrap()
}

/// Four colored quadrants: red, green, blue and yellow.
pub fn quadrants(size: usize) -> PixelBuffer {
    let half = size / 2;
    let pixels: Vec<[u8; 4]> = (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            match (x < half, y < half) {
                (true, true) => [230, 20, 20, 255],
                (false, true) => [20, 200, 40, 255],
                (true, false) => [30, 40, 220, 255],
                (false, false) => [240, 220, 30, 255],
            }
        })
        .collect();
    PixelBuffer::from_rgba(size, size, &pixels).unwrap()
}

/// Raw bytes of a `width` x `height` image with `padding` extra bytes per
/// row, filled from `rgba` and padded with 0xEE.
pub fn padded_bytes(width: usize, height: usize, padding: usize, rgba: [u8; 4]) -> Vec<u8> {
    let stride = width * 4 + padding;
    let mut data = vec![0xEE; stride * height];
    for y in 0..height {
        for x in 0..width {
            let offset = y * stride + x * 4;
            data[offset..offset + 4].copy_from_slice(&rgba);
        }
    }
    data
}
