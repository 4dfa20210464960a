//! Ordered (Bayer) dithering.
//!
//! Each pixel is thresholded against a tiled 8x8 Bayer matrix, giving the
//! characteristic crosshatch texture with no error propagation at all. The
//! output is strictly binary regardless of palette size, and identical
//! inputs always produce identical outputs.

use crate::buffer::PixelBuffer;
use crate::options::DitherOptions;

/// The standard 8x8 Bayer matrix, values `0..=63`.
const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 48, 12, 60, 3, 51, 15, 63],
    [32, 16, 44, 28, 35, 19, 47, 31],
    [8, 56, 4, 52, 11, 59, 7, 55],
    [40, 24, 36, 20, 43, 27, 39, 23],
    [2, 50, 14, 62, 1, 49, 13, 61],
    [34, 18, 46, 30, 33, 17, 45, 29],
    [10, 58, 6, 54, 9, 57, 5, 53],
    [42, 26, 38, 22, 41, 25, 37, 21],
];

/// Threshold each pixel against the tiled matrix.
///
/// The per-cell threshold is `(m + 0.5) * 255 / 64`, which spreads the 64
/// cutoffs evenly across the byte range. Alpha passes through.
pub(super) fn ordered(mut buffer: PixelBuffer, _options: &DitherOptions) -> PixelBuffer {
    let width = buffer.width();
    let height = buffer.height();
    for y in 0..height {
        for x in 0..width {
            let i = buffer.index(x, y);
            let cell = BAYER_8X8[(y % 8) as usize][(x % 8) as usize];
            let threshold = (cell as f32 + 0.5) * 255.0 / 64.0;
            let value = if buffer.data()[i] as f32 > threshold {
                255
            } else {
                0
            };
            let data = buffer.data_mut();
            data[i] = value;
            data[i + 1] = value;
            data[i + 2] = value;
        }
    }
    buffer
}
