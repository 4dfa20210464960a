//! Test fixtures: raster builders and PNG file helpers.

use halftone::PixelBuffer;
use std::path::Path;

/// Buffer with every pixel set to the same gray value.
pub fn solid_gray(width: u32, height: u32, value: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, [value, value, value, 255]).unwrap()
}

/// Buffer sweeping a horizontal gradient from black to white.
pub fn horizontal_gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

/// Buffer where `dark_at` decides black vs white per pixel.
pub fn binary_pattern(width: u32, height: u32, dark_at: impl Fn(u32, u32) -> bool) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if dark_at(x, y) { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

/// Write a buffer as an RGBA PNG for load-path tests.
pub fn write_png(path: &Path, buffer: &PixelBuffer) {
    ditherlab::raster::save_png(path, buffer).unwrap();
}
