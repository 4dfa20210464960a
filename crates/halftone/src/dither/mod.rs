//! Halftoning: reduce a grayscale raster to a small tonal palette.
//!
//! Six error-diffusion kernels plus ordered Bayer dithering. Error
//! diffusion quantizes each pixel to the nearest palette level and pushes
//! the residual onto unprocessed neighbors through a weight table;
//! everything runs on a single clamped byte buffer, so the diffused error
//! saturates at the byte range exactly like the rendered output.

mod bayer;
mod kernel;

use crate::buffer::PixelBuffer;
use crate::options::{DitherAlgorithm, DitherOptions};
use tracing::debug;

/// Apply the configured halftoning algorithm.
///
/// Expects a preprocessed buffer (all color channels equal); the red
/// channel is treated as the luminance source and the result is written
/// back to all three color channels. Alpha passes through.
///
/// Serpentine scanning applies only to Floyd-Steinberg; the other
/// kernels always scan left to right.
///
/// # Example
///
/// ```
/// use halftone::{dither, DitherOptions, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(4, 4, [200, 200, 200, 255]).unwrap();
/// let options = DitherOptions::new().palette_size(2);
/// let out = dither(buffer, &options);
/// assert!(out.data().iter().step_by(4).all(|&v| v == 0 || v == 255));
/// ```
pub fn dither(buffer: PixelBuffer, options: &DitherOptions) -> PixelBuffer {
    debug!(
        algorithm = %options.algorithm,
        palette_size = options.palette_size,
        serpentine = options.serpentine,
        "dithering image"
    );
    match options.algorithm {
        DitherAlgorithm::FloydSteinberg => {
            diffuse(buffer, kernel::FLOYD_STEINBERG, options, options.serpentine)
        }
        DitherAlgorithm::Atkinson => diffuse(buffer, kernel::ATKINSON, options, false),
        DitherAlgorithm::Burkes => diffuse(buffer, kernel::BURKES, options, false),
        DitherAlgorithm::Sierra => diffuse(buffer, kernel::SIERRA, options, false),
        DitherAlgorithm::SierraLite => diffuse(buffer, kernel::SIERRA_LITE, options, false),
        DitherAlgorithm::Stucki => diffuse(buffer, kernel::STUCKI, options, false),
        DitherAlgorithm::Bayer => bayer::ordered(buffer, options),
    }
}

/// Snap a luminance value to the nearest level of an evenly spaced
/// `palette_size`-entry gray palette over `0..=255`.
fn quantize(value: f32, palette_size: u32) -> f32 {
    if palette_size <= 1 {
        return 0.0;
    }
    let step = 255.0 / (palette_size - 1) as f32;
    ((value / step).round() * step).clamp(0.0, 255.0)
}

/// Error-diffusion scan over the red channel.
///
/// The buffer doubles as the working error store: each neighbor update
/// reads the current byte, adds its weighted share, clamps, and writes the
/// byte back. On serpentine rows the horizontal kernel offsets are
/// mirrored to match the reversed scan direction.
fn diffuse(
    mut buffer: PixelBuffer,
    kernel: kernel::Kernel,
    options: &DitherOptions,
    serpentine: bool,
) -> PixelBuffer {
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let intensity = options.intensity;
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        let reverse = serpentine && y % 2 == 1;
        let xs: Box<dyn Iterator<Item = i32>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };
        for x in xs {
            let i = buffer.index(x as u32, y as u32);
            let old = buffer.data()[i] as f32;
            let new = quantize(old, options.palette_size);
            let quantized = new.round() as u8;
            {
                let data = buffer.data_mut();
                data[i] = quantized;
                data[i + 1] = quantized;
                data[i + 2] = quantized;
            }

            let error = (old - new) * intensity;
            if error == 0.0 {
                continue;
            }
            for &(dx, dy, weight) in kernel.entries {
                let effective_dx = if reverse { -dx } else { dx };
                let nx = x + effective_dx;
                let ny = y + dy;
                if nx < 0 || nx >= width || ny >= height {
                    continue;
                }
                let ni = buffer.index(nx as u32, ny as u32);
                let data = buffer.data_mut();
                let updated = (data[ni] as f32 + error * weight as f32 / divisor)
                    .clamp(0.0, 255.0)
                    .round() as u8;
                data[ni] = updated;
                data[ni + 1] = updated;
                data[ni + 2] = updated;
            }
        }
    }
    buffer
}
