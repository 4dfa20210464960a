//! The individual preprocessing filter kernels.
//!
//! Each filter mutates the buffer in place (allocating a scratch copy
//! where the kernel reads neighbors) and leaves the dimensions unchanged.
//! All writes clamp to the byte range.

use crate::buffer::PixelBuffer;
use rand::rngs::StdRng;
use rand::Rng;

/// Clamp an accumulated float value into a byte.
#[inline]
pub(crate) fn clamp_byte(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Multiply each color channel by `2^(exposure/100)`.
pub(super) fn apply_exposure(buffer: &mut PixelBuffer, exposure: f32) {
    let factor = 2f32.powf(exposure / 100.0);
    for pixel in buffer.data_mut().chunks_exact_mut(4) {
        for channel in &mut pixel[..3] {
            *channel = clamp_byte(*channel as f32 * factor);
        }
    }
}

/// Add a constant offset to each color channel.
pub(super) fn apply_brightness(buffer: &mut PixelBuffer, brightness: f32) {
    for pixel in buffer.data_mut().chunks_exact_mut(4) {
        for channel in &mut pixel[..3] {
            *channel = clamp_byte(*channel as f32 + brightness);
        }
    }
}

/// Gamma-correct each color channel: `255 * (v/255)^(1/max(0.01, midtones))`.
pub(super) fn apply_midtones(buffer: &mut PixelBuffer, midtones: f32) {
    let gamma = 1.0 / midtones.max(0.01);
    for pixel in buffer.data_mut().chunks_exact_mut(4) {
        for channel in &mut pixel[..3] {
            *channel = clamp_byte(255.0 * (*channel as f32 / 255.0).powf(gamma));
        }
    }
}

/// Add one uniform offset in `[-noise/2, noise/2)` per pixel, shared by
/// all three color channels.
pub(super) fn apply_noise(buffer: &mut PixelBuffer, noise: f32, rng: &mut StdRng) {
    for pixel in buffer.data_mut().chunks_exact_mut(4) {
        let offset = (rng.gen::<f32>() - 0.5) * noise;
        for channel in &mut pixel[..3] {
            *channel = clamp_byte(*channel as f32 + offset);
        }
    }
}

/// Mosaic the image: area-average down to `floor(dim/scale)` cells
/// (minimum 1), then scale back up with nearest-neighbor sampling so the
/// blocks stay hard-edged.
pub(super) fn apply_pixelation(buffer: &mut PixelBuffer, scale: u32) {
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let small_w = (w / scale as usize).max(1);
    let small_h = (h / scale as usize).max(1);

    // Downsample: each cell averages its footprint in the source, so the
    // trailing remainder rows/columns still contribute.
    let src = buffer.data().to_vec();
    let mut small = vec![0u8; small_w * small_h * 4];
    for sy in 0..small_h {
        let y0 = sy * h / small_h;
        let y1 = (sy + 1) * h / small_h;
        for sx in 0..small_w {
            let x0 = sx * w / small_w;
            let x1 = (sx + 1) * w / small_w;
            let mut sums = [0u64; 4];
            let mut count = 0u64;
            for y in y0..y1 {
                for x in x0..x1 {
                    let i = (y * w + x) * 4;
                    for c in 0..4 {
                        sums[c] += src[i + c] as u64;
                    }
                    count += 1;
                }
            }
            let i = (sy * small_w + sx) * 4;
            for c in 0..4 {
                small[i + c] = ((sums[c] + count / 2) / count) as u8;
            }
        }
    }

    // Upsample: nearest neighbor, no smoothing.
    let data = buffer.data_mut();
    for y in 0..h {
        let sy = y * small_h / h;
        for x in 0..w {
            let sx = x * small_w / w;
            let src_i = (sy * small_w + sx) * 4;
            let dst_i = (y * w + x) * 4;
            data[dst_i..dst_i + 4].copy_from_slice(&small[src_i..src_i + 4]);
        }
    }
}

/// 3x3 unsharp kernel, blended with the original at `amount / 10`.
///
/// Border pixels pass through unfiltered; alpha is copied.
pub(super) fn apply_sharpen(buffer: &mut PixelBuffer, amount: f32) {
    const KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];
    const CENTER: f32 = 5.0;

    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let mix = amount / 10.0;

    let src = buffer.data().to_vec();
    let out = buffer.data_mut();
    for y in 1..h.saturating_sub(1) {
        for x in 1..w - 1 {
            for c in 0..3 {
                let mut sum = 0.0f32;
                let mut k = 0;
                for ky in -1i32..=1 {
                    for kx in -1i32..=1 {
                        let ni = ((y as i32 + ky) as usize * w + (x as i32 + kx) as usize) * 4 + c;
                        sum += src[ni] as f32 * KERNEL[k];
                        k += 1;
                    }
                }
                let i = (y * w + x) * 4 + c;
                out[i] = clamp_byte(src[i] as f32 * (1.0 - mix) + sum * mix / CENTER);
            }
        }
    }
}

/// Box blur blended back into the image.
///
/// Radius is `round(amount / 20)` with a floor of 1; the blend fraction
/// is `min(1, amount / 100)`. Windows are clipped at the edges and
/// normalized by the actual sample count. All four channels are blurred,
/// but the output alpha is the original alpha.
pub(super) fn apply_glow(buffer: &mut PixelBuffer, amount: f32) {
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let radius = ((amount / 20.0).round() as i32).max(1);
    let blend = (amount / 100.0).min(1.0);

    let src = buffer.data().to_vec();
    let mut blurred = vec![0u8; src.len()];
    for y in 0..h {
        for x in 0..w {
            let mut sums = [0u32; 4];
            let mut count = 0u32;
            for ky in -radius..=radius {
                for kx in -radius..=radius {
                    let nx = x as i32 + kx;
                    let ny = y as i32 + ky;
                    if nx >= 0 && (nx as usize) < w && ny >= 0 && (ny as usize) < h {
                        let ni = (ny as usize * w + nx as usize) * 4;
                        for c in 0..4 {
                            sums[c] += src[ni + c] as u32;
                        }
                        count += 1;
                    }
                }
            }
            // The window always contains the center pixel, so count >= 1.
            let i = (y * w + x) * 4;
            for c in 0..4 {
                blurred[i + c] = (sums[c] / count) as u8;
            }
        }
    }

    let out = buffer.data_mut();
    for i in (0..src.len()).step_by(4) {
        for c in 0..3 {
            out[i + c] =
                clamp_byte(src[i + c] as f32 * (1.0 - blend) + blurred[i + c] as f32 * blend);
        }
        out[i + 3] = src[i + 3];
    }
}

/// Rec. 601 luminance written to all three color channels; alpha untouched.
pub(super) fn apply_grayscale(buffer: &mut PixelBuffer) {
    for pixel in buffer.data_mut().chunks_exact_mut(4) {
        let gray = clamp_byte(
            pixel[0] as f32 * 0.299 + pixel[1] as f32 * 0.587 + pixel[2] as f32 * 0.114,
        );
        pixel[0] = gray;
        pixel[1] = gray;
        pixel[2] = gray;
    }
}
