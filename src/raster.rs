//! PNG load and save for the CLI.
//!
//! Input PNGs are normalized to 8-bit RGBA at decode time (palette
//! expansion, 16-bit downconversion, alpha synthesis) so the pipeline
//! only ever sees one layout. Output is always 8-bit RGBA.

use crate::error::CliError;
use halftone::PixelBuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Decode a PNG file into an RGBA [`PixelBuffer`].
///
/// # Errors
///
/// Returns [`CliError::PngDecode`] for malformed files and
/// [`CliError::UnsupportedColorType`] if the decoder still yields a
/// layout other than RGBA or grayscale-alpha after normalization.
pub fn load_png(path: &Path) -> Result<PixelBuffer, CliError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(
        png::Transformations::EXPAND | png::Transformations::STRIP_16 | png::Transformations::ALPHA,
    );
    let mut reader = decoder
        .read_info()
        .map_err(|e| CliError::PngDecode(e.to_string()))?;

    let mut raw = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut raw)
        .map_err(|e| CliError::PngDecode(e.to_string()))?;
    raw.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => raw,
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(raw.len() * 2);
            for pair in raw.chunks_exact(2) {
                rgba.extend_from_slice(&[pair[0], pair[0], pair[0], pair[1]]);
            }
            rgba
        }
        other => {
            return Err(CliError::UnsupportedColorType(format!("{other:?}")));
        }
    };

    PixelBuffer::new(info.width, info.height, rgba)
        .map_err(|e| CliError::PngDecode(e.to_string()))
}

/// Encode a [`PixelBuffer`] as an 8-bit RGBA PNG file.
///
/// # Errors
///
/// Returns [`CliError::PngEncode`] if the encoder rejects the data and
/// [`CliError::Io`] if the file cannot be created.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<(), CliError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| CliError::PngEncode(e.to_string()))?;
    writer
        .write_image_data(buffer.data())
        .map_err(|e| CliError::PngEncode(e.to_string()))?;
    Ok(())
}
