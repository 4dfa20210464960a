//! Image halftoning pipeline: preprocess, dither, and vectorize RGBA
//! rasters.
//!
//! The crate is organized around a single value type, [`PixelBuffer`],
//! that flows through three stages:
//!
//! 1. [`Preprocessor`] applies tone adjustments (exposure, brightness,
//!    midtones, noise, pixelation, detail enhancement, glow) and converts
//!    to grayscale.
//! 2. [`dither`] reduces the grayscale image to a small tonal palette
//!    using error diffusion or ordered dithering.
//! 3. [`encode_svg`] turns the dithered raster into a size-bounded SVG
//!    document of black rects.
//!
//! [`process`] runs the first two stages with validation; the SVG stage
//! is separate because not every caller wants vector output.
//!
//! # Example
//!
//! ```
//! use halftone::{encode_svg, process, DitherAlgorithm, DitherOptions, PixelBuffer};
//!
//! let buffer = PixelBuffer::filled(16, 16, [180, 180, 180, 255])?;
//! let options = DitherOptions::new()
//!     .algorithm(DitherAlgorithm::Atkinson)
//!     .palette_size(2);
//!
//! let dithered = process(buffer, &options)?;
//! let svg = encode_svg(&dithered);
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), halftone::HalftoneError>(())
//! ```

pub mod buffer;
pub mod dither;
pub mod error;
pub mod options;
pub mod preprocess;
pub mod vector;

#[cfg(test)]
mod domain_tests;

pub use buffer::{BufferError, PixelBuffer};
pub use dither::dither;
pub use error::HalftoneError;
pub use options::{ConfigError, DitherAlgorithm, DitherOptions};
pub use preprocess::Preprocessor;
pub use vector::encode_svg;

/// Validate the options, then preprocess and dither the buffer.
///
/// # Errors
///
/// Returns [`HalftoneError::Config`] when any option is out of range.
pub fn process(buffer: PixelBuffer, options: &DitherOptions) -> Result<PixelBuffer, HalftoneError> {
    options.validate()?;
    let prepared = Preprocessor::new(options).process(buffer);
    Ok(dither(prepared, options))
}
