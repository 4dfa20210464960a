//! Unified error type for the halftone public API.
//!
//! [`HalftoneError`] wraps the crate's typed errors into a single enum for
//! convenient `?` propagation in application code.

use crate::buffer::BufferError;
use crate::options::ConfigError;
use thiserror::Error;

/// Unified error type for the halftone public API.
///
/// # Example
///
/// ```
/// use halftone::{HalftoneError, PixelBuffer};
///
/// fn build(width: u32, height: u32, data: Vec<u8>) -> Result<PixelBuffer, HalftoneError> {
///     let buffer = PixelBuffer::new(width, height, data)?;
///     Ok(buffer)
/// }
/// ```
#[derive(Debug, Error)]
pub enum HalftoneError {
    /// Invalid input buffer (length mismatch, zero dimensions).
    #[error("invalid input: {0}")]
    Buffer(#[from] BufferError),

    /// Invalid configuration (out-of-range option, unknown algorithm name).
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
