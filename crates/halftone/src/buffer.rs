//! The shared raster data entity.
//!
//! [`PixelBuffer`] is the value that flows through every pipeline stage:
//! a width, a height, and interleaved 8-bit RGBA bytes. Validation happens
//! once at construction; every stage can then assume the length invariant
//! and index without bounds anxiety.

use thiserror::Error;

/// Errors raised when constructing a [`PixelBuffer`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height was zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },

    /// The byte sequence does not match `width * height * 4`.
    #[error("buffer length {len} does not match {width}x{height}x4 = {expected}")]
    LengthMismatch {
        /// Actual byte length supplied
        len: usize,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Expected byte length
        expected: usize,
    },
}

/// An owned RGBA raster.
///
/// The data layout is row-major, four bytes per pixel (R, G, B, A), each
/// byte in `0..=255`. The length invariant `data.len() == width * height * 4`
/// is enforced at construction and preserved by every mutation path.
///
/// Pipeline stages consume a `PixelBuffer` by value and return a new one,
/// so no two stages ever alias the same allocation.
///
/// # Example
///
/// ```
/// use halftone::PixelBuffer;
///
/// let buffer = PixelBuffer::filled(2, 2, [255, 255, 255, 255]).unwrap();
/// assert_eq!(buffer.data().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ZeroDimension`] if either dimension is zero,
    /// or [`BufferError::LengthMismatch`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                len: data.len(),
                width,
                height,
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * 4);
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte offset of the pixel at `(x, y)` (start of its R channel).
    ///
    /// Callers must keep `x < width` and `y < height`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Borrow the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw RGBA bytes.
    ///
    /// The slice length is fixed, so the length invariant cannot be broken
    /// through this accessor.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning the raw RGBA bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
