//! Ditherlab - halftone raster images and re-encode them as compact SVG.
//!
//! The processing pipeline lives in the `halftone` crate; this library
//! exposes the CLI's support modules for integration testing.

pub mod error;
pub mod preset;
pub mod raster;
