//! Pipeline options and configuration.
//!
//! This module provides the [`DitherOptions`] struct configuring the whole
//! pipeline (preprocessing filters plus the dithering stage) and the
//! [`DitherAlgorithm`] selector. Out-of-range values are rejected up front
//! by [`DitherOptions::validate`] rather than silently substituted.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by option validation and algorithm-name parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Algorithm name did not match any known algorithm.
    ///
    /// There is deliberately no fallback algorithm: a typo in a preset or
    /// flag surfaces here instead of quietly producing Floyd-Steinberg.
    #[error("unknown dither algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// A numeric option was outside its documented range.
    #[error("{option} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Option name as it appears on [`DitherOptions`]
        option: &'static str,
        /// Supplied value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A floating-point option was NaN or infinite.
    #[error("{option} must be a finite number")]
    NotFinite {
        /// Option name as it appears on [`DitherOptions`]
        option: &'static str,
    },
}

/// The seven supported halftoning algorithms.
///
/// Six are error-diffusion kernels; `Bayer` is ordered dithering with a
/// fixed 8x8 threshold matrix. Names round-trip through [`FromStr`] and
/// [`fmt::Display`] using the kebab-case spellings used in preset files
/// and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (divisor 16). The only algorithm
    /// that honors the `serpentine` flag.
    #[default]
    FloydSteinberg,
    /// Atkinson error diffusion (divisor 8, propagates 6/8 of the error).
    Atkinson,
    /// Burkes error diffusion (divisor 32, two rows).
    Burkes,
    /// Sierra error diffusion (divisor 32, three rows).
    Sierra,
    /// Sierra Lite error diffusion (divisor 4, minimal kernel).
    SierraLite,
    /// Stucki error diffusion (divisor 42, three rows).
    Stucki,
    /// Ordered dithering with an 8x8 Bayer matrix. Hard binary output;
    /// ignores `intensity`, `palette_size` and `serpentine`.
    Bayer,
}

impl DitherAlgorithm {
    /// All algorithms, in the order they are presented to users.
    pub const ALL: [DitherAlgorithm; 7] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::SierraLite,
        DitherAlgorithm::Stucki,
        DitherAlgorithm::Bayer,
    ];

    /// The kebab-case name used in presets and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::Burkes => "burkes",
            DitherAlgorithm::Sierra => "sierra",
            DitherAlgorithm::SierraLite => "sierra-lite",
            DitherAlgorithm::Stucki => "stucki",
            DitherAlgorithm::Bayer => "bayer",
        }
    }

    /// Whether this algorithm diffuses quantization error to neighbors.
    pub fn is_error_diffusion(&self) -> bool {
        !matches!(self, DitherAlgorithm::Bayer)
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floyd-steinberg" => Ok(DitherAlgorithm::FloydSteinberg),
            "atkinson" => Ok(DitherAlgorithm::Atkinson),
            "burkes" => Ok(DitherAlgorithm::Burkes),
            "sierra" => Ok(DitherAlgorithm::Sierra),
            "sierra-lite" => Ok(DitherAlgorithm::SierraLite),
            "stucki" => Ok(DitherAlgorithm::Stucki),
            "bayer" => Ok(DitherAlgorithm::Bayer),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Configuration for one pipeline invocation.
///
/// The record is immutable per run: build it, [`validate`](Self::validate)
/// it, then hand it to the pipeline. Defaults match a neutral run —
/// every preprocessing filter at its identity value, Floyd-Steinberg with
/// four quantization levels.
///
/// # Example
///
/// ```
/// use halftone::{DitherAlgorithm, DitherOptions};
///
/// let options = DitherOptions::new()
///     .algorithm(DitherAlgorithm::Atkinson)
///     .palette_size(2)
///     .noise(20.0)
///     .noise_seed(Some(7));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Halftoning algorithm to apply after preprocessing.
    pub algorithm: DitherAlgorithm,

    /// Binarization threshold, 0..=255. Carried for preset compatibility;
    /// the current algorithms derive their own per-pixel thresholds.
    pub threshold: u8,

    /// Error-diffusion strength multiplier (>= 0). 1.0 is faithful
    /// diffusion; 0.0 disables propagation entirely.
    pub intensity: f32,

    /// Number of evenly spaced quantization levels per channel (>= 1).
    /// With 1 level every pixel quantizes to black.
    pub palette_size: u32,

    /// Reverse the horizontal scan on odd rows (Floyd-Steinberg only).
    pub serpentine: bool,

    /// Mosaic block size, 1..=50. 1 disables pixelation.
    pub pixelation_scale: u32,

    /// Sharpen amount, 0..=10. Blended at `amount / 10`.
    pub detail_enhancement: f32,

    /// Additive brightness offset, -100..=100.
    pub brightness: f32,

    /// Midtone gamma control, 0..=2. 1.0 is the identity; the effective
    /// gamma is `1 / max(0.01, midtones)`.
    pub midtones: f32,

    /// Uniform noise amplitude, 0..=100. Each pixel gets one offset in
    /// `[-noise/2, noise/2]` applied to all three color channels.
    pub noise: f32,

    /// Glow amount, 0..=100. Box-blur radius `round(amount / 20)`,
    /// blended at `min(1, amount / 100)`.
    pub glow: f32,

    /// Exposure in hundredths of an EV stop, -100..=100. Channels are
    /// scaled by `2^(exposure/100)`.
    pub exposure: f32,

    /// Seed for the noise generator. `None` seeds from OS entropy;
    /// `Some(seed)` makes the whole pipeline deterministic.
    pub noise_seed: Option<u64>,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::FloydSteinberg,
            threshold: 128,
            intensity: 1.0,
            palette_size: 4,
            serpentine: false,
            pixelation_scale: 1,
            detail_enhancement: 0.0,
            brightness: 0.0,
            midtones: 1.0,
            noise: 0.0,
            glow: 0.0,
            exposure: 0.0,
            noise_seed: None,
        }
    }
}

impl DitherOptions {
    /// Create options with default values.
    ///
    /// This is equivalent to `DitherOptions::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the halftoning algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the binarization threshold.
    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the error-diffusion strength multiplier.
    #[inline]
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the number of quantization levels.
    #[inline]
    pub fn palette_size(mut self, palette_size: u32) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Set serpentine scanning mode.
    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Set the pixelation block size.
    #[inline]
    pub fn pixelation_scale(mut self, scale: u32) -> Self {
        self.pixelation_scale = scale;
        self
    }

    /// Set the sharpen amount.
    #[inline]
    pub fn detail_enhancement(mut self, amount: f32) -> Self {
        self.detail_enhancement = amount;
        self
    }

    /// Set the additive brightness offset.
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the midtone gamma control.
    #[inline]
    pub fn midtones(mut self, midtones: f32) -> Self {
        self.midtones = midtones;
        self
    }

    /// Set the noise amplitude.
    #[inline]
    pub fn noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// Set the glow amount.
    #[inline]
    pub fn glow(mut self, glow: f32) -> Self {
        self.glow = glow;
        self
    }

    /// Set the exposure adjustment.
    #[inline]
    pub fn exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    /// Set the noise seed.
    #[inline]
    pub fn noise_seed(mut self, seed: Option<u64>) -> Self {
        self.noise_seed = seed;
        self
    }

    /// Check every field against its documented range.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in field declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("intensity", self.intensity)?;
        if self.intensity < 0.0 {
            return Err(ConfigError::OutOfRange {
                option: "intensity",
                value: self.intensity as f64,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if self.palette_size < 1 {
            return Err(ConfigError::OutOfRange {
                option: "palette_size",
                value: self.palette_size as f64,
                min: 1.0,
                max: f64::INFINITY,
            });
        }
        check_range_u32("pixelation_scale", self.pixelation_scale, 1, 50)?;
        check_range("detail_enhancement", self.detail_enhancement, 0.0, 10.0)?;
        check_range("brightness", self.brightness, -100.0, 100.0)?;
        check_range("midtones", self.midtones, 0.0, 2.0)?;
        check_range("noise", self.noise, 0.0, 100.0)?;
        check_range("glow", self.glow, 0.0, 100.0)?;
        check_range("exposure", self.exposure, -100.0, 100.0)?;
        Ok(())
    }
}

fn check_finite(option: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { option })
    }
}

fn check_range(option: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    check_finite(option, value)?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            option,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

fn check_range_u32(option: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            option,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}
