//! Preset files: JSON snapshots of a full option set.
//!
//! A preset stores the algorithm by its kebab-case name so files stay
//! hand-editable; every field is optional and falls back to the pipeline
//! default. Unknown fields are rejected to catch typos early.

use crate::error::CliError;
use halftone::{DitherAlgorithm, DitherOptions};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A serializable option set.
///
/// # Example
///
/// ```
/// use ditherlab::preset::Preset;
///
/// let preset: Preset = serde_json::from_str(
///     r#"{ "algorithm": "atkinson", "palette_size": 2 }"#,
/// ).unwrap();
/// let options = preset.to_options().unwrap();
/// assert_eq!(options.palette_size, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    #[serde(default = "default_palette_size")]
    pub palette_size: u32,
    #[serde(default)]
    pub serpentine: bool,
    #[serde(default = "default_pixelation_scale")]
    pub pixelation_scale: u32,
    #[serde(default)]
    pub detail_enhancement: f32,
    #[serde(default)]
    pub brightness: f32,
    #[serde(default = "default_midtones")]
    pub midtones: f32,
    #[serde(default)]
    pub noise: f32,
    #[serde(default)]
    pub glow: f32,
    #[serde(default)]
    pub exposure: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_seed: Option<u64>,
}

fn default_algorithm() -> String {
    DitherAlgorithm::FloydSteinberg.as_str().to_string()
}

fn default_threshold() -> u8 {
    128
}

fn default_intensity() -> f32 {
    1.0
}

fn default_palette_size() -> u32 {
    4
}

fn default_pixelation_scale() -> u32 {
    1
}

fn default_midtones() -> f32 {
    1.0
}

impl Default for Preset {
    fn default() -> Self {
        Self::from_options(&DitherOptions::default())
    }
}

impl Preset {
    /// Snapshot an option set into preset form.
    pub fn from_options(options: &DitherOptions) -> Self {
        Self {
            algorithm: options.algorithm.as_str().to_string(),
            threshold: options.threshold,
            intensity: options.intensity,
            palette_size: options.palette_size,
            serpentine: options.serpentine,
            pixelation_scale: options.pixelation_scale,
            detail_enhancement: options.detail_enhancement,
            brightness: options.brightness,
            midtones: options.midtones,
            noise: options.noise,
            glow: options.glow,
            exposure: options.exposure,
            noise_seed: options.noise_seed,
        }
    }

    /// Resolve the preset into validated pipeline options.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Pipeline`] when the algorithm name is unknown
    /// or any field is out of range.
    pub fn to_options(&self) -> Result<DitherOptions, CliError> {
        let algorithm: DitherAlgorithm = self
            .algorithm
            .parse()
            .map_err(halftone::HalftoneError::from)?;
        let options = DitherOptions {
            algorithm,
            threshold: self.threshold,
            intensity: self.intensity,
            palette_size: self.palette_size,
            serpentine: self.serpentine,
            pixelation_scale: self.pixelation_scale,
            detail_enhancement: self.detail_enhancement,
            brightness: self.brightness,
            midtones: self.midtones,
            noise: self.noise,
            glow: self.glow,
            exposure: self.exposure,
            noise_seed: self.noise_seed,
        };
        options.validate().map_err(halftone::HalftoneError::from)?;
        Ok(options)
    }

    /// Replace every tunable field with a value drawn uniformly from its
    /// range. The algorithm and noise seed are left as they are.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.threshold = rng.gen_range(0..=255);
        self.intensity = round2(rng.gen::<f32>() * 2.0);
        self.palette_size = rng.gen_range(2..=8);
        self.serpentine = rng.gen_bool(0.5);
        self.pixelation_scale = rng.gen_range(1..=10);
        self.detail_enhancement = rng.gen_range(0..=10) as f32;
        self.brightness = rng.gen_range(-100..=100) as f32;
        self.midtones = round2(rng.gen::<f32>() * 2.0);
        self.noise = rng.gen_range(0..=100) as f32;
        self.glow = rng.gen_range(0..=100) as f32;
        self.exposure = rng.gen_range(0..=100) as f32;
    }

    /// Read and parse a preset file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Preset`] for malformed JSON and
    /// [`CliError::Io`] for filesystem failures.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| CliError::Preset(e.to_string()))
    }

    /// Write the preset as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let text =
            serde_json::to_string_pretty(self).map_err(|e| CliError::Preset(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Round to two decimal places, matching how presets display fractions.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_default_preset_matches_default_options() {
        let options = Preset::default().to_options().unwrap();
        assert_eq!(options, DitherOptions::default());
    }

    #[test]
    fn test_options_round_trip_through_json() {
        let options = DitherOptions::new()
            .algorithm(DitherAlgorithm::SierraLite)
            .palette_size(3)
            .serpentine(true)
            .noise(12.0)
            .noise_seed(Some(77));
        let preset = Preset::from_options(&options);
        let json = serde_json::to_string(&preset).unwrap();
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_options().unwrap(), options);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let preset: Preset = serde_json::from_str(r#"{ "algorithm": "bayer" }"#).unwrap();
        assert_eq!(preset.threshold, 128);
        assert_eq!(preset.palette_size, 4);
        assert!((preset.midtones - 1.0).abs() < f32::EPSILON);
        assert!(preset.noise_seed.is_none());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<Preset, _> = serde_json::from_str(r#"{ "treshold": 10 }"#);
        assert!(result.is_err(), "misspelled field must not parse");
    }

    #[test]
    fn test_unknown_algorithm_fails_resolution() {
        let preset: Preset = serde_json::from_str(r#"{ "algorithm": "ostromoukhov" }"#).unwrap();
        let err = preset.to_options().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pipeline error: invalid configuration: unknown dither algorithm 'ostromoukhov'"
        );
    }

    #[test]
    fn test_out_of_range_field_fails_resolution() {
        let preset: Preset = serde_json::from_str(r#"{ "glow": 300.0 }"#).unwrap();
        assert!(preset.to_options().is_err());
    }

    #[test]
    fn test_randomize_stays_in_range_and_keeps_algorithm() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let mut preset = Preset {
                algorithm: "stucki".to_string(),
                ..Preset::default()
            };
            preset.randomize(&mut rng);
            assert_eq!(preset.algorithm, "stucki");
            assert!((2..=8).contains(&preset.palette_size));
            assert!((1..=10).contains(&preset.pixelation_scale));
            assert!((0.0..=2.0).contains(&preset.intensity));
            assert!((0.0..=2.0).contains(&preset.midtones));
            assert!((-100.0..=100.0).contains(&preset.brightness));
            assert!((0.0..=100.0).contains(&preset.noise));
            assert!((0.0..=100.0).contains(&preset.glow));
            assert!((0.0..=100.0).contains(&preset.exposure));
            assert!(
                preset.to_options().is_ok(),
                "randomized presets must always validate"
            );
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preset.json");
        let mut preset = Preset::default();
        preset.algorithm = "sierra".to_string();
        preset.brightness = -20.0;
        preset.save(&path).unwrap();
        let loaded = Preset::load(&path).unwrap();
        assert_eq!(loaded, preset);
    }
}
