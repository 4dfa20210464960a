use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherlab::error::CliError;
use ditherlab::preset::Preset;
use ditherlab::raster;
use halftone::{encode_svg, process};

#[derive(Parser)]
#[command(name = "ditherlab")]
#[command(about = "Halftone raster images and re-encode them as compact SVG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG image and write PNG and/or SVG output
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path (defaults to "<input>-dithered.png")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the result as an SVG document to this path
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Preset file with the full option set
        #[arg(short, long)]
        preset: Option<PathBuf>,

        /// Seed for the noise generator (makes runs reproducible)
        #[arg(long)]
        seed: Option<u64>,

        /// Dither algorithm: floyd-steinberg, atkinson, burkes, sierra,
        /// sierra-lite, stucki or bayer
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Binarization threshold (0-255)
        #[arg(long)]
        threshold: Option<u8>,

        /// Error diffusion strength (0.0 disables diffusion, 1.0 is faithful)
        #[arg(long)]
        intensity: Option<f32>,

        /// Number of gray levels in the output
        #[arg(long)]
        palette_size: Option<u32>,

        /// Reverse the scan direction on odd rows (Floyd-Steinberg only)
        #[arg(long)]
        serpentine: Option<bool>,

        /// Mosaic block size (1 disables pixelation)
        #[arg(long)]
        pixelation_scale: Option<u32>,

        /// Sharpen amount (0-10)
        #[arg(long)]
        detail_enhancement: Option<f32>,

        /// Additive brightness offset (-100 to 100)
        #[arg(long)]
        brightness: Option<f32>,

        /// Midtone gamma control (0-2, 1.0 is neutral)
        #[arg(long)]
        midtones: Option<f32>,

        /// Uniform noise amplitude (0-100)
        #[arg(long)]
        noise: Option<f32>,

        /// Glow amount (0-100)
        #[arg(long)]
        glow: Option<f32>,

        /// Exposure adjustment (-100 to 100)
        #[arg(long)]
        exposure: Option<f32>,
    },
    /// Write a preset file, optionally with randomized settings
    Preset {
        /// Output preset file path
        #[arg(short, long, default_value = "preset.json")]
        output: PathBuf,

        /// Randomize every tunable field
        #[arg(long)]
        randomize: bool,

        /// Seed for randomization (makes --randomize reproducible)
        #[arg(long)]
        seed: Option<u64>,

        /// Dither algorithm to store in the preset
        #[arg(short, long)]
        algorithm: Option<String>,
    },
}

#[derive(Default)]
struct Overrides {
    algorithm: Option<String>,
    threshold: Option<u8>,
    intensity: Option<f32>,
    palette_size: Option<u32>,
    serpentine: Option<bool>,
    pixelation_scale: Option<u32>,
    detail_enhancement: Option<f32>,
    brightness: Option<f32>,
    midtones: Option<f32>,
    noise: Option<f32>,
    glow: Option<f32>,
    exposure: Option<f32>,
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dither {
            input,
            output,
            svg,
            preset,
            seed,
            algorithm,
            threshold,
            intensity,
            palette_size,
            serpentine,
            pixelation_scale,
            detail_enhancement,
            brightness,
            midtones,
            noise,
            glow,
            exposure,
        }) => run_dither_command(
            &input,
            output,
            svg,
            preset.as_deref(),
            Overrides {
                algorithm,
                threshold,
                intensity,
                palette_size,
                serpentine,
                pixelation_scale,
                detail_enhancement,
                brightness,
                midtones,
                noise,
                glow,
                exposure,
                seed,
            },
        ),
        Some(Commands::Preset {
            output,
            randomize,
            seed,
            algorithm,
        }) => run_preset_command(&output, randomize, seed, algorithm),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Load, process and write one image.
fn run_dither_command(
    input: &Path,
    output: Option<PathBuf>,
    svg: Option<PathBuf>,
    preset_path: Option<&Path>,
    overrides: Overrides,
) -> anyhow::Result<()> {
    init_tracing();

    let mut preset = match preset_path {
        Some(path) => Preset::load(path)?,
        None => Preset::default(),
    };
    apply_overrides(&mut preset, &overrides);
    let options = preset.to_options()?;

    let buffer = raster::load_png(input)?;
    tracing::debug!(
        input = %input.display(),
        width = buffer.width(),
        height = buffer.height(),
        algorithm = %options.algorithm,
        "processing image"
    );
    let dithered = process(buffer, &options).map_err(CliError::from)?;

    if let Some(svg_path) = &svg {
        let document = encode_svg(&dithered);
        std::fs::write(svg_path, &document)?;
        println!("Wrote {} ({} bytes)", svg_path.display(), document.len());
    }

    // Skip the PNG when the caller only asked for SVG.
    if output.is_some() || svg.is_none() {
        let png_path = output.unwrap_or_else(|| default_output_path(input));
        raster::save_png(&png_path, &dithered)?;
        println!("Wrote {}", png_path.display());
    }

    Ok(())
}

/// Write a preset file.
fn run_preset_command(
    output: &Path,
    randomize: bool,
    seed: Option<u64>,
    algorithm: Option<String>,
) -> anyhow::Result<()> {
    init_tracing();

    let mut preset = Preset::default();
    if let Some(algorithm) = algorithm {
        preset.algorithm = algorithm;
    }
    if randomize {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        preset.randomize(&mut rng);
    }

    // Reject bad algorithm names before writing anything.
    preset.to_options()?;
    preset.save(output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Display usage information when invoked without a subcommand.
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Ditherlab v{VERSION}");
    println!("Halftone raster images and re-encode them as compact SVG\n");
    println!("Commands:");
    println!("  ditherlab dither   Dither a PNG and write PNG/SVG output");
    println!("  ditherlab preset   Write a preset file");
    println!("\nRun 'ditherlab --help' for more details.");
}

/// Minimal logging for CLI
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherlab=warn,halftone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn apply_overrides(preset: &mut Preset, overrides: &Overrides) {
    if let Some(algorithm) = &overrides.algorithm {
        preset.algorithm = algorithm.clone();
    }
    if let Some(threshold) = overrides.threshold {
        preset.threshold = threshold;
    }
    if let Some(intensity) = overrides.intensity {
        preset.intensity = intensity;
    }
    if let Some(palette_size) = overrides.palette_size {
        preset.palette_size = palette_size;
    }
    if let Some(serpentine) = overrides.serpentine {
        preset.serpentine = serpentine;
    }
    if let Some(scale) = overrides.pixelation_scale {
        preset.pixelation_scale = scale;
    }
    if let Some(amount) = overrides.detail_enhancement {
        preset.detail_enhancement = amount;
    }
    if let Some(brightness) = overrides.brightness {
        preset.brightness = brightness;
    }
    if let Some(midtones) = overrides.midtones {
        preset.midtones = midtones;
    }
    if let Some(noise) = overrides.noise {
        preset.noise = noise;
    }
    if let Some(glow) = overrides.glow {
        preset.glow = glow;
    }
    if let Some(exposure) = overrides.exposure {
        preset.exposure = exposure;
    }
    if let Some(seed) = overrides.seed {
        preset.noise_seed = Some(seed);
    }
}

/// "photo.png" becomes "photo-dithered.png" alongside the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}-dithered.png"))
}
