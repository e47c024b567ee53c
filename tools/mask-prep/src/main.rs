//! mask-prep: synthetic terrain masks and backgrounds for LOOKOUT.
//!
//! Usage:
//!   mask-prep masks --out assets --width 1600 --seed 7
//!   mask-prep backgrounds --out assets --width 1600 --seed 7
//!
//! Masks and backgrounds generated with the same width and seed line up:
//! the mid background is transparent exactly where the mid mask is sky.

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::filter::EnvFilter;

use lookout_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use lookout_core::enums::{Layer, Weather};
use lookout_terrain::assets::{background_file, mask_file, save_png};

const SKY: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GROUND: Rgba<u8> = Rgba([40, 60, 40, 255]);
const HARMONICS: u32 = 5;

#[derive(Parser, Debug)]
#[command(name = "mask-prep")]
#[command(about = "Generate terrain masks and backgrounds for LOOKOUT")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write far_mask.png and mid_mask.png
    Masks {
        #[arg(long)]
        out: PathBuf,
        /// Panorama width in pixels; anything wider than the screen scrolls
        #[arg(long, default_value_t = SCREEN_WIDTH * 2)]
        width: u32,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Write background_{far,mid}_{weather}.png for every weather
    Backgrounds {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = SCREEN_WIDTH * 2)]
        width: u32,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Commands::Masks { out, width, seed } => cmd_masks(&out, width, seed),
        Commands::Backgrounds { out, width, seed } => cmd_backgrounds(&out, width, seed),
    }
}

fn cmd_masks(out: &Path, width: u32, seed: u64) -> Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    for layer in [Layer::Far, Layer::Near] {
        let ridge = Ridge::generate(layer, seed);
        let mask = render_mask(&ridge, width, SCREEN_HEIGHT);
        write(&mask, &out.join(mask_file(layer)))?;
    }
    Ok(())
}

fn cmd_backgrounds(out: &Path, width: u32, seed: u64) -> Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    let far = Ridge::generate(Layer::Far, seed);
    let near = Ridge::generate(Layer::Near, seed);
    for weather in Weather::ALL {
        let palette = Palette::for_weather(weather);
        let far_bg = render_layer(&far, width, SCREEN_HEIGHT, Some(palette.sky), palette.far_hills);
        write(&far_bg, &out.join(background_file(Layer::Far, weather)))?;
        let near_bg = render_layer(&near, width, SCREEN_HEIGHT, None, palette.near_hills);
        write(&near_bg, &out.join(background_file(Layer::Near, weather)))?;
    }
    Ok(())
}

fn write(image: &RgbaImage, path: &Path) -> Result<()> {
    save_png(image, path)?;
    tracing::info!(path = %path.display(), width = image.width(), "wrote");
    Ok(())
}

/// A horizon line as a sum of whole-period sines, so it wraps at any width.
#[derive(Debug, Clone)]
struct Ridge {
    /// Mean horizon as a fraction of the image height.
    base: f64,
    /// (harmonic, amplitude as a fraction of height, phase)
    waves: Vec<(u32, f64, f64)>,
}

impl Ridge {
    fn generate(layer: Layer, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        // Far and mid ridges draw from separate streams of the same seed.
        rng.set_stream(match layer {
            Layer::Far => 0,
            Layer::Near => 1,
        });
        let (base, amplitude) = match layer {
            Layer::Far => (0.45, 0.08),
            Layer::Near => (0.62, 0.12),
        };
        let waves = (1..=HARMONICS)
            .map(|k| {
                let amp = amplitude * rng.gen_range(0.3..1.0) / k as f64;
                (k + rng.gen_range(0..3), amp, rng.gen_range(0.0..TAU))
            })
            .collect();
        Self { base, waves }
    }

    /// First ground row in column `col` of a `width` × `height` image.
    fn row(&self, col: u32, width: u32, height: u32) -> u32 {
        let t = col as f64 / width as f64;
        let offset: f64 = self
            .waves
            .iter()
            .map(|&(k, amp, phase)| amp * (TAU * k as f64 * t + phase).sin())
            .sum();
        let row = ((self.base + offset) * height as f64).round();
        row.clamp(1.0, (height - 1) as f64) as u32
    }
}

/// Dark ground below the ridge, white sky above.
fn render_mask(ridge: &Ridge, width: u32, height: u32) -> RgbaImage {
    render_layer(ridge, width, height, Some(SKY), GROUND)
}

/// `sky` above the ridge (transparent when `None`), `ground` from the ridge down.
fn render_layer(ridge: &Ridge, width: u32, height: u32, sky: Option<Rgba<u8>>, ground: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, sky.unwrap_or(Rgba([0, 0, 0, 0])));
    for col in 0..width {
        for row in ridge.row(col, width, height)..height {
            img.put_pixel(col, row, ground);
        }
    }
    img
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    sky: Rgba<u8>,
    far_hills: Rgba<u8>,
    near_hills: Rgba<u8>,
}

impl Palette {
    fn for_weather(weather: Weather) -> Self {
        let (sky, far_hills, near_hills) = match weather {
            Weather::Clear => ([135, 206, 235], [95, 125, 140], [100, 155, 100]),
            Weather::Rainy => ([110, 120, 135], [80, 90, 100], [70, 110, 75]),
            Weather::Windy => ([160, 195, 215], [105, 130, 140], [115, 150, 95]),
            Weather::Hot => ([235, 200, 150], [150, 125, 100], [150, 140, 80]),
        };
        let opaque = |[r, g, b]: [u8; 3]| Rgba([r, g, b, 255]);
        Self {
            sky: opaque(sky),
            far_hills: opaque(far_hills),
            near_hills: opaque(near_hills),
        }
    }
}
