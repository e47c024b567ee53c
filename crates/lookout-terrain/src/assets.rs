//! Asset boundary: the rasters the game reads at startup.
//!
//! Every asset is optional. A file that is missing or fails to decode is
//! replaced by a flat-colour placeholder of the asset's nominal size and a
//! warning is logged; startup never fails on art.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use lookout_core::constants::*;
use lookout_core::enums::{Layer, Weather};
use lookout_core::error::LookoutError;

use crate::mask::{TerrainLayers, TerrainMask};

/// Sprites drawn on top of the layers.
#[derive(Debug, Clone)]
pub struct Sprites {
    pub fire: RgbaImage,
    pub smoke: RgbaImage,
    pub overlay: RgbaImage,
    pub crosshair: RgbaImage,
}

/// Everything the renderer and the projector need.
#[derive(Debug, Clone)]
pub struct AssetSet {
    pub near_background: RgbaImage,
    pub far_background: RgbaImage,
    pub masks: TerrainLayers,
    pub sprites: Sprites,
}

impl AssetSet {
    /// Load all assets from `dir`. Backgrounds are chosen by `weather`.
    pub fn load(dir: &Path, weather: Weather) -> Self {
        let screen = (SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            near_background: load_or_placeholder(
                &dir.join(background_file(Layer::Near, weather)),
                screen,
                NEAR_BACKGROUND_FALLBACK,
            ),
            far_background: load_or_placeholder(
                &dir.join(background_file(Layer::Far, weather)),
                screen,
                FAR_BACKGROUND_FALLBACK,
            ),
            masks: TerrainLayers::new(
                TerrainMask::new(load_or_placeholder(
                    &dir.join(mask_file(Layer::Near)),
                    screen,
                    MASK_FALLBACK,
                )),
                TerrainMask::new(load_or_placeholder(
                    &dir.join(mask_file(Layer::Far)),
                    screen,
                    MASK_FALLBACK,
                )),
            ),
            sprites: Sprites {
                fire: load_or_placeholder(&dir.join("fire.png"), FIRE_SPRITE_SIZE, FIRE_FALLBACK),
                smoke: load_or_placeholder(&dir.join("smoke.png"), SMOKE_SPRITE_SIZE, SMOKE_FALLBACK),
                overlay: load_or_placeholder(
                    &dir.join("osborne_overlay.png"),
                    screen,
                    OVERLAY_FALLBACK,
                ),
                crosshair: load_or_placeholder(
                    &dir.join("crosshair.png"),
                    CROSSHAIR_SPRITE_SIZE,
                    CROSSHAIR_FALLBACK,
                ),
            },
        }
    }

    /// All-placeholder set, as if the asset directory were empty.
    pub fn placeholders() -> Self {
        let screen = (SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            near_background: placeholder(screen, NEAR_BACKGROUND_FALLBACK),
            far_background: placeholder(screen, FAR_BACKGROUND_FALLBACK),
            masks: TerrainLayers::new(
                TerrainMask::new(placeholder(screen, MASK_FALLBACK)),
                TerrainMask::new(placeholder(screen, MASK_FALLBACK)),
            ),
            sprites: Sprites {
                fire: placeholder(FIRE_SPRITE_SIZE, FIRE_FALLBACK),
                smoke: placeholder(SMOKE_SPRITE_SIZE, SMOKE_FALLBACK),
                overlay: placeholder(screen, OVERLAY_FALLBACK),
                crosshair: placeholder(CROSSHAIR_SPRITE_SIZE, CROSSHAIR_FALLBACK),
            },
        }
    }
}

/// `background_far_hot.png`, `background_mid_clear.png`, ...
pub fn background_file(layer: Layer, weather: Weather) -> String {
    format!("background_{}_{}.png", layer.asset_key(), weather.asset_key())
}

/// `far_mask.png` or `mid_mask.png`.
pub fn mask_file(layer: Layer) -> String {
    format!("{}_mask.png", layer.asset_key())
}

/// Flat-colour raster.
pub fn placeholder((width, height): (u32, u32), rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Read and decode a raster file.
pub fn load_raster(path: &Path) -> Result<RgbaImage, LookoutError> {
    let data = std::fs::read(path).map_err(|e| LookoutError::AssetRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let decoded = image::load_from_memory(&data).map_err(|e| LookoutError::AssetDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(decoded.to_rgba8())
}

/// Read a raster, substituting a placeholder on any failure.
pub fn load_or_placeholder(path: &Path, size: (u32, u32), rgba: [u8; 4]) -> RgbaImage {
    match load_raster(path) {
        Ok(img) => {
            tracing::debug!(path = %path.display(), w = img.width(), h = img.height(), "asset loaded");
            img
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "asset unavailable, using placeholder");
            placeholder(size, rgba)
        }
    }
}

/// Write a raster as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), LookoutError> {
    image.save(path).map_err(|e| LookoutError::Capture {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })
}
