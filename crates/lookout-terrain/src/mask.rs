//! TerrainMask: a silhouette raster queried column by column.

use image::RgbaImage;

use lookout_core::constants::TERRAIN_BRIGHTNESS_THRESHOLD;
use lookout_core::enums::Layer;

/// Immutable silhouette raster for one parallax layer.
///
/// Dark pixels are ground, bright pixels are sky. Only geometry is read
/// from it; it is never drawn.
#[derive(Debug, Clone)]
pub struct TerrainMask {
    image: RgbaImage,
}

impl TerrainMask {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the pixel at (column, row) is terrain.
    /// Samples outside the raster are never terrain.
    pub fn is_terrain(&self, column: u32, row: u32) -> bool {
        match self.image.get_pixel_checked(column, row) {
            Some(px) => {
                let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
                sum < TERRAIN_BRIGHTNESS_THRESHOLD * 3
            }
            None => false,
        }
    }

    /// First terrain row scanning top to bottom: the visible ridge line.
    pub fn first_terrain_row(&self, column: u32) -> Option<u32> {
        if column >= self.width() {
            return None;
        }
        (0..self.height()).find(|&row| self.is_terrain(column, row))
    }
}

/// The two masks, one per layer.
#[derive(Debug, Clone)]
pub struct TerrainLayers {
    pub near: TerrainMask,
    pub far: TerrainMask,
}

impl TerrainLayers {
    pub fn new(near: TerrainMask, far: TerrainMask) -> Self {
        Self { near, far }
    }

    pub fn get(&self, layer: Layer) -> &TerrainMask {
        match layer {
            Layer::Near => &self.near,
            Layer::Far => &self.far,
        }
    }
}
