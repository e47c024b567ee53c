//! Parallax projection: maps world bearings and screen columns onto mask
//! columns, places fires on the rendered silhouette, and reads the sighting
//! instrument back into azimuth and declination.
//!
//! Masks no wider than the screen are stretched to fit and never scroll.
//! Wider masks scroll with the view bearing and wrap horizontally.

use lookout_core::components::FireSite;
use lookout_core::constants::*;
use lookout_core::enums::Layer;
use lookout_core::types::{Bearing, ScreenPos};

use crate::mask::{TerrainLayers, TerrainMask};

/// Horizontal scroll of a `width`-pixel layer at `view` bearing.
///
/// The layer is drawn at `-offset` and `-offset + width`, so screen column
/// `x` shows layer column `(x + offset) mod width`.
pub fn scroll_offset(width: u32, view: Bearing, scroll_factor: f64) -> i64 {
    if width == 0 {
        return 0;
    }
    let raw = (view.degrees() as f64 / FULL_CIRCLE_DEG as f64) * width as f64 * scroll_factor;
    (raw.floor() as i64).rem_euclid(width as i64)
}

/// Projects bearings onto the screen over a pair of terrain masks.
#[derive(Debug, Clone)]
pub struct ParallaxProjector {
    layers: TerrainLayers,
    screen_width: u32,
    screen_height: u32,
}

impl ParallaxProjector {
    /// Projector for the default 800×600 screen.
    pub fn new(layers: TerrainLayers) -> Self {
        Self::with_screen(layers, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_screen(layers: TerrainLayers, screen_width: u32, screen_height: u32) -> Self {
        Self {
            layers,
            screen_width,
            screen_height,
        }
    }

    pub fn mask(&self, layer: Layer) -> &TerrainMask {
        self.layers.get(layer)
    }

    fn scrolls(&self, mask: &TerrainMask) -> bool {
        mask.width() > self.screen_width
    }

    /// Mask column under a world bearing.
    pub fn column_for_bearing(&self, bearing: Bearing, view: Bearing, layer: Layer) -> u32 {
        let mask = self.mask(layer);
        let w = mask.width() as i64;
        if w == 0 {
            return 0;
        }
        let base = bearing.degrees() as i64 * w / FULL_CIRCLE_DEG as i64;
        if !self.scrolls(mask) {
            return base.rem_euclid(w) as u32;
        }
        let offset = scroll_offset(mask.width(), view, LAYER_SCROLL_FACTOR);
        (base + offset).rem_euclid(w) as u32
    }

    /// Mask column under a screen column. Exact inverse of the scroll render.
    pub fn column_for_screen_x(&self, screen_x: i32, view: Bearing, layer: Layer) -> u32 {
        let mask = self.mask(layer);
        let w = mask.width() as i64;
        if w == 0 {
            return 0;
        }
        if !self.scrolls(mask) {
            let col = (screen_x as i64 * w).div_euclid(self.screen_width as i64);
            return col.rem_euclid(w) as u32;
        }
        let offset = scroll_offset(mask.width(), view, LAYER_SCROLL_FACTOR);
        (offset + screen_x as i64).rem_euclid(w) as u32
    }

    /// First terrain row of a layer's mask, in mask space.
    pub fn first_terrain_row(&self, column: u32, layer: Layer) -> Option<u32> {
        self.mask(layer).first_terrain_row(column)
    }

    /// Whether the layer has any terrain under `bearing` in the unscrolled frame.
    pub fn has_terrain(&self, bearing: Bearing, layer: Layer) -> bool {
        let column = self.column_for_bearing(bearing, Bearing::NORTH, layer);
        self.first_terrain_row(column, layer).is_some()
    }

    /// Mask row scaled into screen rows.
    pub fn scaled_row(&self, row: u32, layer: Layer) -> i32 {
        let h = self.mask(layer).height();
        if h == 0 {
            return 0;
        }
        (row as u64 * self.screen_height as u64 / h as u64) as i32
    }

    /// Screen column of `bearing`, or `None` outside the field of view.
    pub fn screen_x(&self, bearing: Bearing, view: Bearing) -> Option<i32> {
        let delta = bearing.delta_from(view);
        if delta.abs() > HALF_FOV_DEG {
            return None;
        }
        let x = (delta + HALF_FOV_DEG) as i64 * self.screen_width as i64 / FOV_DEG as i64;
        Some(x as i32)
    }

    /// Where a fire sits on screen: on the rendered ridge line of its layer,
    /// pushed down by its terrain offset.
    pub fn screen_position(&self, site: &FireSite, view: Bearing) -> Option<ScreenPos> {
        let x = self.screen_x(site.bearing, view)?;
        let column = self.column_for_screen_x(x, view, site.layer);
        let ridge = match self.first_terrain_row(column, site.layer) {
            Some(row) => self.scaled_row(row, site.layer),
            None => site.layer.fallback_row(self.screen_height),
        };
        Some(ScreenPos::new(x, ridge + site.terrain_offset))
    }

    /// Azimuth under a screen aim point.
    pub fn aim_bearing(&self, aim: ScreenPos, view: Bearing) -> Bearing {
        let across = aim.x as f64 / self.screen_width as f64 * FOV_DEG as f64;
        Bearing::from_degrees_floor(across + (view.degrees() - HALF_FOV_DEG) as f64)
    }

    /// Declination under a screen aim point (degrees above the horizon row).
    pub fn aim_elevation(&self, aim: ScreenPos) -> i32 {
        ((HORIZON_ROW as f64 - aim.y as f64) / PIXELS_PER_DEGREE).floor() as i32
    }
}
