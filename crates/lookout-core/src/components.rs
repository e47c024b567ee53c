//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Layer;
use crate::types::Bearing;

/// Where a fire burns. Fixed at spawn and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireSite {
    pub bearing: Bearing,
    /// Abstract distance the layer was derived from.
    pub distance: u32,
    pub layer: Layer,
    /// Pixels below the ridge line the sprite sits at, drawn once in `[0, 80]`.
    pub terrain_offset: i32,
}

/// Expiry clock for a fire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    /// Simulation time the fire appeared (ms).
    pub spawn_time_ms: f64,
    /// Weather-scaled lifetime (ms).
    pub lifetime_ms: f64,
}

impl Lifetime {
    /// True once strictly more than `lifetime_ms` has passed.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.spawn_time_ms > self.lifetime_ms
    }

    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.spawn_time_ms + self.lifetime_ms - now_ms).max(0.0)
    }
}

/// Whether a fire has been reported. Flips false → true once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStatus {
    pub reported: bool,
}

/// Insertion sequence number. Gives the live set a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);
