//! Fundamental angular, screen and time types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DT_MS, FULL_CIRCLE_DEG};

/// Screen-space pixel coordinate. x grows rightward, y grows downward.
pub type ScreenPos = IVec2;

/// Compass bearing in whole degrees, always normalised to `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bearing(u16);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0);

    /// Wrap any integer degree value onto the compass.
    pub fn new(degrees: i32) -> Self {
        Self(degrees.rem_euclid(FULL_CIRCLE_DEG) as u16)
    }

    /// Wrap a fractional degree value, flooring first.
    pub fn from_degrees_floor(degrees: f64) -> Self {
        Self::new(degrees.floor() as i32)
    }

    pub fn degrees(self) -> i32 {
        self.0 as i32
    }

    /// This bearing rotated by `delta` degrees (positive = clockwise).
    pub fn rotated(self, delta: i32) -> Self {
        Self::new(self.degrees() + delta)
    }

    /// Signed shortest rotation from `from` to `self`, in `(-180, 180]`.
    pub fn delta_from(self, from: Bearing) -> i32 {
        let half = FULL_CIRCLE_DEG / 2;
        let d = (self.degrees() - from.degrees() + half).rem_euclid(FULL_CIRCLE_DEG) - half;
        if d == -half {
            half
        } else {
            d
        }
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += DT_MS;
    }
}
