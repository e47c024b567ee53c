//! Records and events emitted by the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::Layer;
use crate::types::Bearing;

/// An accepted fire report. The report log only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Azimuth read off the instrument at the aim point.
    pub bearing: Bearing,
    /// Declination read off the instrument at the aim point (degrees).
    pub elevation_deg: i32,
}

/// Things that happened during a tick, for UI and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LookoutEvent {
    /// A new fire was placed on terrain.
    FireSpawned { bearing: Bearing, layer: Layer },
    /// No terrain was found within the attempt bound; this cycle was skipped.
    SpawnSkipped { attempts: u32 },
    /// A fire burned out and left the live set.
    FireExpired { bearing: Bearing, reported: bool },
    /// A fire was reported.
    FireReported { report: Report },
}
