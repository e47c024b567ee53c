//! Player input delivered to the simulation.
//!
//! Discrete commands are queued and applied at the next tick boundary.
//! Held rotation is sampled once per tick.

use serde::{Deserialize, Serialize};

/// Discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Open or close the sighting instrument.
    ToggleInstrument,
    /// Attempt a report at the current aim point. Ignored while the instrument is closed.
    TriggerReport,
    /// Pointer moved to a new screen position. Ignored while the instrument is closed.
    PointerMoved { x: i32, y: i32 },
}

/// Rotation keys held during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldRotation {
    /// Rotate anticlockwise (bearing − 1 per tick).
    pub left: bool,
    /// Rotate clockwise (bearing + 1 per tick).
    pub right: bool,
}

impl HeldRotation {
    /// Net bearing change for one tick.
    pub fn delta(&self) -> i32 {
        self.right as i32 - self.left as i32
    }
}
