//! View state and the per-tick frame snapshot.

use serde::{Deserialize, Serialize};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::enums::{Layer, Weather};
use crate::events::{LookoutEvent, Report};
use crate::types::{Bearing, ScreenPos, SimTime};

/// The observer's current view and instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Bearing at the centre of the screen.
    pub bearing: Bearing,
    /// Crosshair position. Only follows the pointer while the instrument is open.
    pub aim_point: ScreenPos,
    pub instrument_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            bearing: Bearing::NORTH,
            aim_point: ScreenPos::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2),
            instrument_open: false,
        }
    }
}

/// A live fire as seen this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireView {
    pub order: u64,
    pub bearing: Bearing,
    pub layer: Layer,
    /// `None` when outside the field of view.
    pub screen: Option<ScreenPos>,
    pub reported: bool,
    pub remaining_ms: f64,
}

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub weather: Weather,
    pub view: ViewState,
    pub fires: Vec<FireView>,
    pub reports: Vec<Report>,
    /// Instrument readout; present only while the instrument is open.
    pub status_line: Option<String>,
    pub events: Vec<LookoutEvent>,
}

/// Format the instrument readout line.
pub fn status_line(azimuth: Bearing, declination_deg: i32, weather: Weather) -> String {
    format!(
        "Target Azimuth: {}°, Declination: {declination_deg}°, Weather: {weather}",
        azimuth.degrees()
    )
}
