//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::LookoutError;

/// Process-wide weather, chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Rainy,
    Windy,
    Hot,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Rainy, Weather::Windy, Weather::Hot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Rainy => "Rainy",
            Self::Windy => "Windy",
            Self::Hot => "Hot",
        }
    }

    /// Lowercase key used in asset file names.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rainy => "rainy",
            Self::Windy => "windy",
            Self::Hot => "hot",
        }
    }

    /// Factor applied to a fire's base lifetime.
    pub fn lifetime_multiplier(&self) -> f64 {
        match self {
            Self::Clear => 1.0,
            Self::Rainy => 0.5,
            Self::Windy => 1.5,
            Self::Hot => 2.0,
        }
    }

    /// Divisor applied to the spawn interval. Larger means more frequent fires.
    pub fn spawn_interval_divisor(&self) -> f64 {
        match self {
            Self::Clear => 1.0,
            Self::Rainy => 0.5,
            Self::Windy => 1.5,
            Self::Hot => 2.0,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = LookoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .into_iter()
            .find(|w| w.asset_key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LookoutError::UnknownWeather(s.to_string()))
    }
}

/// Parallax depth band. Closed two-variant tag with per-variant constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Foreground band (the "mid" art layer).
    Near,
    /// Background band, drawn under the haze.
    Far,
}

impl Layer {
    /// Layer a fire at `distance` belongs to.
    pub fn from_distance(distance: u32) -> Self {
        if distance > FAR_DISTANCE_THRESHOLD {
            Self::Far
        } else {
            Self::Near
        }
    }

    /// Key used in asset file names.
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Near => "mid",
            Self::Far => "far",
        }
    }

    pub fn sprite_scale(&self) -> f32 {
        match self {
            Self::Near => NEAR_SPRITE_SCALE,
            Self::Far => FAR_SPRITE_SCALE,
        }
    }

    /// Screen row used when the mask has no terrain in a column.
    pub fn fallback_row(&self, screen_height: u32) -> i32 {
        let fraction = match self {
            Self::Near => NEAR_FALLBACK_ROW_FRACTION,
            Self::Far => FAR_FALLBACK_ROW_FRACTION,
        };
        (screen_height as f64 * fraction) as i32
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_key())
    }
}
