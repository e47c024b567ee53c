//! Error type shared by the library crates.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookoutError {
    /// The asset file could not be read.
    AssetRead { path: PathBuf, reason: String },
    /// The asset file was read but is not a decodable raster.
    AssetDecode { path: PathBuf, reason: String },
    /// A weather name that matches none of the known conditions.
    UnknownWeather(String),
    /// A rendered frame could not be written out.
    Capture { path: PathBuf, reason: String },
}

impl fmt::Display for LookoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetRead { path, reason } => {
                write!(f, "cannot read asset {}: {reason}", path.display())
            }
            Self::AssetDecode { path, reason } => {
                write!(f, "cannot decode asset {}: {reason}", path.display())
            }
            Self::UnknownWeather(name) => {
                write!(f, "unknown weather '{name}' (expected clear, rainy, windy or hot)")
            }
            Self::Capture { path, reason } => {
                write!(f, "cannot write frame to {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for LookoutError {}
