//! Terrain system for LOOKOUT.
//!
//! Silhouette masks, azimuth-to-screen projection under parallax scroll,
//! and loading of the rasters the game draws.

pub use lookout_core as core;

pub mod assets;
pub mod mask;
pub mod projection;

// Re-export key types for convenience.
pub use assets::{AssetSet, Sprites};
pub use mask::{TerrainLayers, TerrainMask};
pub use projection::{scroll_offset, ParallaxProjector};
