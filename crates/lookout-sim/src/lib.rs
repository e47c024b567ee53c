//! Simulation engine for LOOKOUT.
//!
//! Owns the hecs ECS world of live fires, runs systems once per tick,
//! composites the screen raster, and produces `FrameSnapshot`s.

pub mod engine;
pub mod render;
pub mod systems;
pub mod weather;
pub mod world_setup;

pub use engine::{LookoutEngine, SimConfig};
pub use lookout_core as core;
pub use render::{Canvas, DrawPass, Renderer};

#[cfg(test)]
mod tests;
