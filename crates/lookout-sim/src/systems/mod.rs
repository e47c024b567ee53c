//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or in the engine.

pub mod expiry;
pub mod report;
pub mod snapshot;
pub mod spawner;
pub mod view;
