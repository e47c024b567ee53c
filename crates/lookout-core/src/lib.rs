//! Core types and definitions for the LOOKOUT fire-spotting simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! bearings, components, commands, view state, snapshots, events, and constants.
//! It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
