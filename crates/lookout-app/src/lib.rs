//! LOOKOUT application.
//!
//! Wires the terrain and simulation crates to a paced frame loop thread,
//! a command-line configuration and a console input driver.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod state;

pub use lookout_core as core;
