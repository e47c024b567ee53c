//! State shared between the console driver and the game loop thread.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use lookout_core::commands::{HeldRotation, PlayerCommand};
use lookout_core::state::FrameSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// Replace the set of held rotation keys.
    Hold(HeldRotation),
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Write the current frame to a PNG file.
    Capture(PathBuf),
    /// Stop the loop after the current tick.
    Shutdown,
}

/// Latest snapshot, written by the loop thread after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
