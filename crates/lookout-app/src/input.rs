//! Console input driver: one line per key or pointer event.
//!
//! `left` and `right` toggle a held rotation key, `stop` releases both,
//! `o` toggles the instrument, `aim X Y` moves the pointer, `space` or
//! `report` triggers a report, `capture PATH` saves the frame and `quit`
//! ends the session.

use std::path::PathBuf;

use lookout_core::commands::{HeldRotation, PlayerCommand};

use crate::state::LoopCommand;

/// Result of reading one console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Command(LoopCommand),
    Blank,
    Unrecognized(String),
}

/// Tracks held keys across lines and turns each line into a loop command.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    held: HeldRotation,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> HeldRotation {
        self.held
    }

    pub fn parse_line(&mut self, line: &str) -> ConsoleInput {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return ConsoleInput::Blank;
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "left" => {
                self.held.left = !self.held.left;
                LoopCommand::Hold(self.held)
            }
            "right" => {
                self.held.right = !self.held.right;
                LoopCommand::Hold(self.held)
            }
            "stop" => {
                self.held = HeldRotation::default();
                LoopCommand::Hold(self.held)
            }
            "o" => LoopCommand::Player(PlayerCommand::ToggleInstrument),
            "space" | "report" => LoopCommand::Player(PlayerCommand::TriggerReport),
            "aim" => {
                let x = words.next().and_then(|w| w.parse().ok());
                let y = words.next().and_then(|w| w.parse().ok());
                match (x, y) {
                    (Some(x), Some(y)) => LoopCommand::Player(PlayerCommand::PointerMoved { x, y }),
                    _ => return ConsoleInput::Unrecognized(line.trim().to_string()),
                }
            }
            "capture" => match words.next() {
                Some(path) => LoopCommand::Capture(PathBuf::from(path)),
                None => return ConsoleInput::Unrecognized(line.trim().to_string()),
            },
            "quit" | "q" => LoopCommand::Shutdown,
            _ => return ConsoleInput::Unrecognized(line.trim().to_string()),
        };
        ConsoleInput::Command(command)
    }
}
