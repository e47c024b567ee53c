//! LOOKOUT: fire lookout game.
//!
//! Usage:
//!   cargo run --release -p lookout-app -- --assets assets
//!   RUST_LOG=debug cargo run -p lookout-app -- --seed 7 --weather hot --max-ticks 600 --capture frame.png
//!
//! Input is read from stdin, one command per line (see `input`).

use std::io::BufRead;
use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use lookout_app::config::Args;
use lookout_app::game_loop;
use lookout_app::input::{ConsoleDriver, ConsoleInput};
use lookout_app::state::{shared_snapshot, LoopCommand};
use lookout_terrain::assets::save_png;
use lookout_terrain::AssetSet;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let session = args.session();
    tracing::info!(seed = session.seed, weather = %session.weather, "weather set for this session");

    let assets = AssetSet::load(&args.assets, session.weather);
    let latest = shared_snapshot();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(session, assets, args.max_ticks, latest.clone());

    // Held for the whole session so input EOF alone never disconnects the loop.
    let _input_tx = cmd_tx.clone();
    let quit_on_eof = args.max_ticks.is_none();
    std::thread::Builder::new()
        .name("lookout-console".into())
        .spawn(move || read_console(cmd_tx, quit_on_eof))
        .context("failed to spawn console thread")?;

    let canvas = handle.join().map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Some(path) = &args.capture {
        save_png(canvas.image(), path).with_context(|| format!("writing final frame to {}", path.display()))?;
        tracing::info!(path = %path.display(), "final frame captured");
    }

    let reports = latest
        .lock()
        .map_err(|_| anyhow!("snapshot lock poisoned"))?
        .as_ref()
        .map(|snap| snap.reports.clone())
        .unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

/// Forward console lines to the game loop until quit, EOF or the loop is gone.
fn read_console(cmd_tx: mpsc::Sender<LoopCommand>, quit_on_eof: bool) {
    let mut driver = ConsoleDriver::new();
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        match driver.parse_line(&line) {
            ConsoleInput::Command(cmd) => {
                let quit = cmd == LoopCommand::Shutdown;
                if cmd_tx.send(cmd).is_err() || quit {
                    return;
                }
            }
            ConsoleInput::Blank => {}
            ConsoleInput::Unrecognized(text) => tracing::warn!(input = %text, "unrecognized command"),
        }
    }
    if quit_on_eof {
        let _ = cmd_tx.send(LoopCommand::Shutdown);
    }
}
