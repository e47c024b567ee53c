//! Game loop thread: runs the engine at 60 Hz and composites a frame per tick.
//!
//! The engine is created inside this thread and owned by it alone. Commands
//! arrive via an `mpsc` channel; the latest snapshot is published to shared
//! state for the console side to read.

use std::path::Path;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use lookout_core::constants::TICK_RATE;
use lookout_sim::{Canvas, LookoutEngine, Renderer, SimConfig};
use lookout_terrain::assets::save_png;
use lookout_terrain::AssetSet;

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the last frame when
/// the loop ends.
pub fn spawn_game_loop(
    config: SimConfig,
    assets: AssetSet,
    max_ticks: Option<u64>,
    latest_snapshot: SharedSnapshot,
) -> (mpsc::Sender<LoopCommand>, JoinHandle<Canvas>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("lookout-game-loop".into())
        .spawn(move || run_game_loop(config, &assets, max_ticks, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop(
    config: SimConfig,
    assets: &AssetSet,
    max_ticks: Option<u64>,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> Canvas {
    let mut engine = LookoutEngine::new(config, assets.masks.clone());
    let renderer = Renderer::new(assets);
    let mut canvas = Canvas::screen();
    let mut next_tick_time = Instant::now();

    tracing::info!(seed = config.seed, weather = %config.weather, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Hold(held)) => engine.set_held_rotation(held),
                Ok(LoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Capture(path)) => capture(&canvas, &path),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.time().tick, "game loop shutting down");
                    return canvas;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick and draw it
        let snapshot = engine.tick();
        engine.render(&renderer, &mut canvas);
        let tick = snapshot.time.tick;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if max_ticks.is_some_and(|max| tick >= max) {
            tracing::info!(tick, "tick limit reached");
            return canvas;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Frame capture never stops the loop; failures are logged.
fn capture(canvas: &Canvas, path: &Path) {
    match save_png(canvas.image(), path) {
        Ok(()) => tracing::info!(path = %path.display(), "frame captured"),
        Err(e) => tracing::warn!(path = %path.display(), "{e}"),
    }
}
