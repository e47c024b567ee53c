//! The lookout engine: owns the ECS world, the view, the seeded RNG and the
//! report log, and sequences every system once per tick.
//!
//! Headless and deterministic: the same seed, weather, masks and command
//! stream always produce the same snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lookout_core::commands::{HeldRotation, PlayerCommand};
use lookout_core::components::{FireSite, SpawnOrder};
use lookout_core::enums::{Layer, Weather};
use lookout_core::events::{LookoutEvent, Report};
use lookout_core::state::{status_line, FrameSnapshot, ViewState};
use lookout_core::types::{ScreenPos, SimTime};
use lookout_terrain::{ParallaxProjector, TerrainLayers};

use crate::render::{Canvas, DrawPass, Renderer};
use crate::systems;
use crate::systems::spawner::SpawnSchedule;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Weather for the whole session.
    pub weather: Weather,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weather: Weather::default(),
        }
    }
}

pub struct LookoutEngine {
    world: World,
    time: SimTime,
    weather: Weather,
    view: ViewState,
    projector: ParallaxProjector,
    rng: ChaCha8Rng,
    schedule: SpawnSchedule,
    next_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    held: HeldRotation,
    despawn_buffer: Vec<hecs::Entity>,
    reports: Vec<Report>,
    events: Vec<LookoutEvent>,
}

impl LookoutEngine {
    pub fn new(config: SimConfig, layers: TerrainLayers) -> Self {
        Self::with_projector(config, ParallaxProjector::new(layers))
    }

    pub fn with_projector(config: SimConfig, projector: ParallaxProjector) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let schedule = SpawnSchedule::first(&mut rng);
        Self {
            world: World::new(),
            time: SimTime::default(),
            weather: config.weather,
            view: ViewState::default(),
            projector,
            rng,
            schedule,
            next_order: 0,
            command_queue: VecDeque::new(),
            held: HeldRotation::default(),
            despawn_buffer: Vec::new(),
            reports: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Rotation keys currently held; sampled every tick until changed.
    pub fn set_held_rotation(&mut self, held: HeldRotation) {
        self.held = held;
    }

    /// Advance one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.time.advance();
        self.process_commands();
        systems::view::apply_rotation(&mut self.view, self.held);

        let now = self.time.elapsed_ms;
        systems::spawner::run(
            &mut self.world,
            &self.projector,
            &mut self.rng,
            &mut self.schedule,
            self.weather,
            now,
            &mut self.next_order,
            &mut self.events,
        );
        systems::expiry::run(&mut self.world, now, &mut self.despawn_buffer, &mut self.events);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.projector,
            &self.time,
            self.weather,
            &self.view,
            &self.reports,
            events,
        )
    }

    /// Draw the current state into `canvas` and return the passes in the order run.
    pub fn render(&self, renderer: &Renderer, canvas: &mut Canvas) -> Vec<DrawPass> {
        let mut passes = Vec::with_capacity(7);
        canvas.clear();

        renderer.draw_background(canvas, Layer::Far, self.view.bearing);
        passes.push(DrawPass::FarBackground);
        self.draw_fires(renderer, canvas, Layer::Far);
        passes.push(DrawPass::FarFires);
        renderer.draw_haze(canvas);
        passes.push(DrawPass::Haze);

        renderer.draw_background(canvas, Layer::Near, self.view.bearing);
        passes.push(DrawPass::NearBackground);
        self.draw_fires(renderer, canvas, Layer::Near);
        passes.push(DrawPass::NearFires);

        if self.view.instrument_open {
            renderer.draw_instrument(canvas, self.view.aim_point);
            passes.push(DrawPass::Instrument);
            let text = status_line(
                self.projector.aim_bearing(self.view.aim_point, self.view.bearing),
                self.projector.aim_elevation(self.view.aim_point),
                self.weather,
            );
            renderer.draw_status_text(canvas, &text);
            passes.push(DrawPass::StatusText);
        }
        passes
    }

    fn draw_fires(&self, renderer: &Renderer, canvas: &mut Canvas, layer: Layer) {
        let mut visible: Vec<_> = self
            .world
            .query::<(&SpawnOrder, &FireSite)>()
            .iter()
            .filter(|(_, (_, site))| site.layer == layer)
            .filter_map(|(_, (order, site))| {
                self.projector
                    .screen_position(site, self.view.bearing)
                    .map(|pos| (*order, pos))
            })
            .collect();
        visible.sort_by_key(|(order, _)| *order);
        for (_, pos) in visible {
            renderer.draw_fire(canvas, layer, pos);
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Every accepted report, oldest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn projector(&self) -> &ParallaxProjector {
        &self.projector
    }

    /// Place a fire directly, bypassing the spawner's terrain search.
    #[cfg(test)]
    pub fn spawn_test_fire(&mut self, site: FireSite, lifetime_ms: f64) -> hecs::Entity {
        let lifetime = lookout_core::components::Lifetime {
            spawn_time_ms: self.time.elapsed_ms,
            lifetime_ms,
        };
        let order = SpawnOrder(self.next_order);
        self.next_order += 1;
        crate::world_setup::spawn_fire(&mut self.world, site, lifetime, order)
    }

    /// Push the next spawn attempt out of reach so tests control the live set.
    #[cfg(test)]
    pub fn disable_spawning(&mut self) {
        self.schedule.next_attempt_ms = f64::INFINITY;
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::ToggleInstrument => systems::view::toggle_instrument(&mut self.view),
            PlayerCommand::PointerMoved { x, y } => {
                systems::view::apply_pointer(&mut self.view, ScreenPos::new(x, y))
            }
            PlayerCommand::TriggerReport => {
                if !self.view.instrument_open {
                    return;
                }
                if let Some(report) =
                    systems::report::try_report(&mut self.world, &self.projector, &self.view)
                {
                    tracing::info!(
                        azimuth = report.bearing.degrees(),
                        declination = report.elevation_deg,
                        "fire reported"
                    );
                    self.reports.push(report);
                    self.events.push(LookoutEvent::FireReported { report });
                }
            }
        }
    }
}
