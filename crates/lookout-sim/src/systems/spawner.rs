//! Fire spawning: periodic, bounded attempts to place a fire on terrain.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lookout_core::components::{FireSite, SpawnOrder};
use lookout_core::constants::*;
use lookout_core::enums::{Layer, Weather};
use lookout_core::events::LookoutEvent;
use lookout_core::types::Bearing;
use lookout_terrain::ParallaxProjector;

use crate::weather::spawn_interval_ms;
use crate::world_setup;

/// When the next spawn attempt is due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSchedule {
    pub next_attempt_ms: f64,
}

impl SpawnSchedule {
    /// Schedule the first attempt a few seconds after start.
    pub fn first(rng: &mut ChaCha8Rng) -> Self {
        let (lo, hi) = FIRST_SPAWN_DELAY_MS;
        Self {
            next_attempt_ms: rng.gen_range(lo..=hi) as f64,
        }
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.next_attempt_ms
    }

    /// Schedule the next attempt relative to `now_ms`.
    pub fn reschedule(&mut self, rng: &mut ChaCha8Rng, weather: Weather, now_ms: f64) {
        let (lo, hi) = SPAWN_INTERVAL_MS;
        let base = rng.gen_range(lo..=hi) as f64;
        self.next_attempt_ms = now_ms + spawn_interval_ms(base, weather);
    }
}

/// Try up to `SPAWN_MAX_ATTEMPTS` random bearings and place a fire on the
/// first one whose layer has terrain. Returns `None` if none did.
pub fn try_spawn(
    world: &mut World,
    projector: &ParallaxProjector,
    rng: &mut ChaCha8Rng,
    weather: Weather,
    now_ms: f64,
    next_order: &mut u64,
) -> Option<hecs::Entity> {
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let bearing = Bearing::new(rng.gen_range(0..FULL_CIRCLE_DEG));
        let distance = SPAWN_DISTANCES[rng.gen_range(0..SPAWN_DISTANCES.len())];
        let layer = Layer::from_distance(distance);

        if !projector.has_terrain(bearing, layer) {
            continue;
        }

        let (site, lifetime) = world_setup::roll_fire(rng, bearing, distance, weather, now_ms);
        let order = SpawnOrder(*next_order);
        *next_order += 1;
        return Some(world_setup::spawn_fire(world, site, lifetime, order));
    }
    None
}

/// Run a spawn attempt if one is due, then reschedule regardless of outcome.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    projector: &ParallaxProjector,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    weather: Weather,
    now_ms: f64,
    next_order: &mut u64,
    events: &mut Vec<LookoutEvent>,
) {
    if !schedule.is_due(now_ms) {
        return;
    }

    match try_spawn(world, projector, rng, weather, now_ms, next_order) {
        Some(entity) => {
            if let Ok(site) = world.get::<&FireSite>(entity) {
                tracing::debug!(bearing = site.bearing.degrees(), layer = %site.layer, "fire spawned");
                events.push(LookoutEvent::FireSpawned {
                    bearing: site.bearing,
                    layer: site.layer,
                });
            }
        }
        None => {
            tracing::info!(attempts = SPAWN_MAX_ATTEMPTS, "no terrain found for a new fire, skipping");
            events.push(LookoutEvent::SpawnSkipped {
                attempts: SPAWN_MAX_ATTEMPTS,
            });
        }
    }

    schedule.reschedule(rng, weather, now_ms);
    tracing::debug!(next_attempt_ms = schedule.next_attempt_ms, "next spawn scheduled");
}
