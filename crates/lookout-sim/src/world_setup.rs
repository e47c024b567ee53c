//! Entity spawn factories for fires.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lookout_core::components::*;
use lookout_core::constants::*;
use lookout_core::enums::{Layer, Weather};
use lookout_core::types::Bearing;

use crate::weather::fire_lifetime_ms;

/// Draw the random parts of a new fire: terrain offset and lifetime.
pub fn roll_fire(
    rng: &mut ChaCha8Rng,
    bearing: Bearing,
    distance: u32,
    weather: Weather,
    now_ms: f64,
) -> (FireSite, Lifetime) {
    let site = FireSite {
        bearing,
        distance,
        layer: Layer::from_distance(distance),
        terrain_offset: rng.gen_range(0..=TERRAIN_OFFSET_MAX),
    };
    let base_ms = rng.gen_range(FIRE_LIFETIME_MIN_MS..FIRE_LIFETIME_MAX_MS) as f64;
    let lifetime = Lifetime {
        spawn_time_ms: now_ms,
        lifetime_ms: fire_lifetime_ms(base_ms, weather),
    };
    (site, lifetime)
}

/// Spawn a fire entity. Fires start unreported.
pub fn spawn_fire(
    world: &mut World,
    site: FireSite,
    lifetime: Lifetime,
    order: SpawnOrder,
) -> hecs::Entity {
    world.spawn((site, lifetime, ReportStatus::default(), order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_roll_fire_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for i in 0..500 {
            let (site, life) = roll_fire(&mut rng, Bearing::new(i), 200, Weather::Clear, 1_000.0);
            assert!((0..=TERRAIN_OFFSET_MAX).contains(&site.terrain_offset));
            assert_eq!(site.layer, Layer::Far);
            assert!(life.lifetime_ms >= FIRE_LIFETIME_MIN_MS as f64);
            assert!(life.lifetime_ms < FIRE_LIFETIME_MAX_MS as f64);
            assert_eq!(life.spawn_time_ms, 1_000.0);
        }
    }

    #[test]
    fn test_roll_fire_hot_doubles_lifetime() {
        let mut clear_rng = ChaCha8Rng::seed_from_u64(11);
        let mut hot_rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let (_, clear) = roll_fire(&mut clear_rng, Bearing::NORTH, 100, Weather::Clear, 0.0);
            let (_, hot) = roll_fire(&mut hot_rng, Bearing::NORTH, 100, Weather::Hot, 0.0);
            assert_eq!(hot.lifetime_ms, clear.lifetime_ms * 2.0);
        }
    }

    #[test]
    fn test_roll_fire_rainy_halves_lifetime() {
        let mut clear_rng = ChaCha8Rng::seed_from_u64(12);
        let mut rainy_rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..50 {
            let (_, clear) = roll_fire(&mut clear_rng, Bearing::NORTH, 100, Weather::Clear, 0.0);
            let (_, rainy) = roll_fire(&mut rainy_rng, Bearing::NORTH, 100, Weather::Rainy, 0.0);
            assert_eq!(rainy.lifetime_ms, clear.lifetime_ms * 0.5);
        }
    }

    #[test]
    fn test_spawn_fire_starts_unreported() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (site, life) = roll_fire(&mut rng, Bearing::new(45), 100, Weather::Clear, 0.0);
        let e = spawn_fire(&mut world, site, life, SpawnOrder(0));
        let status = world.get::<&ReportStatus>(e).unwrap();
        assert!(!status.reported);
        assert_eq!(world.get::<&FireSite>(e).unwrap().layer, Layer::Near);
    }
}
