//! Weather selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lookout_core::enums::Weather;

/// Pick one of the four conditions uniformly.
pub fn roll(rng: &mut ChaCha8Rng) -> Weather {
    Weather::ALL[rng.gen_range(0..Weather::ALL.len())]
}

/// Lifetime of a fire whose base draw was `base_ms`.
pub fn fire_lifetime_ms(base_ms: f64, weather: Weather) -> f64 {
    base_ms * weather.lifetime_multiplier()
}

/// Delay until the next spawn attempt given a base interval draw.
pub fn spawn_interval_ms(base_ms: f64, weather: Weather) -> f64 {
    base_ms / weather.spawn_interval_divisor()
}
