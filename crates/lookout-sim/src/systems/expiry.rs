//! Expiry system: removes fires whose lifetime has run out.

use hecs::{Entity, World};

use lookout_core::components::{FireSite, Lifetime, ReportStatus};
use lookout_core::events::LookoutEvent;

/// Remove every fire with `now - spawn_time > lifetime`.
///
/// Candidates are collected in a read-only pass and despawned afterwards,
/// so the live set is never mutated mid-iteration. Uses a pre-allocated
/// buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    now_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<LookoutEvent>,
) {
    despawn_buffer.clear();

    for (entity, (site, lifetime, status)) in
        world.query_mut::<(&FireSite, &Lifetime, &ReportStatus)>()
    {
        if lifetime.is_expired(now_ms) {
            tracing::debug!(bearing = site.bearing.degrees(), reported = status.reported, "fire burned out");
            events.push(LookoutEvent::FireExpired {
                bearing: site.bearing,
                reported: status.reported,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
