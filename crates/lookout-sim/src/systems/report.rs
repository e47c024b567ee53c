//! Report resolution: does the instrument's aim point sit on a visible fire?

use hecs::{Entity, World};

use lookout_core::components::{FireSite, ReportStatus, SpawnOrder};
use lookout_core::constants::{REPORT_ANGLE_TOLERANCE_DEG, REPORT_PIXEL_TOLERANCE};
use lookout_core::events::Report;
use lookout_core::state::ViewState;
use lookout_core::types::{Bearing, ScreenPos};
use lookout_terrain::ParallaxProjector;

/// Whether an aim reading hits a fire at `fire_bearing` drawn at `fire_pos`.
/// Both tolerances are strict.
pub fn is_hit(aim_bearing: Bearing, aim_point: ScreenPos, fire_bearing: Bearing, fire_pos: ScreenPos) -> bool {
    let angle_gap = fire_bearing.delta_from(aim_bearing).abs();
    let pixel_gap = fire_pos.as_vec2().distance(aim_point.as_vec2());
    angle_gap < REPORT_ANGLE_TOLERANCE_DEG && pixel_gap < REPORT_PIXEL_TOLERANCE
}

/// Unreported fires in spawn order.
fn unreported_in_order(world: &mut World) -> Vec<(SpawnOrder, Entity, FireSite)> {
    let mut fires: Vec<_> = world
        .query_mut::<(&SpawnOrder, &FireSite, &ReportStatus)>()
        .into_iter()
        .filter(|(_, (_, _, status))| !status.reported)
        .map(|(entity, (order, site, _))| (*order, entity, *site))
        .collect();
    fires.sort_by_key(|(order, _, _)| *order);
    fires
}

/// Report the first fire, in spawn order, under the aim point.
///
/// The earliest-spawned qualifying fire wins even if a later one is closer.
/// At most one fire is marked per call, and a marked fire is never matched again.
pub fn try_report(
    world: &mut World,
    projector: &ParallaxProjector,
    view: &ViewState,
) -> Option<Report> {
    let aim_bearing = projector.aim_bearing(view.aim_point, view.bearing);
    let elevation_deg = projector.aim_elevation(view.aim_point);

    let hit = unreported_in_order(world).into_iter().find_map(|(_, entity, site)| {
        let pos = projector.screen_position(&site, view.bearing)?;
        is_hit(aim_bearing, view.aim_point, site.bearing, pos).then_some(entity)
    })?;

    let mut status = world.get::<&mut ReportStatus>(hit).ok()?;
    status.reported = true;

    Some(Report {
        bearing: aim_bearing,
        elevation_deg,
    })
}
