//! Snapshot builder: reads the world and produces a `FrameSnapshot`.

use hecs::World;

use lookout_core::components::{FireSite, Lifetime, ReportStatus, SpawnOrder};
use lookout_core::enums::Weather;
use lookout_core::events::{LookoutEvent, Report};
use lookout_core::state::{status_line, FireView, FrameSnapshot, ViewState};
use lookout_core::types::SimTime;
use lookout_terrain::ParallaxProjector;

/// Build a complete snapshot of the visible state.
pub fn build_snapshot(
    world: &World,
    projector: &ParallaxProjector,
    time: &SimTime,
    weather: Weather,
    view: &ViewState,
    reports: &[Report],
    events: Vec<LookoutEvent>,
) -> FrameSnapshot {
    let mut fires: Vec<FireView> = world
        .query::<(&SpawnOrder, &FireSite, &Lifetime, &ReportStatus)>()
        .iter()
        .map(|(_, (order, site, lifetime, status))| FireView {
            order: order.0,
            bearing: site.bearing,
            layer: site.layer,
            screen: projector.screen_position(site, view.bearing),
            reported: status.reported,
            remaining_ms: lifetime.remaining_ms(time.elapsed_ms),
        })
        .collect();
    fires.sort_by_key(|f| f.order);

    let status_line = view.instrument_open.then(|| {
        status_line(
            projector.aim_bearing(view.aim_point, view.bearing),
            projector.aim_elevation(view.aim_point),
            weather,
        )
    });

    FrameSnapshot {
        time: *time,
        weather,
        view: *view,
        fires,
        reports: reports.to_vec(),
        status_line,
        events,
    }
}
