//! Tests for the engine: determinism, spawning, expiry, reporting and draw order.

use image::{Rgba, RgbaImage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lookout_core::commands::{HeldRotation, PlayerCommand};
use lookout_core::components::{FireSite, Lifetime, ReportStatus, SpawnOrder};
use lookout_core::constants::*;
use lookout_core::enums::{Layer, Weather};
use lookout_core::events::{LookoutEvent, Report};
use lookout_core::types::{Bearing, ScreenPos};
use lookout_terrain::{AssetSet, TerrainLayers, TerrainMask};

use crate::engine::{LookoutEngine, SimConfig};
use crate::render::{Canvas, DrawPass, Renderer};
use crate::systems::spawner::SpawnSchedule;

const SKY: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GROUND: Rgba<u8> = Rgba([30, 50, 30, 255]);

/// Screen-sized mask with ground from `ridge` down, only in columns `cols`.
fn mask(ridge: u32, cols: std::ops::Range<u32>) -> TerrainMask {
    let mut img = RgbaImage::from_pixel(SCREEN_WIDTH, SCREEN_HEIGHT, SKY);
    for col in cols {
        for row in ridge..SCREEN_HEIGHT {
            img.put_pixel(col, row, GROUND);
        }
    }
    TerrainMask::new(img)
}

fn ridge_layers(ridge: u32) -> TerrainLayers {
    TerrainLayers::new(mask(ridge, 0..SCREEN_WIDTH), mask(ridge, 0..SCREEN_WIDTH))
}

fn sky_layers() -> TerrainLayers {
    AssetSet::placeholders().masks
}

fn engine(seed: u64, weather: Weather, layers: TerrainLayers) -> LookoutEngine {
    LookoutEngine::new(SimConfig { seed, weather }, layers)
}

/// Engine on a flat ridge at row 300 with the spawner switched off.
fn quiet_engine() -> LookoutEngine {
    let mut engine = engine(42, Weather::Clear, ridge_layers(300));
    engine.disable_spawning();
    engine
}

fn site(bearing: i32, layer: Layer) -> FireSite {
    FireSite {
        bearing: Bearing::new(bearing),
        distance: match layer {
            Layer::Near => 100,
            Layer::Far => 200,
        },
        layer,
        terrain_offset: 0,
    }
}

fn fire_count(engine: &LookoutEngine) -> usize {
    let mut q = engine.world().query::<&FireSite>();
    q.iter().count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine(12345, Weather::Windy, ridge_layers(300));
    let mut engine_b = engine(12345, Weather::Windy, ridge_layers(300));

    for i in 0..3000 {
        if i == 100 {
            for e in [&mut engine_a, &mut engine_b] {
                e.set_held_rotation(HeldRotation { left: false, right: true });
                e.queue_command(PlayerCommand::ToggleInstrument);
            }
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine(111, Weather::Clear, ridge_layers(300));
    let mut engine_b = engine(222, Weather::Clear, ridge_layers(300));

    let mut diverged = false;
    for _ in 0..3000 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Spawning ----

#[test]
fn test_first_spawn_within_start_window() {
    let mut engine = engine(7, Weather::Clear, ridge_layers(300));
    let (lo, hi) = FIRST_SPAWN_DELAY_MS;
    let mut first = None;
    for _ in 0..(hi as u64 * TICK_RATE as u64 / 1000 + 5) {
        let snap = engine.tick();
        if snap.events.iter().any(|e| matches!(e, LookoutEvent::FireSpawned { .. })) {
            first = Some(snap.time.elapsed_ms);
            break;
        }
    }
    let at = first.expect("a fire should spawn on an all-terrain mask");
    assert!(at >= lo as f64 && at < hi as f64 + DT_MS, "first spawn at {at}");
}

#[test]
fn test_spawner_never_places_fire_off_terrain() {
    // Terrain only under columns 0..400, i.e. bearings 0..=179.
    let layers = TerrainLayers::new(mask(300, 0..400), mask(300, 0..400));
    for seed in 0..5 {
        let mut engine = engine(seed, Weather::Hot, layers.clone());
        let mut spawned = 0;
        for _ in 0..6000 {
            for event in engine.tick().events {
                if let LookoutEvent::FireSpawned { bearing, layer } = event {
                    assert!(bearing.degrees() < 180, "seed {seed}: fire at {bearing}");
                    assert!(engine.projector().has_terrain(bearing, layer));
                    spawned += 1;
                }
            }
        }
        assert!(spawned > 0, "seed {seed} never spawned");
    }
}

#[test]
fn test_spawn_skipped_on_all_sky_mask() {
    let mut engine = engine(3, Weather::Clear, sky_layers());
    let mut skipped = Vec::new();
    for _ in 0..400 {
        for event in engine.tick().events {
            if let LookoutEvent::SpawnSkipped { attempts } = event {
                skipped.push(attempts);
            }
        }
    }
    assert_eq!(skipped, vec![SPAWN_MAX_ATTEMPTS]);
    assert_eq!(fire_count(&engine), 0);
}

#[test]
fn test_reschedule_interval_scales_with_weather() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut schedule = SpawnSchedule::first(&mut rng);
    let (lo, hi) = SPAWN_INTERVAL_MS;
    for weather in Weather::ALL {
        for _ in 0..200 {
            schedule.reschedule(&mut rng, weather, 1000.0);
            let divisor = weather.spawn_interval_divisor();
            let next = schedule.next_attempt_ms;
            assert!(
                next >= 1000.0 + lo as f64 / divisor && next <= 1000.0 + hi as f64 / divisor,
                "{weather}: {next}"
            );
        }
    }
}

#[test]
fn test_spawned_lifetimes_follow_weather() {
    let lifetimes = |weather| {
        let mut engine = engine(55, weather, ridge_layers(300));
        for _ in 0..600 {
            engine.tick();
        }
        let mut q = engine.world().query::<(&SpawnOrder, &Lifetime)>();
        let mut fires: Vec<_> = q.iter().map(|(_, (o, l))| (*o, l.lifetime_ms)).collect();
        fires.sort_by_key(|(o, _)| *o);
        fires.into_iter().map(|(_, ms)| ms).collect::<Vec<_>>()
    };
    let clear = lifetimes(Weather::Clear);
    let hot = lifetimes(Weather::Hot);
    assert!(!clear.is_empty());
    // Hot reschedules faster, so compare only the first fire.
    assert_eq!(hot[0], clear[0] * 2.0);
}

// ---- Expiry ----

#[test]
fn test_fire_expires_in_loop() {
    let mut engine = quiet_engine();
    engine.spawn_test_fire(site(0, Layer::Near), 1000.0);

    for _ in 0..59 {
        let snap = engine.tick();
        assert!(snap.events.is_empty());
    }
    assert_eq!(fire_count(&engine), 1);

    let mut expired = Vec::new();
    for _ in 0..3 {
        expired.extend(engine.tick().events);
    }
    assert_eq!(
        expired,
        vec![LookoutEvent::FireExpired {
            bearing: Bearing::new(0),
            reported: false,
        }]
    );
    assert_eq!(fire_count(&engine), 0);
}

// ---- View ----

#[test]
fn test_held_rotation_wraps() {
    let mut engine = quiet_engine();
    engine.set_held_rotation(HeldRotation { left: true, right: false });
    let snap = engine.tick();
    assert_eq!(snap.view.bearing, Bearing::new(359));

    engine.set_held_rotation(HeldRotation { left: false, right: true });
    for _ in 0..361 {
        engine.tick();
    }
    assert_eq!(engine.view().bearing, Bearing::new(0));

    engine.set_held_rotation(HeldRotation::default());
    engine.tick();
    assert_eq!(engine.view().bearing, Bearing::new(0));
}

#[test]
fn test_instrument_gates_pointer_and_status() {
    let mut engine = quiet_engine();
    engine.queue_command(PlayerCommand::PointerMoved { x: 10, y: 20 });
    let snap = engine.tick();
    assert_eq!(snap.view.aim_point, ScreenPos::new(400, 300));
    assert!(snap.status_line.is_none());

    engine.queue_commands([
        PlayerCommand::ToggleInstrument,
        PlayerCommand::PointerMoved { x: 10, y: 30 },
    ]);
    let snap = engine.tick();
    assert_eq!(snap.view.aim_point, ScreenPos::new(10, 30));
    assert_eq!(
        snap.status_line.as_deref(),
        Some("Target Azimuth: 286°, Declination: 40°, Weather: Clear")
    );
}

#[test]
fn test_extreme_pointer_is_clamped_without_panic() {
    let mut engine = quiet_engine();
    engine.spawn_test_fire(site(0, Layer::Near), 60_000.0);
    engine.queue_commands([
        PlayerCommand::ToggleInstrument,
        PlayerCommand::PointerMoved { x: 0, y: i32::MIN },
        PlayerCommand::TriggerReport,
    ]);
    let snap = engine.tick();
    assert_eq!(snap.view.aim_point, ScreenPos::new(0, 0));
    assert!(snap.status_line.is_some());

    engine.queue_commands([
        PlayerCommand::PointerMoved { x: i32::MIN, y: 300 },
        PlayerCommand::TriggerReport,
    ]);
    let snap = engine.tick();
    assert_eq!(snap.view.aim_point, ScreenPos::new(0, 300));
    assert!(engine.reports().is_empty());
}

// ---- Reporting ----

/// View 10°, aim (400, 330); fire at bearing 12 lands at (410, 300).
fn aimed_engine() -> LookoutEngine {
    let mut engine = quiet_engine();
    engine.set_held_rotation(HeldRotation { left: false, right: true });
    for _ in 0..10 {
        engine.tick();
    }
    engine.set_held_rotation(HeldRotation::default());
    engine.queue_commands([
        PlayerCommand::ToggleInstrument,
        PlayerCommand::PointerMoved { x: 400, y: 330 },
    ]);
    engine.tick();
    assert_eq!(engine.view().bearing, Bearing::new(10));
    engine
}

#[test]
fn test_report_end_to_end() {
    let mut engine = aimed_engine();
    engine.spawn_test_fire(site(12, Layer::Near), 60_000.0);

    engine.queue_command(PlayerCommand::TriggerReport);
    let snap = engine.tick();

    let report = Report {
        bearing: Bearing::new(10),
        elevation_deg: -5,
    };
    assert_eq!(snap.fires[0].screen, Some(ScreenPos::new(410, 300)));
    assert!(snap.fires[0].reported);
    assert_eq!(snap.reports, vec![report]);
    assert_eq!(snap.events, vec![LookoutEvent::FireReported { report }]);
}

#[test]
fn test_report_is_idempotent_per_fire() {
    let mut engine = aimed_engine();
    engine.spawn_test_fire(site(12, Layer::Near), 60_000.0);

    engine.queue_command(PlayerCommand::TriggerReport);
    engine.tick();
    engine.queue_command(PlayerCommand::TriggerReport);
    let snap = engine.tick();

    assert_eq!(engine.reports().len(), 1);
    assert!(snap.events.is_empty());
}

#[test]
fn test_report_angle_gap_rejects() {
    let mut engine = aimed_engine();
    engine.spawn_test_fire(site(30, Layer::Near), 60_000.0);
    engine.queue_command(PlayerCommand::TriggerReport);
    engine.tick();
    assert!(engine.reports().is_empty());
}

#[test]
fn test_report_ignored_while_instrument_closed() {
    let mut engine = aimed_engine();
    engine.spawn_test_fire(site(12, Layer::Near), 60_000.0);
    engine.queue_commands([PlayerCommand::ToggleInstrument, PlayerCommand::TriggerReport]);
    engine.tick();
    assert!(engine.reports().is_empty());
}

#[test]
fn test_report_first_spawned_wins() {
    let mut engine = aimed_engine();
    // The earlier fire is further from the aim point but still within range.
    let earlier = engine.spawn_test_fire(site(13, Layer::Near), 60_000.0);
    let later = engine.spawn_test_fire(site(10, Layer::Near), 60_000.0);

    engine.queue_command(PlayerCommand::TriggerReport);
    engine.tick();

    assert!(is_reported(&engine, earlier));
    assert!(!is_reported(&engine, later));

    engine.queue_command(PlayerCommand::TriggerReport);
    engine.tick();
    assert!(is_reported(&engine, later));
    assert_eq!(engine.reports().len(), 2);
}

fn is_reported(engine: &LookoutEngine, fire: hecs::Entity) -> bool {
    engine.world().get::<&ReportStatus>(fire).unwrap().reported
}

// ---- Rendering ----

/// Placeholder art, except a near background that is clear above the ridge.
fn render_assets(ridge: u32) -> AssetSet {
    let mut assets = AssetSet::placeholders();
    let mut near = RgbaImage::from_pixel(SCREEN_WIDTH, SCREEN_HEIGHT, Rgba([0, 0, 0, 0]));
    for y in ridge..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            near.put_pixel(x, y, Rgba(NEAR_BACKGROUND_FALLBACK));
        }
    }
    assets.near_background = near;
    assets.masks = ridge_layers(ridge);
    assets
}

#[test]
fn test_render_pass_order() {
    let assets = render_assets(300);
    let renderer = Renderer::new(&assets);
    let mut engine = quiet_engine();
    let mut canvas = Canvas::screen();

    let closed = engine.render(&renderer, &mut canvas);
    assert_eq!(
        closed,
        vec![
            DrawPass::FarBackground,
            DrawPass::FarFires,
            DrawPass::Haze,
            DrawPass::NearBackground,
            DrawPass::NearFires,
        ]
    );

    engine.queue_command(PlayerCommand::ToggleInstrument);
    engine.tick();
    let open = engine.render(&renderer, &mut canvas);
    assert_eq!(&open[5..], &[DrawPass::Instrument, DrawPass::StatusText]);
}

#[test]
fn test_haze_covers_far_fires_only() {
    let assets = render_assets(300);
    let renderer = Renderer::new(&assets);
    let mut engine = quiet_engine();
    engine.spawn_test_fire(site(330, Layer::Far), 60_000.0);
    engine.spawn_test_fire(site(30, Layer::Near), 60_000.0);
    let snap = engine.tick();
    assert_eq!(snap.fires[0].screen, Some(ScreenPos::new(240, 300)));
    assert_eq!(snap.fires[1].screen, Some(ScreenPos::new(560, 300)));

    let mut canvas = Canvas::screen();
    engine.render(&renderer, &mut canvas);

    let far = canvas.pixel(240, 298).unwrap();
    let near = canvas.pixel(560, 298).unwrap();
    // Both sprites are pure orange; only the far one picks up the blue haze.
    assert!(far[2] >= 20, "far fire should be hazed: {far:?}");
    assert!(near[2] <= 1, "near fire should be over the haze: {near:?}");
    assert!(near[0] >= 254);
}

#[test]
fn test_crosshair_centred_on_aim() {
    let renderer = Renderer::new(&render_assets(300));
    let mut engine = quiet_engine();
    engine.queue_commands([
        PlayerCommand::ToggleInstrument,
        PlayerCommand::PointerMoved { x: 100, y: 100 },
    ]);
    engine.tick();

    let mut canvas = Canvas::screen();
    engine.render(&renderer, &mut canvas);
    assert_eq!(canvas.pixel(100, 100), Some(CROSSHAIR_FALLBACK));
    assert_eq!(canvas.pixel(84, 84), Some(CROSSHAIR_FALLBACK));
    assert_ne!(canvas.pixel(83, 100), Some(CROSSHAIR_FALLBACK));
}

fn status_text_pixels(canvas: &Canvas) -> usize {
    let (x0, y0) = STATUS_TEXT_ORIGIN;
    let (x0, y0) = (x0 as u32, y0 as u32);
    (x0..SCREEN_WIDTH)
        .flat_map(|x| (y0..y0 + 8 * STATUS_TEXT_SCALE).map(move |y| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y) == Some(STATUS_TEXT_RGBA))
        .count()
}

#[test]
fn test_status_text_drawn_only_while_open() {
    let renderer = Renderer::new(&render_assets(300));
    let mut engine = quiet_engine();
    let mut canvas = Canvas::screen();

    engine.render(&renderer, &mut canvas);
    assert_eq!(status_text_pixels(&canvas), 0);

    engine.queue_command(PlayerCommand::ToggleInstrument);
    engine.tick();
    engine.render(&renderer, &mut canvas);
    let lit = status_text_pixels(&canvas);
    assert!(lit > 100, "status line barely drawn: {lit} pixels");

    engine.queue_command(PlayerCommand::ToggleInstrument);
    engine.tick();
    engine.render(&renderer, &mut canvas);
    assert_eq!(status_text_pixels(&canvas), 0);
}
