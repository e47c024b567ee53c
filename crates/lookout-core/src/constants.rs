//! Simulation constants and tuning parameters.

/// Frame loop rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Screen ---

/// Output raster width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Output raster height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

/// Horizontal field of view in degrees, centred on the view bearing.
pub const FOV_DEG: i32 = 150;

/// Half the field of view.
pub const HALF_FOV_DEG: i32 = FOV_DEG / 2;

/// Full circle in degrees.
pub const FULL_CIRCLE_DEG: i32 = 360;

// --- Terrain sampling ---

/// A mask pixel whose RGB average is below this is terrain.
pub const TERRAIN_BRIGHTNESS_THRESHOLD: u32 = 200;

/// Screen-height fraction used when a far-layer column has no terrain.
pub const FAR_FALLBACK_ROW_FRACTION: f64 = 0.70;

/// Screen-height fraction used when a near-layer column has no terrain.
pub const NEAR_FALLBACK_ROW_FRACTION: f64 = 0.85;

/// Parallax scroll factor applied to both layers.
pub const LAYER_SCROLL_FACTOR: f64 = 1.0;

// --- Fires ---

/// Largest vertical placement jitter below the ridge line (pixels, inclusive).
pub const TERRAIN_OFFSET_MAX: i32 = 80;

/// Lower bound of the base fire lifetime draw (ms, inclusive).
pub const FIRE_LIFETIME_MIN_MS: u32 = 10_000;

/// Upper bound of the base fire lifetime draw (ms, exclusive).
pub const FIRE_LIFETIME_MAX_MS: u32 = 50_000;

/// Distances a fire may be spawned at. Each maps to a layer.
pub const SPAWN_DISTANCES: [u32; 2] = [100, 200];

/// Distances above this belong to the far layer.
pub const FAR_DISTANCE_THRESHOLD: u32 = 150;

/// Sprite scale for fires on the far layer.
pub const FAR_SPRITE_SCALE: f32 = 0.5;

/// Sprite scale for fires on the near layer.
pub const NEAR_SPRITE_SCALE: f32 = 1.0;

/// Gap between the top of a fire sprite and the bottom of its smoke (pixels).
pub const SMOKE_GAP_PX: i64 = 5;

// --- Spawning ---

/// Bearings tried per spawn cycle before giving up.
pub const SPAWN_MAX_ATTEMPTS: u32 = 20;

/// First spawn delay range after start (ms, inclusive).
pub const FIRST_SPAWN_DELAY_MS: (u32, u32) = (3_000, 6_000);

/// Spawn interval range before the weather divisor is applied (ms, inclusive).
pub const SPAWN_INTERVAL_MS: (u32, u32) = (4_000, 8_000);

// --- Reporting ---

/// Aim bearing must be strictly closer than this to the fire's bearing (degrees).
pub const REPORT_ANGLE_TOLERANCE_DEG: i32 = 15;

/// Aim point must be strictly closer than this to the fire's screen position (pixels).
pub const REPORT_PIXEL_TOLERANCE: f32 = 50.0;

/// Screen row that reads as zero declination.
pub const HORIZON_ROW: i32 = 300;

/// Pixels per degree of declination: the screen height spans 90°.
pub const PIXELS_PER_DEGREE: f64 = SCREEN_HEIGHT as f64 / 90.0;

// --- Haze ---

/// Atmospheric haze laid over the far layer (RGBA).
pub const HAZE_RGBA: [u8; 4] = [200, 200, 255, 30];

// --- Placeholder assets ---

/// Far background placeholder colour.
pub const FAR_BACKGROUND_FALLBACK: [u8; 4] = [135, 206, 235, 255];

/// Near ("mid") background placeholder colour.
pub const NEAR_BACKGROUND_FALLBACK: [u8; 4] = [100, 155, 100, 255];

/// Mask placeholder colour. White, so it contains no terrain.
pub const MASK_FALLBACK: [u8; 4] = [255, 255, 255, 255];

/// Fire sprite placeholder colour.
pub const FIRE_FALLBACK: [u8; 4] = [255, 100, 0, 255];

/// Smoke sprite placeholder colour.
pub const SMOKE_FALLBACK: [u8; 4] = [128, 128, 128, 255];

/// Instrument overlay placeholder colour (fully transparent).
pub const OVERLAY_FALLBACK: [u8; 4] = [0, 0, 0, 0];

/// Crosshair placeholder colour.
pub const CROSSHAIR_FALLBACK: [u8; 4] = [255, 255, 255, 255];

/// Nominal fire sprite size (w, h).
pub const FIRE_SPRITE_SIZE: (u32, u32) = (32, 48);

/// Nominal smoke sprite size (w, h).
pub const SMOKE_SPRITE_SIZE: (u32, u32) = (48, 48);

/// Nominal crosshair sprite size (w, h).
pub const CROSSHAIR_SPRITE_SIZE: (u32, u32) = (32, 32);

/// Top-left corner of the instrument status line on screen.
pub const STATUS_TEXT_ORIGIN: (i64, i64) = (20, SCREEN_HEIGHT as i64 - 30);

/// Status line glyph scale. At 1 the longest readout fits the screen width.
pub const STATUS_TEXT_SCALE: u32 = 1;

pub const STATUS_TEXT_RGBA: [u8; 4] = [255, 255, 255, 255];
