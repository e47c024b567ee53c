//! Software compositor for the screen raster.
//!
//! Pass order is fixed: far background, far fires, haze, near background,
//! near fires, then the instrument when open. The haze only ever covers
//! the far band; near fires are always drawn over it.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use lookout_core::constants::*;
use lookout_core::enums::Layer;
use lookout_core::types::{Bearing, ScreenPos};
use lookout_terrain::{scroll_offset, AssetSet};

/// One compositing step, in the order it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPass {
    FarBackground,
    FarFires,
    Haze,
    NearBackground,
    NearFires,
    Instrument,
    StatusText,
}

/// Screen-sized RGBA raster, replaced every tick.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
        }
    }

    pub fn screen() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Fill with opaque black.
    pub fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = Rgba([0, 0, 0, 255]);
        }
    }

    /// Alpha-composite `top` with its top-left corner at (x, y). Clips at the edges.
    pub fn blit(&mut self, top: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.image, top, x, y);
    }
}

/// Fire and smoke sprites pre-scaled for one layer.
#[derive(Debug, Clone)]
struct LayerSprites {
    fire: RgbaImage,
    smoke: RgbaImage,
}

impl LayerSprites {
    fn scaled(fire: &RgbaImage, smoke: &RgbaImage, layer: Layer) -> Self {
        let scale = layer.sprite_scale();
        Self {
            fire: scale_sprite(fire, scale),
            smoke: scale_sprite(smoke, scale),
        }
    }
}

fn scale_sprite(sprite: &RgbaImage, scale: f32) -> RgbaImage {
    if (scale - 1.0).abs() < f32::EPSILON {
        return sprite.clone();
    }
    let w = ((sprite.width() as f32 * scale) as u32).max(1);
    let h = ((sprite.height() as f32 * scale) as u32).max(1);
    imageops::resize(sprite, w, h, FilterType::Triangle)
}

/// A background drawn either stretched to the screen or scrolled with wrap.
#[derive(Debug, Clone)]
enum Backdrop {
    Stretched(RgbaImage),
    Scrolling(RgbaImage),
}

impl Backdrop {
    fn new(image: &RgbaImage, screen_width: u32, screen_height: u32) -> Self {
        if image.width() <= screen_width {
            Self::Stretched(imageops::resize(image, screen_width, screen_height, FilterType::Nearest))
        } else {
            Self::Scrolling(image.clone())
        }
    }

    fn draw(&self, canvas: &mut Canvas, view: Bearing, scroll_factor: f64) {
        match self {
            Self::Stretched(img) => canvas.blit(img, 0, 0),
            Self::Scrolling(img) => {
                let w = img.width() as i64;
                let offset = scroll_offset(img.width(), view, scroll_factor);
                canvas.blit(img, -offset, 0);
                canvas.blit(img, -offset + w, 0);
            }
        }
    }
}

/// Everything needed to draw a frame, prepared once from the loaded assets.
#[derive(Debug, Clone)]
pub struct Renderer {
    far_background: Backdrop,
    near_background: Backdrop,
    far_sprites: LayerSprites,
    near_sprites: LayerSprites,
    haze: RgbaImage,
    overlay: RgbaImage,
    crosshair: RgbaImage,
}

impl Renderer {
    pub fn new(assets: &AssetSet) -> Self {
        Self::with_screen(assets, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_screen(assets: &AssetSet, screen_width: u32, screen_height: u32) -> Self {
        let sprites = &assets.sprites;
        Self {
            far_background: Backdrop::new(&assets.far_background, screen_width, screen_height),
            near_background: Backdrop::new(&assets.near_background, screen_width, screen_height),
            far_sprites: LayerSprites::scaled(&sprites.fire, &sprites.smoke, Layer::Far),
            near_sprites: LayerSprites::scaled(&sprites.fire, &sprites.smoke, Layer::Near),
            haze: RgbaImage::from_pixel(screen_width, screen_height, Rgba(HAZE_RGBA)),
            overlay: sprites.overlay.clone(),
            crosshair: sprites.crosshair.clone(),
        }
    }

    pub fn draw_background(&self, canvas: &mut Canvas, layer: Layer, view: Bearing) {
        let backdrop = match layer {
            Layer::Near => &self.near_background,
            Layer::Far => &self.far_background,
        };
        backdrop.draw(canvas, view, LAYER_SCROLL_FACTOR);
    }

    /// Fire centred on `pos.x` with its base on `pos.y`; smoke just above it.
    pub fn draw_fire(&self, canvas: &mut Canvas, layer: Layer, pos: ScreenPos) {
        let sprites = match layer {
            Layer::Near => &self.near_sprites,
            Layer::Far => &self.far_sprites,
        };
        let x = pos.x as i64;
        let fire_left = x - sprites.fire.width() as i64 / 2;
        let fire_top = pos.y as i64 - sprites.fire.height() as i64;
        canvas.blit(&sprites.fire, fire_left, fire_top);

        let smoke_left = x - sprites.smoke.width() as i64 / 2;
        let smoke_top = fire_top - SMOKE_GAP_PX - sprites.smoke.height() as i64;
        canvas.blit(&sprites.smoke, smoke_left, smoke_top);
    }

    pub fn draw_haze(&self, canvas: &mut Canvas) {
        canvas.blit(&self.haze, 0, 0);
    }

    /// Instrument chrome and the crosshair centred on the aim point.
    pub fn draw_instrument(&self, canvas: &mut Canvas, aim: ScreenPos) {
        canvas.blit(&self.overlay, 0, 0);
        let left = aim.x as i64 - self.crosshair.width() as i64 / 2;
        let top = aim.y as i64 - self.crosshair.height() as i64 / 2;
        canvas.blit(&self.crosshair, left, top);
    }

    /// Instrument readout along the bottom-left of the screen.
    pub fn draw_status_text(&self, canvas: &mut Canvas, text: &str) {
        let (x, y) = STATUS_TEXT_ORIGIN;
        canvas.blit(&text_raster(text, STATUS_TEXT_SCALE, STATUS_TEXT_RGBA), x, y);
    }
}

/// Rasterise one line of text from the 8×8 bitmap font.
///
/// Characters outside Basic Latin and Latin-1 advance the pen but draw nothing.
fn text_raster(text: &str, scale: u32, rgba: [u8; 4]) -> RgbaImage {
    let cell = 8 * scale;
    let mut img = RgbaImage::new(cell * text.chars().count() as u32, cell);
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
            continue;
        };
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..8u32 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let x0 = i as u32 * cell + col * scale;
                let y0 = row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(x0 + dx, y0 + dy, Rgba(rgba));
                    }
                }
            }
        }
    }
    img
}
