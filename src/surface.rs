//! Drawing target for menu widgets
//!
//! Widgets only ever draw rectangles, bitmap text and texture regions, so the
//! menu renders through this small trait instead of an SDL2 canvas directly.
//! [`CanvasSurface`] is the SDL2 implementation used by the binary.

use crate::assets::TextureStore;
use crate::text::draw_bitmap_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// How a texture is combined with what is already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawEffect {
    #[default]
    Normal,
    /// Additive blend, used by the burning logo overlays
    Modulate,
}

pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Copies `src` out of the named texture into `dest`
    fn draw_texture(
        &mut self,
        texture: &str,
        src: Rect,
        dest: Rect,
        effect: DrawEffect,
    ) -> Result<(), String>;

    /// Draws a single line of text with its top-left corner at (x, y)
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        draw_bitmap_text(self, text, x, y, color, scale)
    }
}

/// SDL2 canvas paired with the textures loaded for the current screen
pub struct CanvasSurface<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    textures: &'c mut TextureStore<'t>,
}

impl<'c, 't> CanvasSurface<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, textures: &'c mut TextureStore<'t>) -> Self {
        CanvasSurface { canvas, textures }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_rect(rect)
    }

    fn draw_texture(
        &mut self,
        texture: &str,
        src: Rect,
        dest: Rect,
        effect: DrawEffect,
    ) -> Result<(), String> {
        let texture = self
            .textures
            .get_mut(texture)
            .ok_or_else(|| format!("Texture not loaded: {}", texture))?;

        texture.set_blend_mode(match effect {
            DrawEffect::Normal => BlendMode::Blend,
            DrawEffect::Modulate => BlendMode::Add,
        });

        self.canvas.copy(texture, src, dest)
    }
}
