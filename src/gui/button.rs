//! Clickable menu button
//!
//! Buttons activate on release: a press must start inside a visible button
//! and the release must land inside the same button.

use crate::surface::Surface;
use crate::text::{line_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Fixed button shapes used across the menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Wide,
    Medium,
    Short,
    OkCancel,
}

impl ButtonKind {
    /// Width and height in pixels
    pub fn size(self) -> (u32, u32) {
        match self {
            ButtonKind::Wide => (272, 35),
            ButtonKind::Medium => (128, 35),
            ButtonKind::Short => (135, 25),
            ButtonKind::OkCancel => (90, 28),
        }
    }
}

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub pressed_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(40, 36, 32),
            pressed_color: Color::RGB(24, 20, 18),
            border_color: Color::RGB(110, 96, 72),
            text_color: Color::RGB(216, 196, 128),
            text_scale: 2,
        }
    }
}

pub struct Button {
    kind: ButtonKind,
    caption: String,
    x: i32,
    y: i32,
    visible: bool,
    pressed: bool,
    style: ButtonStyle,
}

impl Button {
    pub fn new(kind: ButtonKind, caption: impl Into<String>) -> Self {
        Button {
            kind,
            caption: caption.into(),
            x: 0,
            y: 0,
            visible: true,
            pressed: false,
            style: ButtonStyle::default(),
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Hiding a button also drops any press in progress
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.pressed = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn bounds(&self) -> Rect {
        let (width, height) = self.kind.size();
        Rect::new(self.x, self.y, width, height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains_point((x, y))
    }

    /// Starts a press if the point hits this visible button; a press
    /// anywhere else clears one left over from a lost release
    pub fn press(&mut self, x: i32, y: i32) -> bool {
        self.pressed = self.visible && self.contains(x, y);
        self.pressed
    }

    /// Ends a press; returns true when the button was activated
    pub fn release(&mut self, x: i32, y: i32) -> bool {
        let activated = self.pressed && self.visible && self.contains(x, y);
        self.pressed = false;
        activated
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }

        let bounds = self.bounds();
        let background = if self.pressed {
            self.style.pressed_color
        } else {
            self.style.background_color
        };
        surface.fill_rect(bounds, background)?;
        surface.draw_rect(bounds, self.style.border_color)?;

        let scale = self.style.text_scale;
        let caption_width = text_width(&self.caption, scale) as i32;
        let caption_height = line_height(scale) as i32;
        let (width, height) = self.kind.size();

        surface.draw_text(
            &self.caption,
            self.x + (width as i32 - caption_width) / 2,
            self.y + (height as i32 - caption_height) / 2,
            self.style.text_color,
            scale,
        )
    }
}
