use crate::surface::Surface;
use crate::text::{line_height, text_width};
use sdl2::pixels::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Font sizes available to menu labels, mapped onto bitmap font scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Formal10,
    Formal12,
    Font16,
    Font42,
}

impl FontSize {
    pub fn scale(self) -> u32 {
        match self {
            FontSize::Formal10 => 1,
            FontSize::Formal12 | FontSize::Font16 => 2,
            FontSize::Font42 => 4,
        }
    }
}

/// Static text anchored at a point; the alignment decides whether the point
/// is the left edge, centre or right edge of each line
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    font: FontSize,
    color: Color,
    alignment: Alignment,
    x: i32,
    y: i32,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontSize) -> Self {
        Label {
            text: text.into(),
            font,
            color: Color::RGB(255, 255, 255),
            alignment: Alignment::Left,
            x: 0,
            y: 0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        let scale = self.font.scale();
        let step = line_height(scale) as i32;

        for (i, line) in self.text.lines().enumerate() {
            let width = text_width(line, scale) as i32;
            let x = match self.alignment {
                Alignment::Left => self.x,
                Alignment::Center => self.x - width / 2,
                Alignment::Right => self.x - width,
            };

            surface.draw_text(line, x, self.y + i as i32 * step, self.color, scale)?;
        }

        Ok(())
    }
}
