use crate::surface::Surface;
use crate::text::{text_width, CHAR_ADVANCE};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const BOX_WIDTH: u32 = 165;
const BOX_HEIGHT: u32 = 20;
const TEXT_SCALE: u32 = 1;
const PADDING: i32 = 4;

/// Single-line text entry
///
/// Typing only reaches the box while it is both visible and active. An
/// optional filter restricts which characters are accepted.
pub struct TextBox {
    text: String,
    filter: Option<String>,
    max_length: usize,
    x: i32,
    y: i32,
    visible: bool,
    active: bool,
}

impl TextBox {
    pub fn new() -> Self {
        TextBox {
            text: String::new(),
            filter: None,
            max_length: (BOX_WIDTH as usize - 2 * PADDING as usize) / CHAR_ADVANCE as usize,
            x: 0,
            y: 0,
            visible: true,
            active: false,
        }
    }

    pub fn set_filter(&mut self, allowed: &str) {
        self.filter = Some(allowed.to_string());
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Hiding the box also takes keyboard focus away from it
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.active = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Gives the box keyboard focus
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn accepts(&self, c: char) -> bool {
        match &self.filter {
            Some(allowed) => allowed.contains(c),
            None => !c.is_control(),
        }
    }

    fn push_filtered(&mut self, input: &str) {
        for c in input.chars() {
            if self.text.chars().count() >= self.max_length {
                break;
            }
            if self.accepts(c) {
                self.text.push(c);
            }
        }
    }

    /// Feeds typed text; returns true if the box consumed it
    pub fn on_text_input(&mut self, input: &str) -> bool {
        if !(self.visible && self.active) {
            return false;
        }
        self.push_filtered(input);
        true
    }

    pub fn on_backspace(&mut self) -> bool {
        if !(self.visible && self.active) {
            return false;
        }
        self.text.pop();
        true
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }

        let bounds = Rect::new(self.x, self.y, BOX_WIDTH, BOX_HEIGHT);
        surface.fill_rect(bounds, Color::RGB(0, 0, 0))?;
        surface.draw_rect(bounds, Color::RGB(110, 96, 72))?;

        let text_x = self.x + PADDING;
        let text_y = self.y + (BOX_HEIGHT as i32 - 7 * TEXT_SCALE as i32) / 2;
        surface.draw_text(&self.text, text_x, text_y, Color::RGB(255, 255, 255), TEXT_SCALE)?;

        if self.active {
            let caret_x = text_x + text_width(&self.text, TEXT_SCALE) as i32;
            surface.fill_rect(
                Rect::new(caret_x, text_y, TEXT_SCALE, 7 * TEXT_SCALE),
                Color::RGB(216, 196, 128),
            )?;
        }

        Ok(())
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_box() -> TextBox {
        let mut entry = TextBox::new();
        entry.set_filter("0123456789.:");
        entry.activate();
        entry
    }

    #[test]
    fn test_inactive_box_ignores_typing() {
        let mut entry = TextBox::new();
        assert!(!entry.on_text_input("abc"));
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_filter_drops_rejected_characters() {
        let mut entry = address_box();
        assert!(entry.on_text_input("192.168.1.5 port?"));
        assert_eq!(entry.text(), "192.168.1.5");
    }

    #[test]
    fn test_backspace_removes_last_character() {
        let mut entry = address_box();
        entry.on_text_input("10.0");
        entry.on_backspace();
        assert_eq!(entry.text(), "10.");
    }

    #[test]
    fn test_hiding_deactivates() {
        let mut entry = address_box();
        entry.set_visible(false);
        assert!(!entry.is_active());
        entry.set_visible(true);
        assert!(!entry.on_text_input("1"));
    }

    #[test]
    fn test_length_is_capped_to_box_width() {
        let mut entry = address_box();
        entry.on_text_input(&"1".repeat(100));
        assert_eq!(entry.text().len(), 26);
    }
}
