use crate::assets::Animation;
use crate::error::MenuError;
use crate::surface::{DrawEffect, Surface};
use sdl2::rect::Rect;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32, duration_ms: u64) -> Self {
        Frame {
            x,
            y,
            width,
            height,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// An animated image placed on screen
///
/// Playback is driven by the elapsed time passed to [`Sprite::advance`]
/// rather than a wall clock, so the menu only animates on the frames the
/// host decides to advance.
pub struct Sprite {
    texture: String,
    frames: Vec<Frame>,
    current_frame: usize,
    frame_elapsed: f64,
    is_playing: bool,
    loop_animation: bool,
    effect: DrawEffect,
    x: i32,
    y: i32,
}

impl Sprite {
    pub fn new(animation: Animation) -> Self {
        Sprite {
            texture: animation.texture,
            frames: animation.frames,
            current_frame: 0,
            frame_elapsed: 0.0,
            is_playing: false,
            loop_animation: animation.loop_animation,
            effect: DrawEffect::Normal,
            x: 0,
            y: 0,
        }
    }

    pub fn play_forward(&mut self) {
        self.is_playing = true;
    }

    pub fn set_effect(&mut self, effect: DrawEffect) {
        self.effect = effect;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Moves playback forward by `elapsed` seconds
    pub fn advance(&mut self, elapsed: f64) -> Result<(), MenuError> {
        if self.frames.is_empty() {
            return Err(MenuError::Animation(format!(
                "{} has no frames to advance",
                self.texture
            )));
        }

        if !self.is_playing {
            return Ok(());
        }

        self.frame_elapsed += elapsed;

        while self.is_playing {
            let frame_duration = self.frames[self.current_frame].duration.as_secs_f64();
            if frame_duration <= 0.0 || self.frame_elapsed < frame_duration {
                break;
            }
            self.frame_elapsed -= frame_duration;
            self.advance_frame();
        }

        Ok(())
    }

    fn advance_frame(&mut self) {
        if self.current_frame + 1 < self.frames.len() {
            self.current_frame += 1;
        } else if self.loop_animation {
            self.current_frame = 0;
        } else {
            self.is_playing = false;
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        let frame = self
            .frames
            .get(self.current_frame)
            .ok_or_else(|| format!("{} has no frames to render", self.texture))?;

        self.draw_frame(surface, frame, self.x, self.y)
    }

    /// Draws `segments_x * segments_y` consecutive frames, starting at
    /// `frame_offset`, tiled into a grid anchored at the sprite position
    ///
    /// Full-screen backgrounds are stored as a grid of smaller frames and are
    /// reassembled this way.
    pub fn render_segmented(
        &self,
        surface: &mut dyn Surface,
        segments_x: u32,
        segments_y: u32,
        frame_offset: usize,
    ) -> Result<(), String> {
        let mut y = self.y;

        for row in 0..segments_y {
            let mut x = self.x;
            let mut row_height = 0;

            for col in 0..segments_x {
                let index = frame_offset + (row * segments_x + col) as usize;
                let frame = self.frames.get(index).ok_or_else(|| {
                    format!(
                        "{}: segment frame {} out of range ({} frames)",
                        self.texture,
                        index,
                        self.frames.len()
                    )
                })?;

                self.draw_frame(surface, frame, x, y)?;
                x += frame.width as i32;
                row_height = row_height.max(frame.height);
            }

            y += row_height as i32;
        }

        Ok(())
    }

    fn draw_frame(&self, surface: &mut dyn Surface, frame: &Frame, x: i32, y: i32) -> Result<(), String> {
        let src = Rect::new(frame.x, frame.y, frame.width, frame.height);
        let dest = Rect::new(x, y, frame.width, frame.height);
        surface.draw_texture(&self.texture, src, dest, self.effect)
    }
}
