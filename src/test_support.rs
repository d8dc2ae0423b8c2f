//! Recording fakes shared by the unit tests

use crate::assets::{Animation, AssetLoader};
use crate::audio::AudioProvider;
use crate::error::MenuError;
use crate::gui::Frame;
use crate::host::HostServices;
use crate::input_system::InputManager;
use crate::save::GameStates;
use crate::screen::LoadingState;
use crate::surface::{DrawEffect, Surface};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// `frame_count` 10x10 frames laid out left to right
pub fn animation(texture: &str, frame_count: usize, duration_ms: u64) -> Animation {
    Animation {
        texture: texture.to_string(),
        frames: (0..frame_count)
            .map(|i| Frame::new(i as i32 * 10, 0, 10, 10, duration_ms))
            .collect(),
        loop_animation: true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Fill(Rect),
    Outline(Rect),
    Texture {
        texture: String,
        src: Rect,
        dest: Rect,
        effect: DrawEffect,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
    },
}

/// Surface that records draw calls and can be told to fail on one texture
#[derive(Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    fail_on_texture: Option<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(texture: &str) -> Self {
        RecordingSurface {
            ops: Vec::new(),
            fail_on_texture: Some(texture.to_string()),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn filled_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Fill(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Texture names in draw order, consecutive duplicates collapsed
    pub fn textures(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for op in &self.ops {
            if let SurfaceOp::Texture { texture, .. } = op {
                if names.last() != Some(texture) {
                    names.push(texture.clone());
                }
            }
        }
        names
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, _color: Color) -> Result<(), String> {
        self.ops.push(SurfaceOp::Fill(rect));
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, _color: Color) -> Result<(), String> {
        self.ops.push(SurfaceOp::Outline(rect));
        Ok(())
    }

    fn draw_texture(
        &mut self,
        texture: &str,
        src: Rect,
        dest: Rect,
        effect: DrawEffect,
    ) -> Result<(), String> {
        if self.fail_on_texture.as_deref() == Some(texture) {
            return Err(format!("cannot draw {}", texture));
        }
        self.ops.push(SurfaceOp::Texture {
            texture: texture.to_string(),
            src,
            dest,
            effect,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        _color: Color,
        _scale: u32,
    ) -> Result<(), String> {
        self.ops.push(SurfaceOp::Text {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }
}

/// Asset loader that fabricates twelve 100ms frames per resource
///
/// The texture key of each animation is the resource name itself.
#[derive(Default)]
pub struct FakeAssets {
    pub loaded: Vec<String>,
    pub missing: Option<String>,
    pub empty: Option<String>,
}

impl AssetLoader for FakeAssets {
    fn load_animation(&mut self, resource: &str) -> Result<Animation, MenuError> {
        if self.missing.as_deref() == Some(resource) {
            return Err(MenuError::Asset {
                resource: resource.to_string(),
                reason: "not found".to_string(),
            });
        }
        self.loaded.push(resource.to_string());
        let frames = if self.empty.as_deref() == Some(resource) { 0 } else { 12 };
        Ok(animation(resource, frames, 100))
    }
}

#[derive(Debug, Default)]
pub struct HostLog {
    pub exits: Vec<i32>,
    pub opened_urls: Vec<String>,
}

/// Host services that record instead of exiting or spawning processes
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub log: Rc<RefCell<HostLog>>,
    pub fail_open: bool,
}

impl HostServices for RecordingHost {
    fn exit(&mut self, code: i32) {
        self.log.borrow_mut().exits.push(code);
    }

    fn open_url(&mut self, url: &str) -> Result<(), MenuError> {
        if self.fail_open {
            return Err(MenuError::UnsupportedPlatform("test".to_string()));
        }
        self.log.borrow_mut().opened_urls.push(url.to_string());
        Ok(())
    }
}

pub struct FixedGameStates(pub bool);

impl GameStates for FixedGameStates {
    fn has_game_states(&self) -> bool {
        self.0
    }
}

/// Audio provider that only remembers the requested track
#[derive(Default)]
pub struct RecordingAudio {
    pub current_track: Option<String>,
}

impl AudioProvider for RecordingAudio {
    fn play_bgm(&mut self, track: &str) {
        self.current_track = Some(track.to_string());
    }
}

#[derive(Default)]
pub struct RecordingLoading {
    pub reports: Vec<f32>,
}

impl LoadingState for RecordingLoading {
    fn progress(&mut self, fraction: f32) {
        self.reports.push(fraction);
    }
}

#[derive(Default)]
pub struct FakeInput {
    pub bound: Vec<&'static str>,
    pub refuse: bool,
}

impl InputManager for FakeInput {
    fn bind_handler(&mut self, name: &'static str) -> Result<(), MenuError> {
        if self.refuse {
            return Err(MenuError::HandlerAlreadyBound(name));
        }
        self.bound.push(name);
        Ok(())
    }
}
