//! Animation descriptors and texture loading
//!
//! Every sprite on the menu is described by a small JSON file naming its
//! texture and the frames cut out of it. Both are resolved under the
//! configured asset root:
//!
//! ```json
//! {
//!   "texture": "menu/logo_fire_left.png",
//!   "frame_width": 256,
//!   "frame_height": 128,
//!   "frames": [{ "x": 0, "y": 0, "duration_ms": 40 }],
//!   "loop_animation": true
//! }
//! ```

use crate::error::MenuError;
use crate::gui::Frame;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub texture: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: Vec<FrameData>,
    #[serde(default = "default_loop")]
    pub loop_animation: bool,
}

fn default_loop() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub duration_ms: u64,
}

impl FrameData {
    pub fn to_frame(&self, width: u32, height: u32) -> Frame {
        Frame::new(self.x, self.y, width, height, self.duration_ms)
    }
}

impl AnimationDescriptor {
    pub fn load_from_file(path: &Path) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        let descriptor: AnimationDescriptor = serde_json::from_str(&content)?;
        Ok(descriptor)
    }

    pub fn create_frames(&self) -> Vec<Frame> {
        self.frames
            .iter()
            .map(|frame| frame.to_frame(self.frame_width, self.frame_height))
            .collect()
    }
}

/// A loaded animation: the texture key to draw from and its frames
#[derive(Debug, Clone)]
pub struct Animation {
    pub texture: String,
    pub frames: Vec<Frame>,
    pub loop_animation: bool,
}

/// Source of animations for the load phase
pub trait AssetLoader {
    fn load_animation(&mut self, resource: &str) -> Result<Animation, MenuError>;
}

/// Owns the SDL2 textures referenced by loaded animations
pub struct TextureStore<'t> {
    texture_creator: &'t TextureCreator<WindowContext>,
    asset_root: PathBuf,
    textures: HashMap<String, Texture<'t>>,
}

impl<'t> TextureStore<'t> {
    pub fn new(
        texture_creator: &'t TextureCreator<WindowContext>,
        asset_root: impl AsRef<Path>,
    ) -> Self {
        TextureStore {
            texture_creator,
            asset_root: asset_root.as_ref().to_path_buf(),
            textures: HashMap::new(),
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Texture<'t>> {
        self.textures.get_mut(key)
    }

    fn ensure_texture(&mut self, key: &str) -> Result<(), MenuError> {
        if self.textures.contains_key(key) {
            return Ok(());
        }

        let path = self.asset_root.join(key);
        let texture = self
            .texture_creator
            .load_texture(&path)
            .map_err(|reason| MenuError::Asset {
                resource: path.display().to_string(),
                reason,
            })?;

        self.textures.insert(key.to_string(), texture);
        Ok(())
    }
}

impl AssetLoader for TextureStore<'_> {
    fn load_animation(&mut self, resource: &str) -> Result<Animation, MenuError> {
        let path = self.asset_root.join(resource);
        let descriptor =
            AnimationDescriptor::load_from_file(&path).map_err(|e| MenuError::Asset {
                resource: resource.to_string(),
                reason: e.to_string(),
            })?;

        self.ensure_texture(&descriptor.texture)?;
        log::debug!("Loaded animation {} ({} frames)", resource, descriptor.frames.len());

        Ok(Animation {
            frames: descriptor.create_frames(),
            loop_animation: descriptor.loop_animation,
            texture: descriptor.texture,
        })
    }
}
