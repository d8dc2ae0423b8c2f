//! Contract between a screen and the application hosting it
//!
//! The host loads a screen once, then calls [`Screen::advance`] followed by
//! [`Screen::render`] every frame on the same thread that delivers input.

use crate::assets::AssetLoader;
use crate::audio::AudioProvider;
use crate::error::MenuError;
use crate::input_system::InputManager;
use crate::surface::Surface;

/// Receives load progress as a fraction in [0, 1]
pub trait LoadingState {
    fn progress(&mut self, fraction: f32);
}

/// Capabilities a screen borrows while loading
pub struct ScreenServices<'s> {
    pub assets: &'s mut dyn AssetLoader,
    pub audio: &'s mut dyn AudioProvider,
    pub input: &'s mut dyn InputManager,
}

pub trait Screen {
    /// Builds all widgets; on error the screen must not be shown
    fn load(
        &mut self,
        services: &mut ScreenServices<'_>,
        loading: &mut dyn LoadingState,
    ) -> Result<(), MenuError>;

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), MenuError>;

    /// `elapsed` is the frame time in seconds
    fn advance(&mut self, elapsed: f64) -> Result<(), MenuError>;
}

/// Loading state that logs progress and never reports going backwards
#[derive(Debug, Default)]
pub struct ProgressLog {
    fraction: f32,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}

impl LoadingState for ProgressLog {
    fn progress(&mut self, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction < self.fraction {
            log::warn!("Ignoring load progress going backwards ({} -> {})", self.fraction, fraction);
            return;
        }
        self.fraction = fraction;
        log::debug!("Loading {:.0}%", fraction * 100.0);
    }
}
