//! Music playback hooks for screens
//!
//! [`KiraAudio`] streams background music through kira. Without an output
//! device it keeps running silently so the menu still works.

use kira::sound::streaming::{StreamingSoundData, StreamingSoundHandle};
use kira::sound::FromFileError;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend, Tween};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Background music playback, fire-and-forget
pub trait AudioProvider {
    fn play_bgm(&mut self, track: &str);
}

const BGM_FADE_OUT: Duration = Duration::from_millis(500);

/// Looping background music, one track at a time
pub struct KiraAudio {
    manager: Option<AudioManager<DefaultBackend>>,
    music_root: PathBuf,
    bgm: Option<StreamingSoundHandle<FromFileError>>,
}

impl KiraAudio {
    /// Opens the default output device; tracks are resolved under `music_root`
    pub fn new(music_root: impl AsRef<Path>) -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("No audio output available, music disabled: {}", e);
                None
            }
        };

        KiraAudio {
            manager,
            music_root: music_root.as_ref().to_path_buf(),
            bgm: None,
        }
    }

    fn stop_bgm(&mut self) {
        if let Some(mut handle) = self.bgm.take() {
            handle.stop(Tween {
                duration: BGM_FADE_OUT,
                ..Default::default()
            });
        }
    }
}

impl AudioProvider for KiraAudio {
    fn play_bgm(&mut self, track: &str) {
        self.stop_bgm();

        let Some(manager) = self.manager.as_mut() else {
            log::debug!("Skipping music {} (audio disabled)", track);
            return;
        };

        let path = self.music_root.join(track);
        let data = match StreamingSoundData::from_file(&path) {
            Ok(data) => data.loop_region(..),
            Err(e) => {
                log::warn!("Could not open music {}: {}", path.display(), e);
                return;
            }
        };

        match manager.play(data) {
            Ok(handle) => {
                log::debug!("Playing music {}", track);
                self.bgm = Some(handle);
            }
            Err(e) => log::error!("Failed to play music {}: {}", track, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn without_device() -> KiraAudio {
        KiraAudio {
            manager: None,
            music_root: PathBuf::from("assets"),
            bgm: None,
        }
    }

    #[test]
    fn test_play_without_device_is_silent() {
        let mut audio = without_device();
        audio.play_bgm("music/title.ogg");
        assert!(audio.bgm.is_none());
    }
}
