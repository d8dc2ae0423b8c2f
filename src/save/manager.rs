//! Save directory scanning
//!
//! [`SaveDirectory`] enumerates the character saves on disk. The title menu
//! uses it to choose between character select and hero creation.

use super::types::*;
use super::GameStates;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SaveDirectory {
    save_directory: PathBuf,
}

impl SaveDirectory {
    /// Creates the save directory if it doesn't exist
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveDirectory {
            save_directory: save_dir,
        })
    }

    /// Writes a character save as `<hero_name>.json`
    pub fn save_character(&self, save: &CharacterSave) -> Result<PathBuf, SaveError> {
        let filepath = self.save_directory.join(format!("{}.json", save.hero_name));
        let json = serde_json::to_string_pretty(save)?;
        fs::write(&filepath, json)?;
        Ok(filepath)
    }

    pub fn load_character(&self, filename: &str) -> Result<CharacterSave, SaveError> {
        let json = fs::read_to_string(self.save_directory.join(filename))?;
        let save: CharacterSave = serde_json::from_str(&json)?;

        if save.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(save.version));
        }

        Ok(save)
    }

    /// All readable character saves, most recently played first
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list_characters(&self) -> Result<Vec<CharacterSave>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                match self.load_character(filename) {
                    Ok(save) => saves.push(save),
                    Err(e) => log::warn!("Skipping unreadable save {}: {}", filename, e),
                }
            }
        }

        saves.sort_by(|a, b| b.last_played.cmp(&a.last_played));

        Ok(saves)
    }
}

impl GameStates for SaveDirectory {
    fn has_game_states(&self) -> bool {
        match self.list_characters() {
            Ok(saves) => {
                if let Some(latest) = saves.first() {
                    let played = chrono::DateTime::<chrono::Local>::from(latest.last_played);
                    log::debug!(
                        "{} saved character(s), latest {} played {}",
                        saves.len(),
                        latest.hero_name,
                        played.format("%Y-%m-%d %H:%M")
                    );
                }
                !saves.is_empty()
            }
            Err(e) => {
                log::warn!("Could not read save directory {}: {}", self.save_directory.display(), e);
                false
            }
        }
    }
}
