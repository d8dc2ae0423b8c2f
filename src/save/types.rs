//! Saved character data types
//!
//! Each saved character lives in its own JSON file in the save directory.
//! The title menu only reads these to decide whether the player has anyone
//! to pick from.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSave {
    pub version: u32,
    pub hero_name: String,
    pub hero_class: HeroClass,
    pub level: u32,
    pub last_played: SystemTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeroClass {
    Amazon,
    Assassin,
    Necromancer,
    Barbarian,
    Paladin,
    Sorceress,
    Druid,
}

/// Error types for character save operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SaveError::InvalidVersion(v) => write!(f, "Invalid save version: {}", v),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::IoError(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::SerializationError(err)
    }
}

/// Current character save version
pub const CURRENT_SAVE_VERSION: u32 = 1;
