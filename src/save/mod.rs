//! Saved character lookup
//!
//! - `types`: character save structures and error types
//! - `manager`: [`SaveDirectory`] for reading the save folder
//!
//! The menu depends only on the [`GameStates`] trait so tests can answer
//! "are there saved characters?" without touching the filesystem.

pub mod manager;
pub mod types;

pub use manager::SaveDirectory;
pub use types::*;

/// Answers whether any previously saved characters exist
pub trait GameStates {
    fn has_game_states(&self) -> bool;
}
