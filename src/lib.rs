//! Title menu for an action RPG
//!
//! The [`menu::MainMenu`] screen walks the player from the trademark splash
//! through the main menu and the TCP/IP multiplayer sub-menus, then hands
//! off to other screens through a [`navigation::Navigator`].

pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod gui;
pub mod host;
pub mod input_system;
pub mod menu;
pub mod navigation;
pub mod save;
pub mod screen;
pub mod surface;
pub mod text;

#[cfg(test)]
mod test_support;
