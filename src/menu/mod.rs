//! The title menu screen
//!
//! - [`mode`] - screen modes and the per-mode visibility table
//! - [`action`] - what each button does
//! - [`layout`] - captions, positions and asset descriptors
//! - [`main_menu`] - the [`MainMenu`] screen itself

pub mod action;
pub mod layout;
pub mod main_menu;
pub mod mode;

pub use action::MenuAction;
pub use main_menu::{MainMenu, INPUT_HANDLER_NAME};
pub use mode::{BackgroundId, ButtonId, LabelId, LogoId, ScreenMode, Widget};
