//! Screen-Space Widgets
//!
//! The building blocks the title menu is assembled from. Every widget renders
//! through [`crate::surface::Surface`] at fixed screen coordinates on an
//! 800x600 canvas.
//!
//! # Available Components
//!
//! - [`Button`] - clickable button, activates on release
//! - [`Label`] - aligned, optionally multi-line text
//! - [`TextBox`] - filtered single-line text entry
//! - [`Sprite`] - animated image with segmented rendering for backgrounds
//!
//! # Example Usage
//!
//! ```ignore
//! let mut button = Button::new(ButtonKind::Wide, "CREDITS");
//! button.set_position(264, 505);
//!
//! // Mouse down then mouse up inside the button activates it
//! button.press(300, 510);
//! if button.release(300, 510) {
//!     // handle activation
//! }
//!
//! button.render(&mut surface)?;
//! ```

pub mod button;
pub mod label;
pub mod sprite;
pub mod text_box;

pub use button::{Button, ButtonKind, ButtonStyle};
pub use label::{Alignment, FontSize, Label};
pub use sprite::{Frame, Sprite};
pub use text_box::TextBox;
