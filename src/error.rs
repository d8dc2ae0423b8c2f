//! Error types for the title menu
//!
//! Drawing primitives follow the SDL2 convention of `Result<(), String>`;
//! everything that crosses the screen contract is lifted into [`MenuError`].

use std::fmt;

#[derive(Debug)]
pub enum MenuError {
    /// An image or animation could not be loaded during the load phase
    Asset { resource: String, reason: String },

    /// A drawing primitive failed
    Render(String),

    /// A sprite could not be advanced
    Animation(String),

    /// Configuration file exists but is unusable
    Config(String),

    IoError(std::io::Error),
    SerializationError(serde_json::Error),

    /// The input manager already has this handler bound
    HandlerAlreadyBound(&'static str),

    /// Opening an external URL is not supported on this OS
    UnsupportedPlatform(String),

    /// render/advance called before a successful load
    ScreenNotLoaded,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Asset { resource, reason } => {
                write!(f, "Failed to load {}: {}", resource, reason)
            }
            MenuError::Render(msg) => write!(f, "Render error: {}", msg),
            MenuError::Animation(msg) => write!(f, "Animation error: {}", msg),
            MenuError::Config(msg) => write!(f, "Config error: {}", msg),
            MenuError::IoError(e) => write!(f, "IO error: {}", e),
            MenuError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            MenuError::HandlerAlreadyBound(name) => {
                write!(f, "Input handler already bound: {}", name)
            }
            MenuError::UnsupportedPlatform(os) => write!(f, "Unsupported platform: {}", os),
            MenuError::ScreenNotLoaded => write!(f, "Screen has not been loaded"),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::IoError(err)
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::SerializationError(err)
    }
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
