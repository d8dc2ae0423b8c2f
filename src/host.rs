//! Process-level side effects the menu can trigger
//!
//! Quitting and opening the project website leave the menu's control for
//! good, so they sit behind [`HostServices`] and tests can observe them
//! without the test process exiting.

use crate::error::MenuError;
use std::process::Command;

pub trait HostServices {
    /// Terminates the application
    fn exit(&mut self, code: i32);

    /// Opens a URL with the operating system's default handler
    fn open_url(&mut self, url: &str) -> Result<(), MenuError>;
}

/// The real process and desktop shell
#[derive(Debug, Default)]
pub struct SystemHost;

impl HostServices for SystemHost {
    fn exit(&mut self, code: i32) {
        log::info!("Exiting with code {}", code);
        std::process::exit(code);
    }

    fn open_url(&mut self, url: &str) -> Result<(), MenuError> {
        let mut command = url_command(std::env::consts::OS, url)?;
        command.spawn()?;
        Ok(())
    }
}

/// Builds the shell command that opens `url` on the given OS
fn url_command(os: &str, url: &str) -> Result<Command, MenuError> {
    let command = match os {
        "linux" => {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
        "windows" => {
            let mut command = Command::new("rundll32");
            command.args(["url.dll,FileProtocolHandler", url]);
            command
        }
        "macos" => {
            let mut command = Command::new("open");
            command.arg(url);
            command
        }
        other => return Err(MenuError::UnsupportedPlatform(other.to_string())),
    };

    Ok(command)
}
