use super::mode::{ButtonId, ScreenMode};

/// Everything a menu button can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SinglePlayer,
    Multiplayer,
    ProjectWebsite,
    MapEngineTest,
    Credits,
    Exit,
    TcpIpGame,
    NetworkCancel,
    TcpIpCancel,
    HostGame,
    JoinGame,
    ServerIpCancel,
    ServerIpOk,
}

impl MenuAction {
    /// The mode this action switches to, for actions that stay on the menu
    pub fn target_mode(self) -> Option<ScreenMode> {
        match self {
            MenuAction::Multiplayer => Some(ScreenMode::Multiplayer),
            MenuAction::TcpIpGame => Some(ScreenMode::TcpIp),
            MenuAction::NetworkCancel => Some(ScreenMode::MainMenu),
            MenuAction::TcpIpCancel => Some(ScreenMode::Multiplayer),
            MenuAction::JoinGame => Some(ScreenMode::ServerIp),
            MenuAction::ServerIpCancel => Some(ScreenMode::TcpIp),
            MenuAction::SinglePlayer
            | MenuAction::ProjectWebsite
            | MenuAction::MapEngineTest
            | MenuAction::Credits
            | MenuAction::Exit
            | MenuAction::HostGame
            | MenuAction::ServerIpOk => None,
        }
    }
}

impl ButtonId {
    /// Cinematics has no action wired up yet
    pub fn action(self) -> Option<MenuAction> {
        match self {
            ButtonId::Exit => Some(MenuAction::Exit),
            ButtonId::Credits => Some(MenuAction::Credits),
            ButtonId::Cinematics => None,
            ButtonId::SinglePlayer => Some(MenuAction::SinglePlayer),
            ButtonId::ProjectWebsite => Some(MenuAction::ProjectWebsite),
            ButtonId::MapEngineTest => Some(MenuAction::MapEngineTest),
            ButtonId::Multiplayer => Some(MenuAction::Multiplayer),
            ButtonId::NetworkTcpIp => Some(MenuAction::TcpIpGame),
            ButtonId::NetworkCancel => Some(MenuAction::NetworkCancel),
            ButtonId::TcpIpCancel => Some(MenuAction::TcpIpCancel),
            ButtonId::TcpIpHostGame => Some(MenuAction::HostGame),
            ButtonId::TcpIpJoinGame => Some(MenuAction::JoinGame),
            ButtonId::ServerIpCancel => Some(MenuAction::ServerIpCancel),
            ButtonId::ServerIpOk => Some(MenuAction::ServerIpOk),
        }
    }
}
