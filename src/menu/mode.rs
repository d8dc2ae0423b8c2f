//! Screen modes and what each one shows
//!
//! Visibility is a table from [`ScreenMode`] to the interactive widgets shown
//! in it. Any widget missing from a mode's list is hidden in that mode.

use enum_map::Enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    /// Before the first load completes; never re-entered
    #[default]
    Unknown,
    Trademark,
    MainMenu,
    Multiplayer,
    TcpIp,
    ServerIp,
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Exit,
    Credits,
    Cinematics,
    SinglePlayer,
    ProjectWebsite,
    MapEngineTest,
    Multiplayer,
    NetworkTcpIp,
    NetworkCancel,
    TcpIpCancel,
    TcpIpHostGame,
    TcpIpJoinGame,
    ServerIpCancel,
    ServerIpOk,
}

/// Every widget whose visibility depends on the screen mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Button(ButtonId),
    JoinAddressEntry,
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelId {
    Version,
    Commit,
    Copyright,
    AllRightsReserved,
    Disclaimer,
    TcpIpOptions,
    TcpJoinGame,
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundId {
    GameSelect,
    Trademark,
    TcpIp,
    ServerIpPopup,
}

impl BackgroundId {
    /// Grid the background's frames are tiled into
    pub fn segments(self) -> (u32, u32) {
        match self {
            BackgroundId::ServerIpPopup => (2, 1),
            BackgroundId::GameSelect | BackgroundId::Trademark | BackgroundId::TcpIp => (4, 3),
        }
    }
}

/// Logo layers in draw order: black backdrops first, fire on top
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoId {
    BlackLeft,
    BlackRight,
    FireLeft,
    FireRight,
}

const MAIN_MENU_WIDGETS: &[Widget] = &[
    Widget::Button(ButtonId::Exit),
    Widget::Button(ButtonId::Credits),
    Widget::Button(ButtonId::Cinematics),
    Widget::Button(ButtonId::SinglePlayer),
    Widget::Button(ButtonId::ProjectWebsite),
    Widget::Button(ButtonId::MapEngineTest),
    Widget::Button(ButtonId::Multiplayer),
];

const MULTIPLAYER_WIDGETS: &[Widget] = &[
    Widget::Button(ButtonId::NetworkTcpIp),
    Widget::Button(ButtonId::NetworkCancel),
];

const TCP_IP_WIDGETS: &[Widget] = &[
    Widget::Button(ButtonId::TcpIpCancel),
    Widget::Button(ButtonId::TcpIpHostGame),
    Widget::Button(ButtonId::TcpIpJoinGame),
];

const SERVER_IP_WIDGETS: &[Widget] = &[
    Widget::JoinAddressEntry,
    Widget::Button(ButtonId::ServerIpOk),
    Widget::Button(ButtonId::ServerIpCancel),
];

impl ScreenMode {
    pub fn visible_widgets(self) -> &'static [Widget] {
        match self {
            ScreenMode::MainMenu => MAIN_MENU_WIDGETS,
            ScreenMode::Multiplayer => MULTIPLAYER_WIDGETS,
            ScreenMode::TcpIp => TCP_IP_WIDGETS,
            ScreenMode::ServerIp => SERVER_IP_WIDGETS,
            ScreenMode::Trademark | ScreenMode::Unknown => &[],
        }
    }

    pub fn shows(self, widget: Widget) -> bool {
        self.visible_widgets().contains(&widget)
    }

    /// Whether the join-address entry takes keyboard focus in this mode
    pub fn focuses_address_entry(self) -> bool {
        self == ScreenMode::ServerIp
    }

    pub fn background(self) -> BackgroundId {
        match self {
            ScreenMode::Trademark => BackgroundId::Trademark,
            ScreenMode::ServerIp => BackgroundId::ServerIpPopup,
            ScreenMode::TcpIp => BackgroundId::TcpIp,
            ScreenMode::Unknown | ScreenMode::MainMenu | ScreenMode::Multiplayer => {
                BackgroundId::GameSelect
            }
        }
    }

    /// Logos are drawn and animated only on the title screens
    pub fn shows_logos(self) -> bool {
        matches!(
            self,
            ScreenMode::Trademark | ScreenMode::MainMenu | ScreenMode::Multiplayer
        )
    }

    pub fn labels(self) -> &'static [LabelId] {
        match self {
            ScreenMode::ServerIp => &[LabelId::TcpIpOptions, LabelId::TcpJoinGame],
            ScreenMode::TcpIp => &[LabelId::TcpIpOptions],
            ScreenMode::Trademark => &[LabelId::Copyright, LabelId::AllRightsReserved],
            ScreenMode::MainMenu => &[LabelId::Disclaimer, LabelId::Version, LabelId::Commit],
            ScreenMode::Unknown | ScreenMode::Multiplayer => &[],
        }
    }
}
