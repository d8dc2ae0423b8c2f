//! Fixed layout of the title menu: captions, positions, colours and the
//! asset descriptors each sprite is loaded from

use super::mode::{BackgroundId, ButtonId, LabelId, LogoId};
use crate::config::BuildInfo;
use crate::gui::{Alignment, ButtonKind, FontSize, Label};
use sdl2::pixels::Color;

pub const JOIN_ADDRESS_POSITION: (i32, i32) = (318, 245);

pub const JOIN_ADDRESS_FILTER: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890._:";

pub const LOGO_POSITION: (i32, i32) = (400, 120);

pub struct ButtonLayout {
    pub kind: ButtonKind,
    pub caption: &'static str,
    pub x: i32,
    pub y: i32,
}

pub fn button_layout(id: ButtonId) -> ButtonLayout {
    let (kind, caption, x, y) = match id {
        ButtonId::Exit => (ButtonKind::Wide, "EXIT DIABLO II", 264, 535),
        ButtonId::Credits => (ButtonKind::Short, "CREDITS", 264, 505),
        ButtonId::Cinematics => (ButtonKind::Short, "CINEMATICS", 401, 505),
        ButtonId::SinglePlayer => (ButtonKind::Wide, "SINGLE PLAYER", 264, 290),
        ButtonId::ProjectWebsite => (ButtonKind::Wide, "PROJECT WEBSITE", 264, 400),
        ButtonId::MapEngineTest => (ButtonKind::Wide, "MAP ENGINE TEST", 264, 440),
        ButtonId::Multiplayer => (ButtonKind::Wide, "MULTIPLAYER", 264, 330),
        ButtonId::NetworkTcpIp => (ButtonKind::Wide, "TCP/IP GAME", 264, 280),
        ButtonId::NetworkCancel => (ButtonKind::Wide, "CANCEL", 264, 540),
        ButtonId::TcpIpCancel => (ButtonKind::Medium, "CANCEL", 33, 543),
        ButtonId::TcpIpHostGame => (ButtonKind::Wide, "HOST GAME", 264, 280),
        ButtonId::TcpIpJoinGame => (ButtonKind::Wide, "JOIN GAME", 264, 320),
        ButtonId::ServerIpCancel => (ButtonKind::OkCancel, "CANCEL", 285, 305),
        ButtonId::ServerIpOk => (ButtonKind::OkCancel, "OK", 420, 305),
    };

    ButtonLayout { kind, caption, x, y }
}

pub fn create_label(id: LabelId, build: &BuildInfo) -> Label {
    let white = Color::RGB(255, 255, 255);
    let parchment = Color::RGB(188, 168, 140);

    match id {
        LabelId::Version => Label::new(format!("OpenDiablo2 - {}", build.branch), FontSize::Formal12)
            .color(white)
            .align(Alignment::Right)
            .at(795, -10),
        LabelId::Commit => Label::new(build.commit.clone(), FontSize::Formal10)
            .color(white)
            .align(Alignment::Left)
            .at(2, 2),
        LabelId::Copyright => Label::new(
            "Diablo 2 is © Copyright 2000-2016 Blizzard Entertainment",
            FontSize::Formal12,
        )
        .color(parchment)
        .align(Alignment::Center)
        .at(400, 500),
        LabelId::AllRightsReserved => Label::new("All Rights Reserved.", FontSize::Formal12)
            .color(parchment)
            .align(Alignment::Center)
            .at(400, 525),
        LabelId::Disclaimer => Label::new(
            "OpenDiablo2 is neither developed by, nor endorsed by Blizzard or its parent company Activision",
            FontSize::Formal10,
        )
        .color(Color::RGB(255, 255, 140))
        .align(Alignment::Center)
        .at(400, 580),
        LabelId::TcpIpOptions => Label::new("TCP/IP Options", FontSize::Font42)
            .color(white)
            .align(Alignment::Center)
            .at(400, 23),
        LabelId::TcpJoinGame => Label::new("Enter Host IP Address\nto Join Game", FontSize::Font16)
            .color(Color::RGB(216, 196, 128))
            .align(Alignment::Center)
            .at(400, 190),
    }
}

pub fn background_resource(id: BackgroundId) -> &'static str {
    match id {
        BackgroundId::GameSelect => "menu/game_select_screen.json",
        BackgroundId::Trademark => "menu/trademark_screen.json",
        BackgroundId::TcpIp => "menu/tcp_ip_background.json",
        BackgroundId::ServerIpPopup => "menu/popup_ok_cancel.json",
    }
}

pub fn background_position(id: BackgroundId) -> (i32, i32) {
    match id {
        BackgroundId::ServerIpPopup => (270, 175),
        BackgroundId::GameSelect | BackgroundId::Trademark | BackgroundId::TcpIp => (0, 0),
    }
}

pub fn logo_resource(id: LogoId) -> &'static str {
    match id {
        LogoId::BlackLeft => "menu/logo_black_left.json",
        LogoId::BlackRight => "menu/logo_black_right.json",
        LogoId::FireLeft => "menu/logo_fire_left.json",
        LogoId::FireRight => "menu/logo_fire_right.json",
    }
}

/// The fire layers animate with an additive blend over the black backdrops
pub fn logo_is_fire(id: LogoId) -> bool {
    matches!(id, LogoId::FireLeft | LogoId::FireRight)
}
