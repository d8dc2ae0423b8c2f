//! The title screen: trademark splash, main menu and the TCP/IP sub-menus
//!
//! One [`MainMenu`] owns every widget of every mode. Switching modes only
//! flips visibility, so nothing is reloaded after [`Screen::load`].

use super::action::MenuAction;
use super::layout::{
    background_position, background_resource, button_layout, create_label, logo_is_fire,
    logo_resource, JOIN_ADDRESS_FILTER, JOIN_ADDRESS_POSITION, LOGO_POSITION,
};
use super::mode::{BackgroundId, ButtonId, LabelId, LogoId, ScreenMode, Widget};
use crate::assets::AssetLoader;
use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::gui::{Button, Label, Sprite, TextBox};
use crate::host::HostServices;
use crate::input_system::{InputHandler, MouseEvent};
use crate::navigation::{ConnectionType, Navigator};
use crate::save::GameStates;
use crate::screen::{LoadingState, Screen, ScreenServices};
use crate::surface::{DrawEffect, Surface};
use enum_map::EnumMap;
use sdl2::mouse::MouseButton;

pub const INPUT_HANDLER_NAME: &str = "main_menu";

/// Everything created during load; present only once load succeeded
struct MenuWidgets {
    buttons: EnumMap<ButtonId, Button>,
    join_address: TextBox,
    labels: EnumMap<LabelId, Label>,
    backgrounds: EnumMap<BackgroundId, Sprite>,
    logos: EnumMap<LogoId, Sprite>,
}

impl MenuWidgets {
    fn apply_visibility(&mut self, mode: ScreenMode) {
        for (id, button) in self.buttons.iter_mut() {
            button.set_visible(mode.shows(Widget::Button(id)));
        }

        self.join_address
            .set_visible(mode.shows(Widget::JoinAddressEntry));
        if mode.focuses_address_entry() {
            self.join_address.activate();
        }
    }
}

pub struct MainMenu {
    screen_mode: ScreenMode,
    widgets: Option<MenuWidgets>,
    config: MenuConfig,
    navigator: Box<dyn Navigator>,
    host: Box<dyn HostServices>,
    game_states: Box<dyn GameStates>,
}

impl MainMenu {
    pub fn new(
        config: MenuConfig,
        navigator: Box<dyn Navigator>,
        host: Box<dyn HostServices>,
        game_states: Box<dyn GameStates>,
    ) -> Self {
        MainMenu {
            screen_mode: ScreenMode::Unknown,
            widgets: None,
            config,
            navigator,
            host,
            game_states,
        }
    }

    pub fn screen_mode(&self) -> ScreenMode {
        self.screen_mode
    }

    pub fn is_loaded(&self) -> bool {
        self.widgets.is_some()
    }

    /// Switches mode and applies that mode's visibility to every widget
    ///
    /// Entering `ServerIp` gives the join-address entry keyboard focus.
    pub fn set_screen_mode(&mut self, mode: ScreenMode) {
        if mode == ScreenMode::Unknown {
            log::warn!("Refusing to switch the title menu back to an unknown mode");
            return;
        }

        if mode != self.screen_mode {
            log::debug!("Title menu mode {:?} -> {:?}", self.screen_mode, mode);
        }

        self.screen_mode = mode;
        if let Some(widgets) = self.widgets.as_mut() {
            widgets.apply_visibility(mode);
        }
    }

    /// Whether a widget is currently shown; false before load
    pub fn is_widget_visible(&self, widget: Widget) -> bool {
        let Some(widgets) = self.widgets.as_ref() else {
            return false;
        };

        match widget {
            Widget::Button(id) => widgets.buttons[id].is_visible(),
            Widget::JoinAddressEntry => widgets.join_address.is_visible(),
        }
    }

    pub fn join_address(&self) -> &str {
        self.widgets
            .as_ref()
            .map(|widgets| widgets.join_address.text())
            .unwrap_or("")
    }

    pub fn is_join_address_focused(&self) -> bool {
        self.widgets
            .as_ref()
            .is_some_and(|widgets| widgets.join_address.is_active())
    }

    pub fn logo_frame(&self, id: LogoId) -> Option<usize> {
        self.widgets
            .as_ref()
            .map(|widgets| widgets.logos[id].current_frame())
    }

    /// Runs the transition for a button action
    pub fn dispatch(&mut self, action: MenuAction) {
        log::debug!("Title menu action {:?} in {:?}", action, self.screen_mode);

        match action {
            MenuAction::SinglePlayer => {
                let address = self.join_address().to_string();
                if self.game_states.has_game_states() {
                    self.navigator
                        .to_character_select(ConnectionType::Local, &address);
                } else {
                    self.navigator
                        .to_select_hero(ConnectionType::Local, &address);
                }
            }
            MenuAction::ProjectWebsite => self.open_project_website(),
            MenuAction::MapEngineTest => self.navigator.to_map_engine_test(0, 1),
            MenuAction::Credits => self.navigator.to_credits(),
            MenuAction::Exit => self.host.exit(0),
            MenuAction::HostGame => self
                .navigator
                .to_character_select(ConnectionType::LanServer, ""),
            MenuAction::ServerIpOk => {
                let address = self.join_address().to_string();
                self.navigator
                    .to_character_select(ConnectionType::LanClient, &address);
            }
            MenuAction::Multiplayer
            | MenuAction::TcpIpGame
            | MenuAction::NetworkCancel
            | MenuAction::TcpIpCancel
            | MenuAction::JoinGame
            | MenuAction::ServerIpCancel => {
                if let Some(mode) = action.target_mode() {
                    self.set_screen_mode(mode);
                }
            }
        }
    }

    fn open_project_website(&mut self) {
        let url = self.config.project_url.clone();
        log::info!("Opening {}", url);

        if let Err(e) = self.host.open_url(&url) {
            log::error!("Failed to open {}: {}", url, e);
            self.host.exit(1);
        }
    }

    /// Arms the visible button under the cursor; returns true if one was hit
    pub fn on_widget_press(&mut self, event: &MouseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        let Some(widgets) = self.widgets.as_mut() else {
            return false;
        };

        let mut hit = false;
        for button in widgets.buttons.values_mut() {
            hit |= button.press(event.x, event.y);
        }
        hit
    }

    /// Completes a click started by [`MainMenu::on_widget_press`] and runs
    /// the button's action, if any
    pub fn on_widget_release(&mut self, event: &MouseEvent) -> Option<MenuAction> {
        if event.button != MouseButton::Left {
            return None;
        }
        let widgets = self.widgets.as_mut()?;

        let mut activated = None;
        for (id, button) in widgets.buttons.iter_mut() {
            if button.release(event.x, event.y) {
                activated = Some(id);
            }
        }

        let action = activated?.action()?;
        self.dispatch(action);
        Some(action)
    }

    /// Typed text goes to the join-address entry while it has focus
    pub fn on_text_input(&mut self, text: &str) -> bool {
        match self.widgets.as_mut() {
            Some(widgets) => widgets.join_address.on_text_input(text),
            None => false,
        }
    }

    pub fn on_backspace(&mut self) -> bool {
        match self.widgets.as_mut() {
            Some(widgets) => widgets.join_address.on_backspace(),
            None => false,
        }
    }
}

fn load_sprite(
    assets: &mut dyn AssetLoader,
    resource: &str,
    (x, y): (i32, i32),
) -> Result<Sprite, MenuError> {
    let mut sprite = Sprite::new(assets.load_animation(resource)?);
    sprite.set_position(x, y);
    Ok(sprite)
}

fn load_background(assets: &mut dyn AssetLoader, id: BackgroundId) -> Result<Sprite, MenuError> {
    load_sprite(assets, background_resource(id), background_position(id))
}

fn load_logo(assets: &mut dyn AssetLoader, id: LogoId) -> Result<Sprite, MenuError> {
    let mut logo = load_sprite(assets, logo_resource(id), LOGO_POSITION)?;
    if logo_is_fire(id) {
        logo.set_effect(DrawEffect::Modulate);
        logo.play_forward();
    }
    Ok(logo)
}

fn create_button(id: ButtonId) -> Button {
    let layout = button_layout(id);
    let mut button = Button::new(layout.kind, layout.caption);
    button.set_position(layout.x, layout.y);
    button
}

impl Screen for MainMenu {
    fn load(
        &mut self,
        services: &mut ScreenServices<'_>,
        loading: &mut dyn LoadingState,
    ) -> Result<(), MenuError> {
        services.audio.play_bgm(&self.config.title_music);
        loading.progress(0.2);

        let labels = EnumMap::from_fn(|id| create_label(id, &self.config.build));
        loading.progress(0.3);

        let backgrounds = EnumMap::from_array([
            load_background(services.assets, BackgroundId::GameSelect)?,
            load_background(services.assets, BackgroundId::Trademark)?,
            load_background(services.assets, BackgroundId::TcpIp)?,
            load_background(services.assets, BackgroundId::ServerIpPopup)?,
        ]);
        loading.progress(0.5);

        let logos = EnumMap::from_array([
            load_logo(services.assets, LogoId::BlackLeft)?,
            load_logo(services.assets, LogoId::BlackRight)?,
            load_logo(services.assets, LogoId::FireLeft)?,
            load_logo(services.assets, LogoId::FireRight)?,
        ]);
        loading.progress(0.6);

        let buttons = EnumMap::from_fn(create_button);
        loading.progress(0.7);

        let mut join_address = TextBox::new();
        join_address.set_filter(JOIN_ADDRESS_FILTER);
        join_address.set_position(JOIN_ADDRESS_POSITION.0, JOIN_ADDRESS_POSITION.1);
        loading.progress(0.8);

        let first_load = self.widgets.is_none() && self.screen_mode == ScreenMode::Unknown;
        self.widgets = Some(MenuWidgets {
            buttons,
            join_address,
            labels,
            backgrounds,
            logos,
        });
        self.set_screen_mode(if first_load {
            ScreenMode::Trademark
        } else {
            ScreenMode::MainMenu
        });
        loading.progress(0.9);

        if let Err(e) = services.input.bind_handler(INPUT_HANDLER_NAME) {
            log::warn!("Failed to add the title menu as an input handler: {}", e);
        }

        log::info!("Title menu loaded in {:?} mode", self.screen_mode);
        loading.progress(1.0);
        Ok(())
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<(), MenuError> {
        let widgets = self.widgets.as_ref().ok_or(MenuError::ScreenNotLoaded)?;
        let mode = self.screen_mode;

        let background = mode.background();
        let (segments_x, segments_y) = background.segments();
        widgets.backgrounds[background]
            .render_segmented(surface, segments_x, segments_y, 0)
            .map_err(MenuError::Render)?;

        if mode.shows_logos() {
            for logo in widgets.logos.values() {
                logo.render(surface).map_err(MenuError::Render)?;
            }
        }

        for id in mode.labels() {
            widgets.labels[*id]
                .render(surface)
                .map_err(MenuError::Render)?;
        }

        for button in widgets.buttons.values() {
            button.render(surface).map_err(MenuError::Render)?;
        }
        widgets
            .join_address
            .render(surface)
            .map_err(MenuError::Render)?;

        Ok(())
    }

    fn advance(&mut self, elapsed: f64) -> Result<(), MenuError> {
        let widgets = self.widgets.as_mut().ok_or(MenuError::ScreenNotLoaded)?;

        if self.screen_mode.shows_logos() {
            for logo in widgets.logos.values_mut() {
                logo.advance(elapsed)?;
            }
        }

        Ok(())
    }
}

impl InputHandler for MainMenu {
    /// Any left click dismisses the trademark splash
    fn on_mouse_button_down(&mut self, event: &MouseEvent) -> bool {
        if self.screen_mode == ScreenMode::Trademark && event.button == MouseButton::Left {
            self.set_screen_mode(ScreenMode::MainMenu);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationQueue, NavigationRequest};
    use crate::test_support::{
        FakeAssets, FakeInput, FixedGameStates, HostLog, RecordingAudio, RecordingHost,
        RecordingLoading, RecordingSurface,
    };
    use enum_map::Enum;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Harness {
        menu: MainMenu,
        navigation: NavigationQueue,
        host_log: Rc<RefCell<HostLog>>,
        assets: FakeAssets,
        audio: RecordingAudio,
        input: FakeInput,
        loading: RecordingLoading,
    }

    impl Harness {
        fn new(has_saves: bool) -> Self {
            Self::with_host(has_saves, RecordingHost::default())
        }

        fn with_host(has_saves: bool, host: RecordingHost) -> Self {
            let navigation = NavigationQueue::new();
            let host_log = host.log.clone();
            let menu = MainMenu::new(
                MenuConfig::default(),
                Box::new(navigation.clone()),
                Box::new(host),
                Box::new(FixedGameStates(has_saves)),
            );

            Harness {
                menu,
                navigation,
                host_log,
                assets: FakeAssets::default(),
                audio: RecordingAudio::default(),
                input: FakeInput::default(),
                loading: RecordingLoading::default(),
            }
        }

        fn load(&mut self) -> Result<(), MenuError> {
            let mut services = ScreenServices {
                assets: &mut self.assets,
                audio: &mut self.audio,
                input: &mut self.input,
            };
            self.menu.load(&mut services, &mut self.loading)
        }

        fn loaded(has_saves: bool) -> Self {
            let mut harness = Self::new(has_saves);
            assert!(harness.load().is_ok());
            harness
        }

        /// Routes a left click the way the host does
        fn click_at(&mut self, x: i32, y: i32) -> Option<MenuAction> {
            let event = MouseEvent::new(MouseButton::Left, x, y);
            if self.menu.on_mouse_button_down(&event) {
                return None;
            }
            self.menu.on_widget_press(&event);
            self.menu.on_widget_release(&event)
        }

        fn click(&mut self, id: ButtonId) -> Option<MenuAction> {
            let layout = button_layout(id);
            self.click_at(layout.x + 5, layout.y + 5)
        }

        fn rendered(&mut self) -> RecordingSurface {
            let mut surface = RecordingSurface::new();
            assert!(self.menu.render(&mut surface).is_ok());
            surface
        }
    }

    fn all_buttons() -> Vec<ButtonId> {
        (0..ButtonId::LENGTH).map(ButtonId::from_usize).collect()
    }

    const LOADED_MODES: [ScreenMode; 5] = [
        ScreenMode::Trademark,
        ScreenMode::MainMenu,
        ScreenMode::Multiplayer,
        ScreenMode::TcpIp,
        ScreenMode::ServerIp,
    ];

    #[test]
    fn test_first_load_shows_trademark() {
        let mut harness = Harness::new(false);
        assert!(harness.load().is_ok());

        assert_eq!(harness.menu.screen_mode(), ScreenMode::Trademark);
        assert_eq!(harness.audio.current_track.as_deref(), Some("music/title.ogg"));
        assert_eq!(harness.input.bound, vec![INPUT_HANDLER_NAME]);
        for id in all_buttons() {
            assert!(!harness.menu.is_widget_visible(Widget::Button(id)));
        }
    }

    #[test]
    fn test_load_progress_is_monotonic_and_completes() {
        let harness = Harness::loaded(false);
        let reports = &harness.loading.reports;

        assert_eq!(reports.first(), Some(&0.2));
        assert_eq!(reports.last(), Some(&1.0));
        assert!(reports.windows(2).all(|pair| pair[0] <= pair[1]));
        for checkpoint in [0.2, 0.3, 0.5, 0.6, 0.7, 0.8, 0.9] {
            assert!(reports.contains(&checkpoint), "missing {}", checkpoint);
        }
    }

    #[test]
    fn test_reload_goes_straight_to_main_menu() {
        let mut harness = Harness::loaded(false);
        harness.input.refuse = true;
        assert!(harness.load().is_ok());
        assert_eq!(harness.menu.screen_mode(), ScreenMode::MainMenu);
    }

    #[test]
    fn test_missing_asset_aborts_load() {
        let mut harness = Harness::new(false);
        harness.assets.missing = Some("menu/logo_fire_left.json".to_string());

        let result = harness.load();
        assert!(matches!(result, Err(MenuError::Asset { .. })));
        assert_eq!(harness.menu.screen_mode(), ScreenMode::Unknown);
        assert!(!harness.menu.is_loaded());
        assert!(harness.input.bound.is_empty());
        assert_ne!(harness.loading.reports.last(), Some(&1.0));

        let mut surface = RecordingSurface::new();
        assert!(matches!(
            harness.menu.render(&mut surface),
            Err(MenuError::ScreenNotLoaded)
        ));
        assert!(matches!(
            harness.menu.advance(0.1),
            Err(MenuError::ScreenNotLoaded)
        ));
    }

    #[test]
    fn test_input_binding_failure_is_not_fatal() {
        let mut harness = Harness::new(false);
        harness.input.refuse = true;

        assert!(harness.load().is_ok());
        assert_eq!(harness.menu.screen_mode(), ScreenMode::Trademark);
        assert_eq!(harness.loading.reports.last(), Some(&1.0));
    }

    #[test]
    fn test_visibility_matches_mode_table() {
        let mut harness = Harness::loaded(false);

        for mode in LOADED_MODES {
            harness.menu.set_screen_mode(mode);
            for id in all_buttons() {
                let widget = Widget::Button(id);
                assert_eq!(
                    harness.menu.is_widget_visible(widget),
                    mode.shows(widget),
                    "{:?} in {:?}",
                    id,
                    mode
                );
            }
            assert_eq!(
                harness.menu.is_widget_visible(Widget::JoinAddressEntry),
                mode == ScreenMode::ServerIp
            );
        }
    }

    fn visible_widgets(menu: &MainMenu) -> Vec<Widget> {
        let mut widgets: Vec<Widget> = all_buttons()
            .into_iter()
            .map(Widget::Button)
            .filter(|widget| menu.is_widget_visible(*widget))
            .collect();
        if menu.is_widget_visible(Widget::JoinAddressEntry) {
            widgets.push(Widget::JoinAddressEntry);
        }
        widgets
    }

    #[test]
    fn test_each_mode_shows_exactly_its_widgets() {
        let expected = [
            (ScreenMode::Trademark, vec![]),
            (
                ScreenMode::MainMenu,
                vec![
                    Widget::Button(ButtonId::Exit),
                    Widget::Button(ButtonId::Credits),
                    Widget::Button(ButtonId::Cinematics),
                    Widget::Button(ButtonId::SinglePlayer),
                    Widget::Button(ButtonId::ProjectWebsite),
                    Widget::Button(ButtonId::MapEngineTest),
                    Widget::Button(ButtonId::Multiplayer),
                ],
            ),
            (
                ScreenMode::Multiplayer,
                vec![
                    Widget::Button(ButtonId::NetworkTcpIp),
                    Widget::Button(ButtonId::NetworkCancel),
                ],
            ),
            (
                ScreenMode::TcpIp,
                vec![
                    Widget::Button(ButtonId::TcpIpCancel),
                    Widget::Button(ButtonId::TcpIpHostGame),
                    Widget::Button(ButtonId::TcpIpJoinGame),
                ],
            ),
            (
                ScreenMode::ServerIp,
                vec![
                    Widget::Button(ButtonId::ServerIpCancel),
                    Widget::Button(ButtonId::ServerIpOk),
                    Widget::JoinAddressEntry,
                ],
            ),
        ];

        let unloaded = Harness::new(false);
        assert_eq!(unloaded.menu.screen_mode(), ScreenMode::Unknown);
        assert!(visible_widgets(&unloaded.menu).is_empty());
        assert!(ScreenMode::Unknown.visible_widgets().is_empty());

        let mut harness = Harness::loaded(false);
        for (mode, widgets) in expected {
            harness.menu.set_screen_mode(mode);
            assert_eq!(visible_widgets(&harness.menu), widgets, "{:?}", mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_never_reentered() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::Unknown);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::Trademark);
    }

    #[test]
    fn test_click_dismisses_trademark() {
        let mut harness = Harness::loaded(false);
        let event = MouseEvent::new(MouseButton::Left, 10, 10);

        assert!(harness.menu.on_mouse_button_down(&event));
        assert_eq!(harness.menu.screen_mode(), ScreenMode::MainMenu);

        let texts = harness.rendered().texts();
        assert!(texts.iter().any(|t| t.starts_with("OpenDiablo2 is neither")));
        assert!(!texts.iter().any(|t| t.starts_with("Diablo 2 is")));
        assert!(texts.iter().any(|t| t == "SINGLE PLAYER"));
    }

    #[test]
    fn test_clicks_outside_trademark_are_not_consumed() {
        let mut harness = Harness::loaded(false);

        let right = MouseEvent::new(MouseButton::Right, 10, 10);
        assert!(!harness.menu.on_mouse_button_down(&right));
        assert_eq!(harness.menu.screen_mode(), ScreenMode::Trademark);

        for mode in [
            ScreenMode::MainMenu,
            ScreenMode::Multiplayer,
            ScreenMode::TcpIp,
            ScreenMode::ServerIp,
        ] {
            harness.menu.set_screen_mode(mode);
            let left = MouseEvent::new(MouseButton::Left, 10, 10);
            assert!(!harness.menu.on_mouse_button_down(&left));
            assert_eq!(harness.menu.screen_mode(), mode);
        }
    }

    #[test]
    fn test_mode_actions_land_on_target_regardless_of_source() {
        let actions = [
            (MenuAction::Multiplayer, ScreenMode::Multiplayer),
            (MenuAction::TcpIpGame, ScreenMode::TcpIp),
            (MenuAction::NetworkCancel, ScreenMode::MainMenu),
            (MenuAction::TcpIpCancel, ScreenMode::Multiplayer),
            (MenuAction::JoinGame, ScreenMode::ServerIp),
            (MenuAction::ServerIpCancel, ScreenMode::TcpIp),
        ];
        let mut harness = Harness::loaded(false);

        for source in LOADED_MODES {
            for (action, target) in actions {
                harness.menu.set_screen_mode(source);
                harness.menu.dispatch(action);
                assert_eq!(harness.menu.screen_mode(), target);
            }
        }
        assert!(harness.navigation.is_empty());
    }

    #[test]
    fn test_single_player_without_saves_goes_to_hero_select() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        assert_eq!(
            harness.click(ButtonId::SinglePlayer),
            Some(MenuAction::SinglePlayer)
        );
        assert_eq!(
            harness.navigation.drain(),
            vec![NavigationRequest::SelectHero {
                connection: ConnectionType::Local,
                address: String::new(),
            }]
        );
    }

    #[test]
    fn test_single_player_with_saves_goes_to_character_select() {
        let mut harness = Harness::loaded(true);
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        harness.click(ButtonId::SinglePlayer);
        assert_eq!(
            harness.navigation.drain(),
            vec![NavigationRequest::CharacterSelect {
                connection: ConnectionType::Local,
                address: String::new(),
            }]
        );
    }

    #[test]
    fn test_join_game_flow() {
        let mut harness = Harness::loaded(false);
        harness.click_at(400, 300);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::MainMenu);

        harness.click(ButtonId::Multiplayer);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::Multiplayer);
        harness.click(ButtonId::NetworkTcpIp);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::TcpIp);
        harness.click(ButtonId::TcpIpJoinGame);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::ServerIp);

        assert!(harness.menu.is_widget_visible(Widget::JoinAddressEntry));
        assert!(harness.menu.is_join_address_focused());

        assert!(harness.menu.on_text_input("192.168.1.5"));
        assert_eq!(harness.menu.join_address(), "192.168.1.5");

        assert_eq!(harness.click(ButtonId::ServerIpOk), Some(MenuAction::ServerIpOk));
        assert_eq!(
            harness.navigation.drain(),
            vec![NavigationRequest::CharacterSelect {
                connection: ConnectionType::LanClient,
                address: "192.168.1.5".to_string(),
            }]
        );
    }

    #[test]
    fn test_join_address_filters_and_edits() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::ServerIp);

        harness.menu.on_text_input("host-1:6669");
        assert_eq!(harness.menu.join_address(), "host1:6669");
        assert!(harness.menu.on_backspace());
        assert_eq!(harness.menu.join_address(), "host1:666");
    }

    #[test]
    fn test_server_ip_cancel_returns_to_tcp_ip() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::ServerIp);

        harness.click(ButtonId::ServerIpCancel);
        assert_eq!(harness.menu.screen_mode(), ScreenMode::TcpIp);
        assert!(!harness.menu.is_widget_visible(Widget::JoinAddressEntry));
        assert!(!harness.menu.is_join_address_focused());
        assert!(harness.navigation.is_empty());
    }

    #[test]
    fn test_host_game_starts_lan_server() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::TcpIp);

        harness.click(ButtonId::TcpIpHostGame);
        assert_eq!(
            harness.navigation.drain(),
            vec![NavigationRequest::CharacterSelect {
                connection: ConnectionType::LanServer,
                address: String::new(),
            }]
        );
    }

    #[test]
    fn test_overlapping_buttons_only_hit_the_visible_one() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::Multiplayer);

        assert_eq!(harness.click(ButtonId::TcpIpHostGame), Some(MenuAction::TcpIpGame));
        assert_eq!(harness.menu.screen_mode(), ScreenMode::TcpIp);
        assert!(harness.navigation.is_empty());
    }

    #[test]
    fn test_main_menu_navigation_buttons() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        harness.click(ButtonId::MapEngineTest);
        harness.click(ButtonId::Credits);
        assert_eq!(harness.click(ButtonId::Cinematics), None);

        assert_eq!(
            harness.navigation.drain(),
            vec![
                NavigationRequest::MapEngineTest {
                    region: 0,
                    level_preset: 1,
                },
                NavigationRequest::Credits,
            ]
        );
    }

    #[test]
    fn test_exit_button_exits_cleanly() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        harness.click(ButtonId::Exit);
        assert_eq!(harness.host_log.borrow().exits, vec![0]);
    }

    #[test]
    fn test_project_website_opens_configured_url() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        harness.click(ButtonId::ProjectWebsite);
        let log = harness.host_log.borrow();
        assert_eq!(
            log.opened_urls,
            vec!["https://www.github.com/OpenDiablo2/OpenDiablo2".to_string()]
        );
        assert!(log.exits.is_empty());
    }

    #[test]
    fn test_project_website_failure_exits_with_error() {
        let host = RecordingHost {
            fail_open: true,
            ..RecordingHost::default()
        };
        let mut harness = Harness::with_host(false, host);
        assert!(harness.load().is_ok());
        harness.menu.set_screen_mode(ScreenMode::MainMenu);

        harness.menu.dispatch(MenuAction::ProjectWebsite);
        assert_eq!(harness.host_log.borrow().exits, vec![1]);
    }

    #[test]
    fn test_render_order_on_trademark() {
        let mut harness = Harness::loaded(false);
        let surface = harness.rendered();

        assert_eq!(
            surface.textures(),
            vec![
                "menu/trademark_screen.json",
                "menu/logo_black_left.json",
                "menu/logo_black_right.json",
                "menu/logo_fire_left.json",
                "menu/logo_fire_right.json",
            ]
        );
        assert_eq!(
            surface.texts(),
            vec![
                "Diablo 2 is © Copyright 2000-2016 Blizzard Entertainment",
                "All Rights Reserved.",
            ]
        );
    }

    #[test]
    fn test_server_ip_renders_popup_without_logos() {
        let mut harness = Harness::loaded(false);
        harness.menu.set_screen_mode(ScreenMode::ServerIp);
        let surface = harness.rendered();

        assert_eq!(surface.textures(), vec!["menu/popup_ok_cancel.json"]);
        let texts = surface.texts();
        assert!(texts.iter().any(|t| t == "TCP/IP Options"));
        assert!(texts.iter().any(|t| t == "Enter Host IP Address"));
        assert!(texts.iter().any(|t| t == "OK"));
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut harness = Harness::loaded(false);
        let mut surface = RecordingSurface::failing_on("menu/logo_black_right.json");

        let result = harness.menu.render(&mut surface);
        assert!(matches!(result, Err(MenuError::Render(_))));
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn test_fire_logos_animate_only_in_logo_modes() {
        let mut harness = Harness::loaded(false);

        assert!(harness.menu.advance(0.15).is_ok());
        assert_eq!(harness.menu.logo_frame(LogoId::FireLeft), Some(1));
        assert_eq!(harness.menu.logo_frame(LogoId::FireRight), Some(1));
        assert_eq!(harness.menu.logo_frame(LogoId::BlackLeft), Some(0));

        harness.menu.set_screen_mode(ScreenMode::TcpIp);
        assert!(harness.menu.advance(0.3).is_ok());
        assert_eq!(harness.menu.logo_frame(LogoId::FireLeft), Some(1));
    }

    #[test]
    fn test_advance_failure_stops_remaining_logos() {
        let mut harness = Harness::new(false);
        harness.assets.empty = Some("menu/logo_fire_left.json".to_string());
        assert!(harness.load().is_ok());

        let result = harness.menu.advance(0.15);
        assert!(matches!(result, Err(MenuError::Animation(_))));
        assert_eq!(harness.menu.logo_frame(LogoId::FireRight), Some(0));
    }
}
