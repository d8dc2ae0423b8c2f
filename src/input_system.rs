use crate::error::MenuError;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// A mouse button press or release in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    pub fn new(button: MouseButton, x: i32, y: i32) -> Self {
        MouseEvent { button, x, y }
    }
}

/// Input relevant to menu screens
///
/// SDL2 events are translated into these so screens never deal with the
/// raw event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    MouseDown(MouseEvent),
    MouseUp(MouseEvent),
    TextInput(String),
    Backspace,
    Quit,
}

/// Something that wants first look at mouse presses
pub trait InputHandler {
    /// Returns true if the event was consumed
    fn on_mouse_button_down(&mut self, event: &MouseEvent) -> bool;
}

/// Registry screens bind themselves to during load
pub trait InputManager {
    fn bind_handler(&mut self, name: &'static str) -> Result<(), MenuError>;
}

/// InputSystem turns SDL2 events into MenuEvents and tracks bound handlers
///
/// Handlers are bound by name; the host routes mouse presses to a screen's
/// [`InputHandler`] only while that screen is bound.
pub struct InputSystem {
    bound_handlers: Vec<&'static str>,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            bound_handlers: Vec::new(),
        }
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound_handlers.iter().any(|bound| *bound == name)
    }

    pub fn unbind_handler(&mut self, name: &str) {
        self.bound_handlers.retain(|bound| *bound != name);
    }

    /// Polls all pending SDL2 events
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<MenuEvent> {
        event_pump.poll_iter().filter_map(translate_event).collect()
    }
}

impl InputManager for InputSystem {
    fn bind_handler(&mut self, name: &'static str) -> Result<(), MenuError> {
        if self.is_bound(name) {
            return Err(MenuError::HandlerAlreadyBound(name));
        }
        self.bound_handlers.push(name);
        Ok(())
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn translate_event(event: Event) -> Option<MenuEvent> {
    match event {
        Event::Quit { .. } => Some(MenuEvent::Quit),
        Event::MouseButtonDown { mouse_btn, x, y, .. } => {
            Some(MenuEvent::MouseDown(MouseEvent::new(mouse_btn, x, y)))
        }
        Event::MouseButtonUp { mouse_btn, x, y, .. } => {
            Some(MenuEvent::MouseUp(MouseEvent::new(mouse_btn, x, y)))
        }
        Event::TextInput { text, .. } => Some(MenuEvent::TextInput(text)),
        Event::KeyDown {
            keycode: Some(Keycode::Backspace),
            ..
        } => Some(MenuEvent::Backspace),
        _ => None,
    }
}
