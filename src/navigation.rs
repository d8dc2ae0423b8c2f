//! Requests to leave the title menu for another screen
//!
//! The destination screens live outside this crate. The menu only tells a
//! [`Navigator`] where to go; [`NavigationQueue`] collects those requests so
//! the host can act on them after the current frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// How the following game session is networked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    Local,
    LanServer,
    LanClient,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionType::Local => write!(f, "local"),
            ConnectionType::LanServer => write!(f, "LAN server"),
            ConnectionType::LanClient => write!(f, "LAN client"),
        }
    }
}

pub trait Navigator {
    fn to_character_select(&mut self, connection: ConnectionType, address: &str);
    fn to_select_hero(&mut self, connection: ConnectionType, address: &str);
    fn to_credits(&mut self);
    fn to_map_engine_test(&mut self, region: i32, level_preset: i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    CharacterSelect {
        connection: ConnectionType,
        address: String,
    },
    SelectHero {
        connection: ConnectionType,
        address: String,
    },
    Credits,
    MapEngineTest {
        region: i32,
        level_preset: i32,
    },
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationRequest::CharacterSelect { connection, address } => {
                write!(f, "character select ({}, address '{}')", connection, address)
            }
            NavigationRequest::SelectHero { connection, address } => {
                write!(f, "hero select ({}, address '{}')", connection, address)
            }
            NavigationRequest::Credits => write!(f, "credits"),
            NavigationRequest::MapEngineTest { region, level_preset } => {
                write!(f, "map engine test (region {}, preset {})", region, level_preset)
            }
        }
    }
}

/// Navigator that queues requests; clones share the same queue
#[derive(Debug, Clone, Default)]
pub struct NavigationQueue {
    requests: Rc<RefCell<VecDeque<NavigationRequest>>>,
}

impl NavigationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, request: NavigationRequest) {
        log::info!("Navigation requested: {}", request);
        self.requests.borrow_mut().push_back(request);
    }

    pub fn pop(&self) -> Option<NavigationRequest> {
        self.requests.borrow_mut().pop_front()
    }

    pub fn drain(&self) -> Vec<NavigationRequest> {
        self.requests.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.borrow().is_empty()
    }
}

impl Navigator for NavigationQueue {
    fn to_character_select(&mut self, connection: ConnectionType, address: &str) {
        self.push(NavigationRequest::CharacterSelect {
            connection,
            address: address.to_string(),
        });
    }

    fn to_select_hero(&mut self, connection: ConnectionType, address: &str) {
        self.push(NavigationRequest::SelectHero {
            connection,
            address: address.to_string(),
        });
    }

    fn to_credits(&mut self) {
        self.push(NavigationRequest::Credits);
    }

    fn to_map_engine_test(&mut self, region: i32, level_preset: i32) {
        self.push(NavigationRequest::MapEngineTest { region, level_preset });
    }
}
