//! Events delivered by the firmware event bus

use crate::types::{Keycode, ModFlags};

/// A key usage was pressed or released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeycodeStateChanged {
    pub usage_page: u16,
    pub keycode: u32,
    /// Modifiers applied by behaviors; listeners may add bits while the event is in flight
    pub implicit_modifiers: ModFlags,
    pub explicit_modifiers: ModFlags,
    /// `true` on press
    pub state: bool,
    pub timestamp: i64,
}

impl KeycodeStateChanged {
    /// Creates an event from a keycode; wrapped modifiers become implicit modifiers
    pub fn new(keycode: Keycode, pressed: bool, timestamp: i64) -> Self {
        Self {
            usage_page: keycode.page,
            keycode: keycode.id,
            implicit_modifiers: keycode.mods,
            explicit_modifiers: ModFlags::empty(),
            state: pressed,
            timestamp,
        }
    }

    pub fn pressed(keycode: Keycode) -> Self {
        Self::new(keycode, true, 0)
    }

    pub fn released(keycode: Keycode) -> Self {
        Self::new(keycode, false, 0)
    }
}

/// Events this module can be subscribed to. Only keycode changes are acted upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeycodeStateChanged(KeycodeStateChanged),
    PositionStateChanged { position: u32, pressed: bool, timestamp: i64 },
}

impl Event {
    pub fn as_keycode_state_changed_mut(&mut self) -> Option<&mut KeycodeStateChanged> {
        match self {
            Event::KeycodeStateChanged(ev) => Some(ev),
            _ => None,
        }
    }
}

impl From<KeycodeStateChanged> for Event {
    fn from(ev: KeycodeStateChanged) -> Self {
        Event::KeycodeStateChanged(ev)
    }
}

/// What a listener tells the event bus after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue delivering to later listeners
    Bubble,
    /// Stop delivery; the listener consumed the event
    Handled,
}

/// What a behavior tells the binding dispatcher after a press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorResult {
    /// The binding was handled; nothing falls through to lower layers
    Opaque,
    /// Fall through to the binding on the next active layer
    Transparent,
}
