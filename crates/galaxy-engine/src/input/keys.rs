use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::types::ShipInput;
use crate::input::queue::InputEvent;

pub const KEY_ARROW_LEFT: u32 = 37;
pub const KEY_ARROW_UP: u32 = 38;
pub const KEY_ARROW_RIGHT: u32 = 39;

/// Which key codes steer the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub rotate_left: u32,
    pub rotate_right: u32,
    pub thrust: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_left: KEY_ARROW_LEFT,
            rotate_right: KEY_ARROW_RIGHT,
            thrust: KEY_ARROW_UP,
        }
    }
}

/// Keys currently held down, fed from key events.
///
/// Held keys persist across frames until their `KeyUp` arrives, so a
/// snapshot taken on any tick reflects what the player is pressing then.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<u32>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the held set from a key event. Other events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                self.held.insert(key_code);
            }
            InputEvent::KeyUp { key_code } => {
                self.held.remove(&key_code);
            }
            InputEvent::Custom { .. } => {}
        }
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Release every key, e.g. when the page loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Ship intents for the keys held right now.
    pub fn snapshot(&self, bindings: &KeyBindings) -> ShipInput {
        ShipInput {
            rotate_left: self.is_held(bindings.rotate_left),
            rotate_right: self.is_held(bindings.rotate_right),
            thrust: self.is_held(bindings.thrust),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_intents() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code: KEY_ARROW_UP });
        keys.apply(&InputEvent::KeyDown { key_code: KEY_ARROW_LEFT });

        let input = keys.snapshot(&bindings);
        assert!(input.thrust);
        assert!(input.rotate_left);
        assert!(!input.rotate_right);
    }

    #[test]
    fn key_up_releases() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code: KEY_ARROW_RIGHT });
        keys.apply(&InputEvent::KeyUp { key_code: KEY_ARROW_RIGHT });
        assert_eq!(keys.snapshot(&bindings), ShipInput::NONE);
    }

    #[test]
    fn unbound_keys_and_custom_events_ignored() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code: 32 });
        keys.apply(&InputEvent::Custom { kind: 1, a: 2.0, b: 0.0, c: 0.0 });
        assert!(keys.is_held(32));
        assert_eq!(keys.snapshot(&bindings), ShipInput::NONE);
    }

    #[test]
    fn custom_bindings() {
        // WASD-style thrust on 'W'
        let bindings = KeyBindings { thrust: 87, ..KeyBindings::default() };
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code: 87 });
        assert!(keys.snapshot(&bindings).thrust);
        keys.clear();
        assert!(!keys.snapshot(&bindings).thrust);
    }
}
