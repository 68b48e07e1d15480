//! Keyboard state
//!
//! The host records key-down/key-up events into a [`KeyState`]; at the start
//! of each frame the state is frozen into a [`TickInput`] so the simulation
//! never reads ambient input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::TickInput;

/// Current pressed/released state per key identifier (e.g. `"ArrowLeft"`)
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    keys: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event (`true` on key-down, `false` on key-up)
    pub fn set(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_string(), pressed);
    }

    pub fn press(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: &str) {
        self.set(key, false);
    }

    /// Unknown keys count as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    fn any_pressed(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }

    /// Freeze the current state into one frame of input
    pub fn snapshot(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            left: self.any_pressed(&bindings.left),
            right: self.any_pressed(&bindings.right),
            up: self.any_pressed(&bindings.up),
            down: self.any_pressed(&bindings.down),
        }
    }
}

/// Key identifiers bound to each direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".to_string()],
            right: vec!["ArrowRight".to_string()],
            up: vec!["ArrowUp".to_string()],
            down: vec!["ArrowDown".to_string()],
        }
    }
}

impl KeyBindings {
    /// Every direction needs at least one key
    pub fn validate(&self) -> Result<(), ConfigError> {
        let groups = [
            ("left", &self.left),
            ("right", &self.right),
            ("up", &self.up),
            ("down", &self.down),
        ];
        for (name, keys) in groups {
            if keys.is_empty() {
                return Err(ConfigError::MissingBinding(name));
            }
        }
        Ok(())
    }

    /// Whether the key drives movement (host uses this to suppress page scrolling)
    pub fn is_bound(&self, key: &str) -> bool {
        [&self.left, &self.right, &self.up, &self.down]
            .iter()
            .any(|keys| keys.iter().any(|k| k == key))
    }
}
