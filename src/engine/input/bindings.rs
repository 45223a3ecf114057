// Key bindings: physical keys to movement controls

use super::direction::Direction;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Move(Direction),
    Sprint,
    Quit,
}

/// Mapping from physical keys to controls, with a reverse index for queries
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
    control_to_keys: HashMap<Control, Vec<KeyCode>>,
}

impl KeyBindings {
    /// Empty binding table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (KeyCode, Control)>) -> Self {
        let mut bindings = Self::new();
        for (key, control) in pairs {
            bindings.bind(key, control);
        }
        bindings
    }

    /// WASD and arrows to move, shift to sprint, escape to quit
    pub fn standard() -> Self {
        Self::from_pairs([
            (KeyCode::KeyW, Control::Move(Direction::Up)),
            (KeyCode::KeyS, Control::Move(Direction::Down)),
            (KeyCode::KeyA, Control::Move(Direction::Left)),
            (KeyCode::KeyD, Control::Move(Direction::Right)),
            (KeyCode::ArrowUp, Control::Move(Direction::Up)),
            (KeyCode::ArrowDown, Control::Move(Direction::Down)),
            (KeyCode::ArrowLeft, Control::Move(Direction::Left)),
            (KeyCode::ArrowRight, Control::Move(Direction::Right)),
            (KeyCode::ShiftLeft, Control::Sprint),
            (KeyCode::ShiftRight, Control::Sprint),
            (KeyCode::Escape, Control::Quit),
        ])
    }

    /// Bind `key` to `control`, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, control: Control) {
        self.unbind_key(key);
        self.bindings.insert(key, control);
        self.control_to_keys.entry(control).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(control) = self.bindings.remove(&key) {
            if let Some(keys) = self.control_to_keys.get_mut(&control) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.control_to_keys.remove(&control);
                }
            }
        }
    }

    pub fn control(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }

    pub fn keys_for(&self, control: Control) -> &[KeyCode] {
        self.control_to_keys
            .get(&control)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
