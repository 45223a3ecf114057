// Keyboard handler: feeds winit key events into the held-direction tracker

use super::bindings::{Control, KeyBindings};
use super::direction::{Direction, InputSnapshot};
use super::held::HeldDirections;
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the bindings and the held state for the single local player
#[derive(Debug)]
pub struct KeyboardInput {
    bindings: KeyBindings,
    held: HeldDirections,
    /// Movement keys currently down, per direction (W and ArrowUp both hold up)
    move_keys: HashMap<Direction, HashSet<KeyCode>>,
    /// Sprint keys currently down (either shift counts)
    sprint_keys: HashSet<KeyCode>,
    quit_requested: bool,
}

impl KeyboardInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HeldDirections::new(),
            move_keys: HashMap::new(),
            sprint_keys: HashSet::new(),
            quit_requested: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(control) = self.bindings.control(key) else {
            return;
        };

        if repeat && state == ElementState::Pressed {
            return;
        }

        match (control, state) {
            (Control::Move(direction), ElementState::Pressed) => {
                self.move_keys.entry(direction).or_default().insert(key);
                self.held.press(direction);
            }
            (Control::Move(direction), ElementState::Released) => {
                let still_held = self.move_keys.get_mut(&direction).is_some_and(|keys| {
                    keys.remove(&key);
                    !keys.is_empty()
                });
                if !still_held {
                    self.held.release(direction);
                }
            }
            (Control::Sprint, ElementState::Pressed) => {
                self.sprint_keys.insert(key);
                self.held.set_sprint(true);
            }
            (Control::Sprint, ElementState::Released) => {
                self.sprint_keys.remove(&key);
                self.held.set_sprint(!self.sprint_keys.is_empty());
            }
            (Control::Quit, ElementState::Pressed) => {
                log::info!("Quit requested from keyboard");
                self.quit_requested = true;
            }
            (Control::Quit, ElementState::Released) => {}
        }
    }

    /// Movement input for this tick
    pub fn snapshot(&self) -> InputSnapshot {
        self.held.snapshot()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Forget all held keys (focus lost)
    pub fn reset(&mut self) {
        self.held.reset();
        self.move_keys.clear();
        self.sprint_keys.clear();
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new(KeyBindings::standard())
    }
}
