// Held-key tracking that turns raw key state into ordered directions

use super::direction::{Direction, InputSnapshot};
use std::collections::HashSet;

/// Tracks which movement keys are physically held and which directions are
/// currently active, in activation order.
///
/// A direction is active while its key is held, its opposite is not held, and
/// the two keys of the other axis are not both held. Conflicting presses cancel
/// out instead of jittering between directions.
#[derive(Debug, Default)]
pub struct HeldDirections {
    /// Keys that are physically down right now
    pressed: HashSet<Direction>,

    /// Active directions, oldest first
    active: Vec<Direction>,

    sprint: bool,
}

impl HeldDirections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a direction key going down
    pub fn press(&mut self, direction: Direction) {
        if self.pressed.insert(direction) {
            self.refresh();
        }
    }

    /// Register a direction key going up
    pub fn release(&mut self, direction: Direction) {
        if self.pressed.remove(&direction) {
            self.refresh();
        }
    }

    pub fn set_sprint(&mut self, held: bool) {
        self.sprint = held;
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed.contains(&direction)
    }

    /// Drop all held state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.active.clear();
        self.sprint = false;
    }

    /// Copy the current state out for this tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::new(self.active.iter().copied(), self.sprint)
    }

    fn qualifies(&self, direction: Direction) -> bool {
        let perpendicular = if direction.is_vertical() {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        };

        self.is_pressed(direction)
            && !self.is_pressed(direction.opposite())
            && !perpendicular.iter().all(|d| self.is_pressed(*d))
    }

    fn refresh(&mut self) {
        // Evaluate in the fixed up/left/down/right order so simultaneous
        // activations get a deterministic priority.
        for direction in [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ] {
            let qualifies = self.qualifies(direction);
            let present = self.active.contains(&direction);

            if qualifies && !present {
                self.active.push(direction);
            } else if !qualifies && present {
                self.active.retain(|d| *d != direction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_activates_direction() {
        let mut held = HeldDirections::new();
        held.press(Direction::Up);
        assert_eq!(held.snapshot().directions(), &[Direction::Up]);
    }

    #[test]
    fn test_activation_order_is_preserved() {
        let mut held = HeldDirections::new();
        held.press(Direction::Right);
        held.press(Direction::Up);
        assert_eq!(
            held.snapshot().directions(),
            &[Direction::Right, Direction::Up]
        );

        // Releasing and re-pressing moves a direction to the back
        held.release(Direction::Right);
        held.press(Direction::Right);
        assert_eq!(
            held.snapshot().directions(),
            &[Direction::Up, Direction::Right]
        );
    }

    #[test]
    fn test_opposites_cancel() {
        let mut held = HeldDirections::new();
        held.press(Direction::Left);
        held.press(Direction::Right);
        assert!(held.snapshot().is_empty());

        held.release(Direction::Right);
        assert_eq!(held.snapshot().directions(), &[Direction::Left]);
    }

    #[test]
    fn test_perpendicular_pair_blocks_axis() {
        let mut held = HeldDirections::new();
        held.press(Direction::Up);
        held.press(Direction::Left);
        held.press(Direction::Right);

        // Left+right cancel each other and also suppress up
        assert!(held.snapshot().is_empty());
    }

    #[test]
    fn test_sprint_flag_and_reset() {
        let mut held = HeldDirections::new();
        held.press(Direction::Down);
        held.set_sprint(true);
        assert!(held.snapshot().sprint());

        held.reset();
        assert!(held.snapshot().is_empty());
        assert!(!held.snapshot().sprint());
        assert!(!held.is_pressed(Direction::Down));
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut held = HeldDirections::new();
        held.press(Direction::Down);
        held.press(Direction::Down);
        assert_eq!(held.snapshot().directions(), &[Direction::Down]);
    }
}
