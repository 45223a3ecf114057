// Movement directions and the per-tick input snapshot

use glam::Vec2;
use std::fmt;

/// One of the four cardinal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase name used in animation ids (`walk_up`, `idle_left`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Unit displacement in screen space (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable view of the movement input for one tick
///
/// Directions are kept in the order they became active; the first one has
/// priority for facing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    directions: Vec<Direction>,
    sprint: bool,
}

impl InputSnapshot {
    /// Build a snapshot, dropping repeated directions but keeping first-seen order
    pub fn new(directions: impl IntoIterator<Item = Direction>, sprint: bool) -> Self {
        let mut ordered: Vec<Direction> = Vec::with_capacity(4);
        for direction in directions {
            if !ordered.contains(&direction) {
                ordered.push(direction);
            }
        }

        Self {
            directions: ordered,
            sprint,
        }
    }

    /// Snapshot with nothing held
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Highest-priority (oldest) held direction
    pub fn primary(&self) -> Option<Direction> {
        self.directions.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn sprint(&self) -> bool {
        self.sprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_names() {
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
        assert_eq!(Direction::Left.to_string(), "left");
    }

    #[test]
    fn test_opposites() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.unit() + direction.opposite().unit(), Vec2::ZERO);
        }
    }

    #[test]
    fn test_snapshot_keeps_order_and_dedups() {
        let snapshot = InputSnapshot::new(
            [Direction::Right, Direction::Up, Direction::Right],
            false,
        );
        assert_eq!(snapshot.directions(), &[Direction::Right, Direction::Up]);
        assert_eq!(snapshot.primary(), Some(Direction::Right));
    }

    #[test]
    fn test_idle_snapshot() {
        let snapshot = InputSnapshot::idle();
        assert!(snapshot.is_empty());
        assert!(!snapshot.sprint());
        assert_eq!(snapshot.primary(), None);
    }
}
