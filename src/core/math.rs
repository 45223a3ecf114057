// Geometry primitives shared by tiles, boundaries and actors

use glam::Vec2;

/// Axis-aligned rectangle in world pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Return a copy moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::from_min_size(self.min() + delta, self.size())
    }
}

/// True when the open spans `(a_min, a_max)` and `(b_min, b_max)` overlap by
/// more than `margin`
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32, margin: f32) -> bool {
    a_min < b_max - margin && a_max > b_min + margin
}
