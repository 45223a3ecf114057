// Tile descriptors produced by the layout decoder

use super::boundary::{compute_boundaries, Boundaries};
use crate::core::math::Rect;
use crate::engine::render::{render_geometry, RenderGeometry, Renderable};
use glam::Vec2;

/// Side of a tile a boundary hugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Order in which inset digits appear in an encoded cell
    pub const ENCODING_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Boundary widths per side, in grid units before resize (0-9 each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl Insets {
    pub const NONE: Insets = Insets {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn is_any(&self) -> bool {
        Side::ENCODING_ORDER.iter().any(|side| self.get(*side) != 0)
    }
}

/// One decoded grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    col: usize,
    row: usize,
    position: Vec2,
    /// Sheet cell size in pixels, before resize
    size: Vec2,
    resize: u32,
    frame: u32,
    columns: u32,
    centered: bool,
    insets: Insets,
    boundaries: Boundaries,
}

impl Tile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        col: usize,
        row: usize,
        position: Vec2,
        size: Vec2,
        resize: u32,
        frame: u32,
        columns: u32,
        centered: bool,
        insets: Insets,
    ) -> Self {
        let mut tile = Self {
            col,
            row,
            position,
            size,
            resize,
            frame,
            columns,
            centered,
            insets,
            boundaries: Boundaries::default(),
        };
        tile.refresh_boundaries();
        tile
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Anchor position (tile center when centered, top-left otherwise)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// On-screen size (sheet cell size times resize)
    pub fn scaled_size(&self) -> Vec2 {
        self.size * self.resize as f32
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_boundary(&self) -> bool {
        self.insets.is_any()
    }

    /// Footprint in world space, origin shift applied
    pub fn rect(&self) -> Rect {
        let size = self.scaled_size();
        let min = if self.centered {
            self.position - size / 2.0
        } else {
            self.position
        };
        Rect::from_min_size(min, size)
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    /// Move the tile; boundaries follow
    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        self.refresh_boundaries();
    }

    fn refresh_boundaries(&mut self) {
        self.boundaries = compute_boundaries(self.rect(), self.insets, self.resize);
    }
}

impl Renderable for Tile {
    fn render_geometry(&self) -> RenderGeometry {
        render_geometry(
            self.position,
            self.size,
            self.resize,
            self.frame,
            self.columns,
            self.centered,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(insets: Insets, centered: bool) -> Tile {
        Tile::new(
            0,
            0,
            Vec2::new(64.0, 64.0),
            Vec2::splat(32.0),
            2,
            5,
            9,
            centered,
            insets,
        )
    }

    #[test]
    fn test_plain_tile_has_no_boundaries() {
        let tile = tile(Insets::NONE, false);
        assert!(!tile.is_boundary());
        assert!(tile.boundaries().is_empty());
    }

    #[test]
    fn test_rect_respects_centering() {
        assert_eq!(
            tile(Insets::NONE, false).rect(),
            Rect::new(64.0, 64.0, 64.0, 64.0)
        );
        assert_eq!(
            tile(Insets::NONE, true).rect(),
            Rect::new(32.0, 32.0, 64.0, 64.0)
        );
    }

    #[test]
    fn test_centered_boundaries_use_shifted_footprint() {
        // Footprint 32..96 on both axes; depths 2, 4, 6 and 8 at resize 2
        let tile = tile(Insets::new(1, 2, 3, 4), true);
        let boundaries = tile.boundaries();

        assert_eq!(boundaries.get(Side::Top), Some(Rect::new(32.0, 32.0, 64.0, 2.0)));
        assert_eq!(boundaries.get(Side::Right), Some(Rect::new(92.0, 32.0, 4.0, 64.0)));
        assert_eq!(boundaries.get(Side::Bottom), Some(Rect::new(32.0, 90.0, 64.0, 6.0)));
        assert_eq!(boundaries.get(Side::Left), Some(Rect::new(32.0, 32.0, 8.0, 64.0)));
    }

    #[test]
    fn test_translate_moves_boundaries() {
        let mut tile = tile(Insets::new(1, 0, 0, 0), false);
        let before = tile.boundaries().get(Side::Top);
        tile.translate(Vec2::new(10.0, 5.0));
        let after = tile.boundaries().get(Side::Top);

        assert_eq!(before.map(|r| r.translated(Vec2::new(10.0, 5.0))), after);
    }

    #[test]
    fn test_render_geometry_uses_frame() {
        let geometry = tile(Insets::NONE, false).render_geometry();
        assert_eq!(geometry.source, Rect::new(160.0, 0.0, 32.0, 32.0));
        assert_eq!(geometry.dest, Rect::new(64.0, 64.0, 64.0, 64.0));
    }
}
