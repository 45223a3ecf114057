// Geometry handed to the draw collaborator once per frame

use crate::core::math::Rect;
use glam::Vec2;

/// Everything the external draw call needs for one renderable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderGeometry {
    /// Cell of the sprite sheet to sample (sheet pixels)
    pub source: Rect,
    /// Where the cell lands in the world (world pixels, before origin shift)
    pub dest: Rect,
    /// Anchor inside the source cell that `dest`'s position refers to
    pub origin: Vec2,
}

/// Anything that can be drawn from a sprite sheet
pub trait Renderable {
    fn render_geometry(&self) -> RenderGeometry;
}

/// Locate `frame` in a row-major sheet of `columns` cells of `cell_size` pixels
pub fn sheet_source(frame: u32, columns: u32, cell_size: Vec2) -> Rect {
    let columns = columns.max(1);
    let col = frame % columns;
    let row = frame / columns;

    Rect::from_min_size(
        Vec2::new(col as f32 * cell_size.x, row as f32 * cell_size.y),
        cell_size,
    )
}

/// Shared geometry computation for tiles and actors
pub fn render_geometry(
    position: Vec2,
    cell_size: Vec2,
    resize: u32,
    frame: u32,
    columns: u32,
    centered: bool,
) -> RenderGeometry {
    RenderGeometry {
        source: sheet_source(frame, columns, cell_size),
        dest: Rect::from_min_size(position, cell_size * resize as f32),
        origin: if centered { cell_size / 2.0 } else { Vec2::ZERO },
    }
}
