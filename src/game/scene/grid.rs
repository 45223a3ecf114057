// The tile grid: owns decoded tiles and answers boundary queries

use super::decoder::{layout_extent, parse_layout, LayoutDecoder};
use super::presets::SceneConfig;
use super::tile::{Side, Tile};
use super::SceneError;
use crate::core::math::Rect;
use crate::engine::assets::SpriteSheetHandle;
use crate::engine::render::{RenderGeometry, Renderable};
use glam::Vec2;
use log::{debug, info};

/// Row-major collection of tiles built once per scene
#[derive(Debug, Clone)]
pub struct TileGrid {
    sheet: SpriteSheetHandle,
    config: SceneConfig,
    tiles: Vec<Tile>,
    /// Cells in the longest row of the source layout
    column_count: usize,
    /// Rows in the source layout, empty ones included
    row_count: usize,
}

impl TileGrid {
    /// Decode `layout` into a grid. Fails as a whole if any cell is malformed.
    pub fn new(
        sheet: SpriteSheetHandle,
        config: SceneConfig,
        layout: &[Vec<f64>],
    ) -> Result<Self, SceneError> {
        let tiles = LayoutDecoder::new(config)?.decode(layout)?;
        let (column_count, row_count) = layout_extent(layout);
        let grid = Self {
            sheet,
            config,
            tiles,
            column_count,
            row_count,
        };

        info!(
            "Scene built: {} tiles, {} with boundaries, {}x{} px",
            grid.tiles.len(),
            grid.boundary_tiles().count(),
            grid.width(),
            grid.height()
        );
        Ok(grid)
    }

    /// Build from the textual layout format
    pub fn from_text(
        sheet: SpriteSheetHandle,
        config: SceneConfig,
        text: &str,
    ) -> Result<Self, SceneError> {
        let layout = parse_layout(text)?;
        Self::new(sheet, config, &layout)
    }

    pub fn sheet(&self) -> SpriteSheetHandle {
        self.sheet
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at grid coordinates, if that cell exists in its (possibly short) row
    pub fn tile_at(&self, col: usize, row: usize) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|tile| tile.col() == col && tile.row() == row)
    }

    /// Tiles that carry at least one boundary
    pub fn boundary_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|tile| tile.is_boundary())
    }

    /// Every boundary rectangle in the scene
    pub fn boundaries(&self) -> impl Iterator<Item = (Side, Rect)> + '_ {
        self.boundary_tiles()
            .flat_map(|tile| tile.boundaries().iter())
    }

    /// Pixel width of the widest row
    pub fn width(&self) -> f32 {
        self.column_count as f32 * self.config.scaled_tile_size().x
    }

    /// Pixel height of all rows
    pub fn height(&self) -> f32 {
        self.row_count as f32 * self.config.scaled_tile_size().y
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Anchor position of the first tile
    pub fn position(&self) -> Vec2 {
        self.tiles
            .first()
            .map(Tile::position)
            .unwrap_or(Vec2::ZERO)
    }

    /// Anchor of cell (0, 0), even when the first row is empty
    fn origin(&self) -> Vec2 {
        let cell = self.config.scaled_tile_size();
        self.tiles.first().map_or(Vec2::ZERO, |tile| {
            tile.position() - Vec2::new(tile.col() as f32, tile.row() as f32) * cell
        })
    }

    /// Midpoint of the grid in world space
    pub fn center(&self) -> Vec2 {
        let anchor_shift = if self.config.centered {
            self.config.scaled_tile_size() / 2.0
        } else {
            Vec2::ZERO
        };
        self.origin() + self.size() / 2.0 - anchor_shift
    }

    /// Translate the whole scene. Placement-time only: once an actor is bound
    /// the grid is shared immutably and can no longer move.
    pub fn offset(&mut self, delta: Vec2) {
        for tile in &mut self.tiles {
            tile.translate(delta);
        }
        debug!("Scene offset by {delta}, now anchored at {}", self.position());
    }

    /// Geometry for every tile, in draw order
    pub fn render_geometries(&self) -> Vec<RenderGeometry> {
        self.tiles.iter().map(Renderable::render_geometry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scene::presets::{INDOOR_SCENE, LIVING_ROOM};
    use approx::assert_relative_eq;

    fn config(centered: bool, resize: u32) -> SceneConfig {
        SceneConfig {
            tile_size: Vec2::splat(32.0),
            columns: 9,
            resize,
            centered,
        }
    }

    fn sheet() -> SpriteSheetHandle {
        SpriteSheetHandle::named("tileset-indoors")
    }

    #[test]
    fn test_width_uses_longest_row() {
        let layout = vec![vec![0.0, 0.0], vec![0.0, 0.0, 0.0, 0.0], vec![0.0]];
        let grid = TileGrid::new(sheet(), config(false, 1), &layout).unwrap();

        assert_eq!(grid.width(), 128.0);
        assert_eq!(grid.height(), 96.0);
        assert_eq!(grid.tiles().len(), 7);
    }

    #[test]
    fn test_empty_rows_count_toward_height() {
        let trailing = TileGrid::new(sheet(), config(true, 1), &[vec![0.0, 0.0], vec![]]).unwrap();
        assert_eq!(trailing.size(), Vec2::new(64.0, 64.0));
        assert_eq!(trailing.center(), Vec2::ZERO);

        let leading = TileGrid::new(sheet(), config(true, 1), &[vec![], vec![0.0, 0.0]]).unwrap();
        assert_eq!(leading.size(), Vec2::new(64.0, 64.0));
        assert_eq!(leading.position(), Vec2::new(-16.0, 16.0));
        assert_eq!(leading.center(), Vec2::ZERO);
    }

    #[test]
    fn test_non_boundary_tiles_have_no_rects() {
        let grid = TileGrid::from_text(sheet(), INDOOR_SCENE, LIVING_ROOM).unwrap();
        for tile in grid.tiles() {
            if !tile.is_boundary() {
                assert!(tile.boundaries().is_empty());
            }
        }
        assert_eq!(grid.boundary_tiles().count(), 12);
    }

    #[test]
    fn test_center_uncentered() {
        let grid = TileGrid::from_text(sheet(), config(false, 1), LIVING_ROOM).unwrap();
        assert_eq!(grid.position(), Vec2::ZERO);
        assert_eq!(grid.center(), Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_center_centered_is_origin() {
        let grid = TileGrid::from_text(sheet(), INDOOR_SCENE, LIVING_ROOM).unwrap();
        let center = grid.center();
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
    }

    #[test]
    fn test_offset_moves_center_and_boundaries() {
        let mut grid = TileGrid::from_text(sheet(), INDOOR_SCENE, LIVING_ROOM).unwrap();
        let before: Vec<Rect> = grid.boundaries().map(|(_, rect)| rect).collect();

        grid.offset(Vec2::new(640.0, 360.0));

        assert_eq!(grid.center(), Vec2::new(640.0, 360.0));
        let after: Vec<Rect> = grid.boundaries().map(|(_, rect)| rect).collect();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.translated(Vec2::new(640.0, 360.0)), *new);
        }
    }

    #[test]
    fn test_offsets_compose() {
        let mut twice = TileGrid::from_text(sheet(), config(false, 2), LIVING_ROOM).unwrap();
        let mut once = twice.clone();

        twice.offset(Vec2::new(10.0, -4.0));
        twice.offset(Vec2::new(6.0, 20.0));
        once.offset(Vec2::new(16.0, 16.0));

        assert_eq!(twice.tiles(), once.tiles());
    }

    #[test]
    fn test_malformed_layout_produces_no_grid() {
        let result = TileGrid::from_text(sheet(), config(false, 1), "1 2\n3 oops");
        assert!(matches!(result, Err(SceneError::Cell { row: 1, col: 1, .. })));
    }

    #[test]
    fn test_tile_at_handles_ragged_rows() {
        let layout = vec![vec![1.0, 2.0, 3.0], vec![4.0]];
        let grid = TileGrid::new(sheet(), config(false, 1), &layout).unwrap();

        assert_eq!(grid.tile_at(2, 0).map(Tile::frame), Some(3));
        assert_eq!(grid.tile_at(0, 1).map(Tile::frame), Some(4));
        assert!(grid.tile_at(1, 1).is_none());
    }

    #[test]
    fn test_render_geometries_follow_tiles() {
        let grid = TileGrid::from_text(sheet(), config(false, 1), LIVING_ROOM).unwrap();
        let geometries = grid.render_geometries();

        assert_eq!(geometries.len(), 16);
        // Frame 6 in a 9-column sheet
        assert_eq!(geometries[0].source, Rect::new(192.0, 0.0, 32.0, 32.0));
        assert_eq!(geometries[5].dest, Rect::new(32.0, 32.0, 32.0, 32.0));
    }
}
