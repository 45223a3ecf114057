// Tile scene: layout decoding, tiles, boundaries and the owning grid
//
// - `decoder`: encoded cell values to positioned tiles
// - `tile`: tile descriptors and insets
// - `boundary`: directional boundary rectangles per tile
// - `grid`: the tile grid actors collide against
// - `presets`: scene configuration and built-in layouts

pub mod boundary;
pub mod decoder;
pub mod grid;
pub mod presets;
pub mod tile;

pub use decoder::DecodeError;
pub use grid::TileGrid;
pub use presets::{INDOOR_SCENE, LIVING_ROOM};

use glam::Vec2;

/// Scene construction errors. All of them abort construction; no partial grid
/// is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("invalid cell at row {row}, column {col}: {source}")]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: DecodeError,
    },

    #[error("layout contains no cells")]
    EmptyLayout,

    #[error("resize factor must be at least 1")]
    InvalidResize,

    #[error("sprite sheet must have at least one column")]
    InvalidColumns,

    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(Vec2),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let err = SceneError::Cell {
            row: 2,
            col: 3,
            source: DecodeError::NonNumeric("x".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid cell at row 2, column 3: cell `x` is not a number"
        );
    }
}
