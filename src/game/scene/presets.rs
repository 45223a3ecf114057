// Scene configuration and built-in layouts

use super::SceneError;
use glam::Vec2;

/// How a layout is turned into a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Size of one sprite-sheet cell in pixels
    pub tile_size: Vec2,
    /// Number of cells per row in the sprite sheet
    pub columns: u32,
    /// Integer upscale applied to every tile
    pub resize: u32,
    /// Tiles are anchored at their centers and the grid at its midpoint
    pub centered: bool,
}

/// 32px indoor tileset, 9 cells wide, drawn 4x and centered
pub const INDOOR_SCENE: SceneConfig = SceneConfig {
    tile_size: Vec2::new(32.0, 32.0),
    columns: 9,
    resize: 4,
    centered: true,
};

impl Default for SceneConfig {
    fn default() -> Self {
        INDOOR_SCENE
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.resize == 0 {
            return Err(SceneError::InvalidResize);
        }
        if self.columns == 0 {
            return Err(SceneError::InvalidColumns);
        }
        let size = self.tile_size;
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(SceneError::InvalidTileSize(size));
        }
        Ok(())
    }

    /// On-screen size of one tile
    pub fn scaled_tile_size(&self) -> Vec2 {
        self.tile_size * self.resize as f32
    }
}

/// A 4x4 room walled on every side
pub const LIVING_ROOM: &str = "\
# frame.top right bottom left
6.3003  5.3000  5.3000  4.3300
7.0003  0       0       3.0300
7.0003  0       0       3.0300
8.0033  1.0030  1.0030  2.0330
";
