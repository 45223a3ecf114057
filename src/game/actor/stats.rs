// Actor tuning: size, speed and the standard walk/idle animation set

use glam::Vec2;

/// Construction parameters for an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorConfig {
    /// Size of one sprite-sheet cell in pixels
    pub sprite_size: Vec2,
    /// Cells per row in the actor's sprite sheet
    pub columns: u32,
    /// Integer upscale for the sprite and its speed
    pub resize: u32,
    /// Position refers to the sprite's center instead of its top-left corner
    pub centered: bool,
    /// Collision box in world pixels; `None` uses the full scaled sprite
    pub hitbox_size: Option<Vec2>,
    /// Walking speed in sheet pixels per second (scaled by `resize`)
    pub speed: f32,
}

/// The player character: 32px cells, 16 per row, drawn 4x with a feet-sized
/// hitbox
pub const BASE_ACTOR: ActorConfig = ActorConfig {
    sprite_size: Vec2::new(32.0, 32.0),
    columns: 16,
    resize: 4,
    centered: true,
    hitbox_size: Some(Vec2::new(24.0, 31.0)),
    speed: 20.0,
};

impl Default for ActorConfig {
    fn default() -> Self {
        BASE_ACTOR
    }
}

impl ActorConfig {
    /// Sprite size on screen
    pub fn scaled_size(&self) -> Vec2 {
        self.sprite_size * self.resize as f32
    }

    /// Effective hitbox size
    pub fn resolved_hitbox(&self) -> Vec2 {
        self.hitbox_size.unwrap_or_else(|| self.scaled_size())
    }

    /// Speed in world pixels per second
    pub fn scaled_speed(&self) -> f32 {
        self.speed * self.resize as f32
    }
}

/// `(name, frames, fps)` for the standard four-direction character sheet
pub const STANDARD_ANIMATIONS: [(&str, &[u32], f32); 8] = [
    ("idle_down", &[0, 1], 2.0),
    ("idle_up", &[2, 3], 2.0),
    ("idle_left", &[4, 5], 2.0),
    ("idle_right", &[6, 7], 2.0),
    ("walk_down", &[8, 9, 10, 9, 8, 11, 12, 11], 8.0),
    ("walk_up", &[13, 14, 15, 14, 13, 16, 17, 16], 8.0),
    ("walk_left", &[18, 19, 20, 19, 18, 21, 22, 21], 8.0),
    ("walk_right", &[23, 24, 25, 24, 23, 26, 27, 26], 8.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Direction;

    #[test]
    fn test_default_is_base() {
        let config = ActorConfig::default();
        assert_eq!(config, BASE_ACTOR);
        assert_eq!(config.scaled_size(), Vec2::splat(128.0));
        assert_eq!(config.scaled_speed(), 80.0);
    }

    #[test]
    fn test_hitbox_defaults_to_scaled_sprite() {
        let config = ActorConfig {
            hitbox_size: None,
            ..BASE_ACTOR
        };
        assert_eq!(config.resolved_hitbox(), Vec2::splat(128.0));
        assert_eq!(BASE_ACTOR.resolved_hitbox(), Vec2::new(24.0, 31.0));
    }

    #[test]
    fn test_standard_set_covers_every_facing() {
        for direction in Direction::ALL {
            for prefix in ["idle", "walk"] {
                let name = format!("{prefix}_{direction}");
                assert!(
                    STANDARD_ANIMATIONS.iter().any(|(n, _, _)| *n == name),
                    "missing {name}"
                );
            }
        }
    }
}
