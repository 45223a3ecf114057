// The actor: input-driven movement against a tile grid, plus animation

use super::animation::{AnimationController, AnimationError};
use super::stats::{ActorConfig, STANDARD_ANIMATIONS};
use super::ActorError;
use crate::core::math::{spans_overlap, Rect};
use crate::engine::assets::SpriteSheetHandle;
use crate::engine::input::{Direction, InputSnapshot};
use crate::engine::render::{render_geometry, RenderGeometry, Renderable};
use crate::game::scene::TileGrid;
use glam::Vec2;
use log::{debug, trace};
use std::rc::Rc;

/// Margin (sheet pixels, scaled by resize) a boundary must overlap the hitbox
/// by, across the axis of motion, before it can block that motion.
///
/// The margin does not grow with the step length and only the destination is
/// probed, so a step longer than a boundary is thick can pass through it.
pub const COLLISION_MARGIN: f32 = 2.0;

/// Speed factor while sprinting
pub const SPRINT_MULTIPLIER: f32 = 2.0;

/// Whether `boundary` can block `hitbox` moving toward `direction`: it must lie
/// ahead of the hitbox's leading edge and overlap it across the other axis by
/// more than `margin`.
pub fn faces_boundary(direction: Direction, hitbox: &Rect, boundary: &Rect, margin: f32) -> bool {
    let across_x = || {
        spans_overlap(
            boundary.left(),
            boundary.right(),
            hitbox.left(),
            hitbox.right(),
            margin,
        )
    };
    let across_y = || {
        spans_overlap(
            boundary.top(),
            boundary.bottom(),
            hitbox.top(),
            hitbox.bottom(),
            margin,
        )
    };

    match direction {
        Direction::Up => boundary.top() < hitbox.top() && across_x(),
        Direction::Down => boundary.bottom() > hitbox.bottom() && across_x(),
        Direction::Left => boundary.left() < hitbox.left() && across_y(),
        Direction::Right => boundary.right() > hitbox.right() && across_y(),
    }
}

/// A sprite that walks around a tile grid
#[derive(Debug)]
pub struct Actor {
    sheet: SpriteSheetHandle,
    position: Vec2,
    sprite_size: Vec2,
    resize: u32,
    columns: u32,
    centered: bool,
    hitbox_size: Vec2,
    speed: f32,
    speed_multiplier: f32,
    facing: Direction,
    animation: AnimationController,
    scene: Option<Rc<TileGrid>>,
}

impl Actor {
    pub fn new(
        sheet: SpriteSheetHandle,
        position: Vec2,
        config: ActorConfig,
    ) -> Result<Self, ActorError> {
        if config.resize == 0 {
            return Err(ActorError::InvalidResize);
        }
        if config.columns == 0 {
            return Err(ActorError::InvalidColumns);
        }

        Ok(Self {
            sheet,
            position,
            sprite_size: config.sprite_size,
            resize: config.resize,
            columns: config.columns,
            centered: config.centered,
            hitbox_size: config.resolved_hitbox(),
            speed: config.scaled_speed(),
            speed_multiplier: 1.0,
            facing: Direction::Down,
            animation: AnimationController::new(),
            scene: None,
        })
    }

    /// Register the eight standard idle/walk animations
    pub fn with_standard_animations(mut self) -> Result<Self, ActorError> {
        for (name, frames, fps) in STANDARD_ANIMATIONS {
            self.add_animation(name, frames.to_vec(), fps)?;
        }
        Ok(self)
    }

    pub fn add_animation(
        &mut self,
        name: &str,
        frames: Vec<u32>,
        fps: f32,
    ) -> Result<(), AnimationError> {
        self.animation.add(name, frames, fps)
    }

    /// Restart the named animation. Unknown names are an error.
    pub fn set_animation(&mut self, name: &str) -> Result<(), AnimationError> {
        self.animation.set_animation(name)
    }

    /// Attach the grid this actor collides against. Allowed once.
    pub fn bind(&mut self, scene: Rc<TileGrid>) -> Result<(), ActorError> {
        if self.scene.is_some() {
            return Err(ActorError::AlreadyBound);
        }
        self.scene = Some(scene);
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.scene.is_some()
    }

    /// One frame: move against the grid, then step the animation
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> Result<(), ActorError> {
        self.move_by(dt, input)?;
        self.animation.update(dt);
        Ok(())
    }

    fn move_by(&mut self, dt: f32, input: &InputSnapshot) -> Result<(), ActorError> {
        let scene = Rc::clone(self.scene.as_ref().ok_or(ActorError::NotBound)?);

        self.speed_multiplier = if input.sprint() {
            SPRINT_MULTIPLIER
        } else {
            1.0
        };

        let Some(primary) = input.primary() else {
            self.play(&format!("idle_{}", self.facing))?;
            return Ok(());
        };

        let step = self.speed * dt * self.speed_multiplier;

        // Each axis is resolved on its own so a blocked direction does not
        // stop the others (sliding along walls).
        for &direction in input.directions() {
            let candidate = self.position + direction.unit() * step;
            if self.blocked(&scene, direction, candidate) {
                trace!("Blocked moving {direction} at {}", self.position);
            } else {
                self.position = candidate;
            }
        }

        self.facing = primary;
        self.play(&format!("walk_{}", self.facing))?;
        Ok(())
    }

    /// Switch animation only when the id changes; restarting an animation that
    /// is already playing would pin the walk cycle to its first frame.
    fn play(&mut self, name: &str) -> Result<(), AnimationError> {
        if self.animation.current() != name {
            debug!("Actor animation {} -> {name}", self.animation.current());
            self.animation.set_animation(name)?;
        }
        Ok(())
    }

    fn blocked(&self, scene: &TileGrid, direction: Direction, candidate: Vec2) -> bool {
        let current = self.hitbox();
        let probe = self.hitbox_at(candidate);
        let margin = COLLISION_MARGIN * self.resize as f32;

        scene
            .boundaries()
            .filter(|(_, boundary)| faces_boundary(direction, &current, boundary, margin))
            .any(|(_, boundary)| probe.intersects(&boundary))
    }

    /// Full sprite footprint at `position`
    fn rect_at(&self, position: Vec2) -> Rect {
        let size = self.scaled_size();
        let min = if self.centered {
            position - size / 2.0
        } else {
            position
        };
        Rect::from_min_size(min, size)
    }

    /// Collision box: horizontally centered on the sprite, resting on its
    /// bottom edge
    pub fn hitbox(&self) -> Rect {
        self.hitbox_at(self.position)
    }

    fn hitbox_at(&self, position: Vec2) -> Rect {
        let sprite = self.rect_at(position);
        let min = Vec2::new(
            sprite.center().x - self.hitbox_size.x / 2.0,
            sprite.bottom() - self.hitbox_size.y,
        );
        Rect::from_min_size(min, self.hitbox_size)
    }

    pub fn scaled_size(&self) -> Vec2 {
        self.sprite_size * self.resize as f32
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Place the actor without collision checks (spawning)
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Id of the animation currently playing
    pub fn animation(&self) -> &str {
        self.animation.current()
    }

    pub fn animation_frame_index(&self) -> usize {
        self.animation.frame_index()
    }

    /// Sprite-sheet frame to draw
    pub fn frame(&self) -> u32 {
        self.animation.frame()
    }

    pub fn sheet(&self) -> SpriteSheetHandle {
        self.sheet
    }
}

impl Renderable for Actor {
    fn render_geometry(&self) -> RenderGeometry {
        render_geometry(
            self.position,
            self.sprite_size,
            self.resize,
            self.frame(),
            self.columns,
            self.centered,
        )
    }
}
