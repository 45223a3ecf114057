// Actor animation: named frame sequences and a frame-stepping controller

use log::debug;
use std::collections::HashMap;

/// Name of the animation every controller starts with
pub const DEFAULT_ANIMATION: &str = "default";

/// Slack when comparing accumulated tick time against a frame length, so that
/// ticks which evenly divide a frame are not lost to rounding
const FRAME_EPSILON: f32 = 1e-6;

/// Animation registration and lookup failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("unknown animation `{0}`")]
    Unknown(String),

    #[error("animation `{0}` has no frames")]
    Empty(String),

    #[error("animation `{name}` has invalid frame rate {fps}")]
    InvalidFps { name: String, fps: f32 },

    #[error("animation `{0}` is already registered")]
    Duplicate(String),
}

/// Ordered sprite-sheet frames played at a fixed rate
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<u32>,
    fps: f32,
}

impl Animation {
    pub fn new(name: &str, frames: Vec<u32>, fps: f32) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::Empty(name.to_string()));
        }
        if !(fps.is_finite() && fps > 0.0) {
            return Err(AnimationError::InvalidFps {
                name: name.to_string(),
                fps,
            });
        }
        Ok(Self { frames, fps })
    }

    /// Seconds each frame stays on screen
    pub fn frame_length(&self) -> f32 {
        1.0 / self.fps
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Frame index / elapsed-time state machine over a table of animations
#[derive(Debug, Clone)]
pub struct AnimationController {
    animations: HashMap<String, Animation>,
    current: String,
    frame_index: usize,
    elapsed_in_frame: f32,
    frame_length: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    /// Controller holding only a single-frame `default` animation
    pub fn new() -> Self {
        let default = Animation {
            frames: vec![0],
            fps: 1.0,
        };
        let frame_length = default.frame_length();

        let mut animations = HashMap::new();
        animations.insert(DEFAULT_ANIMATION.to_string(), default);

        Self {
            animations,
            current: DEFAULT_ANIMATION.to_string(),
            frame_index: 0,
            elapsed_in_frame: 0.0,
            frame_length,
        }
    }

    /// Register a new animation under `name`
    pub fn add(&mut self, name: &str, frames: Vec<u32>, fps: f32) -> Result<(), AnimationError> {
        if self.animations.contains_key(name) {
            return Err(AnimationError::Duplicate(name.to_string()));
        }
        let animation = Animation::new(name, frames, fps)?;
        self.animations.insert(name.to_string(), animation);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Switch to `name` and restart it from its first frame. Restarts even if
    /// `name` is already playing.
    pub fn set_animation(&mut self, name: &str) -> Result<(), AnimationError> {
        let animation = self
            .animations
            .get(name)
            .ok_or_else(|| AnimationError::Unknown(name.to_string()))?;

        self.frame_length = animation.frame_length();
        self.current = name.to_string();
        self.frame_index = 0;
        self.elapsed_in_frame = 0.0;

        debug!("Animation set to `{name}`");
        Ok(())
    }

    /// Advance by one tick of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.elapsed_in_frame += dt;

        if self.elapsed_in_frame + FRAME_EPSILON >= self.frame_length {
            let len = self.current_animation().map_or(1, Animation::len);
            self.frame_index = (self.frame_index + 1) % len;
            self.elapsed_in_frame = 0.0;
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    fn current_animation(&self) -> Option<&Animation> {
        self.animations.get(&self.current)
    }

    /// Position within the current sequence
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Sprite-sheet frame to draw right now
    pub fn frame(&self) -> u32 {
        self.current_animation()
            .and_then(|animation| animation.frames.get(self.frame_index))
            .copied()
            .unwrap_or(0)
    }

    pub fn elapsed_in_frame(&self) -> f32 {
        self.elapsed_in_frame
    }
}
