// Actors: movement with tile collision, and sprite animation
//
// - `actor`: the actor itself, per-axis movement and directional collision
// - `animation`: named frame sequences and the frame-stepping controller
// - `stats`: actor configuration and the standard animation set

#[allow(clippy::module_inception)]
pub mod actor;
pub mod animation;
pub mod stats;

pub use actor::Actor;
pub use animation::AnimationError;
pub use stats::BASE_ACTOR;

/// Actor lifecycle and update errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActorError {
    #[error("actor is not bound to a scene")]
    NotBound,

    #[error("actor is already bound to a scene")]
    AlreadyBound,

    #[error("resize factor must be at least 1")]
    InvalidResize,

    #[error("sprite sheet must have at least one column")]
    InvalidColumns,

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_error_display() {
        assert_eq!(
            ActorError::NotBound.to_string(),
            "actor is not bound to a scene"
        );
        let err: ActorError = AnimationError::Unknown("walk_up".to_string()).into();
        assert_eq!(err.to_string(), "unknown animation `walk_up`");
    }
}
