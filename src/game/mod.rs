// Game layer: the tile scene and the actors that walk it

pub mod actor;
pub mod scene;
