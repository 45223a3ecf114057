// Engine modules: resource handles, frame clock, input, render geometry

pub mod assets;
pub mod frame_clock;
pub mod input;
pub mod render;
