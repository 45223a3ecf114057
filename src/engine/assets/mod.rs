// Resource handles
//
// Loading and releasing textures belongs to the resource collaborator; the core
// only holds opaque handles to what it was given.

mod handle;

pub use handle::SpriteSheetHandle;
