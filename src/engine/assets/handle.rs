// Opaque handles to sprite sheets owned by the resource collaborator

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Stable identifier for an externally loaded resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u64);

impl AssetId {
    /// Derive an ID from the resource name the loader was given
    pub fn from_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Typed, copyable handle. The core never dereferences it; it only carries it
/// alongside render geometry so the draw collaborator knows which sheet to use.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle<T> {
    id: AssetId,
    _phantom: PhantomData<T>,
}

// Manual impls so `T` itself need not be Copy
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> AssetHandle<T> {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Handle for a sheet registered under `name`
    pub fn named(name: &str) -> Self {
        Self::new(AssetId::from_name(name))
    }

    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker for sprite-sheet textures
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SpriteSheetAsset;

pub type SpriteSheetHandle = AssetHandle<SpriteSheetAsset>;
