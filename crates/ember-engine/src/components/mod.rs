pub mod anchor;
pub mod audio;
pub mod bounds;
pub mod component;
pub mod property;
pub mod sprite;
pub mod tilemap;

// Re-export key types for convenient access
pub use anchor::Anchor;
pub use audio::{Audio, PlayStyle};
pub use bounds::{Bounds, SizePolicy};
pub use component::Component;
pub use property::{Controller, Property};
pub use sprite::Sprite;
pub use tilemap::TileMap;
