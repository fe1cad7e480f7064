pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{Engine, EngineContext, Game, GameConfig, GameLoop};
pub use api::presenter::{NullPresenter, Presenter};
pub use assets::file::AssetFile;
pub use assets::manifest::AssetManifest;
pub use assets::map::TileIndexGrid;
pub use assets::record::{read_record_file, write_record_file, Record};
pub use assets::sheet::TileSheet;
pub use assets::sound::AudioClip;
pub use components::anchor::Anchor;
pub use components::audio::{Audio, PlayStyle};
pub use components::bounds::{Bounds, SizePolicy};
pub use components::component::Component;
pub use components::property::{Controller, Property};
pub use components::sprite::Sprite;
pub use components::tilemap::TileMap;
pub use crate::core::registry::SceneRegistry;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameTimer;
pub use error::{AssetError, EngineError};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::InputState;
pub use renderer::camera::{Camera, CameraView, ScreenSize};
pub use renderer::color::Color;
pub use renderer::grid::ColorGrid;
pub use renderer::queue::{RenderQueue, SortPolicy};
pub use renderer::raster::{FrameImage, Renderer};
pub use renderer::traits::{DrawType, Renderable};
