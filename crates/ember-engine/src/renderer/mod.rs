pub mod camera;
pub mod color;
pub mod grid;
pub mod queue;
pub mod raster;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera, CameraView, ScreenSize};
pub use color::Color;
pub use grid::ColorGrid;
pub use queue::{RenderQueue, SortPolicy};
pub use raster::{FrameImage, Renderer};
pub use traits::{DrawType, Renderable};
