pub mod registry;
pub mod scene;
pub mod time;

// Re-export key types for convenient access
pub use registry::SceneRegistry;
pub use scene::Scene;
pub use time::FrameTimer;
