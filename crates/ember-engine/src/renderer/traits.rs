use super::camera::CameraView;
use super::raster::Renderer;
use crate::components::component::Component;

/// How a renderable entity positions itself relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawType {
    /// Drawn at its bounds position, ignoring camera motion.
    #[default]
    Static,
    /// Drawn offset by the active camera.
    Dynamic,
}

/// The drawing capability of a component.
///
/// A renderable belongs to its scene's [`RenderQueue`](super::queue::RenderQueue),
/// which sorts by layer or bounds and dispatches `render` in order.
pub trait Renderable: Component {
    /// Layer index used by layered sorting.
    fn layer(&self) -> i32;

    /// Sets the layer index. The owning render queue is not re-sorted
    /// automatically; call the scene's resync afterwards.
    fn set_layer(&mut self, layer: i32);

    /// Whether this entity is drawn at all.
    fn visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn draw_type(&self) -> DrawType;

    fn set_draw_type(&mut self, draw_type: DrawType);

    /// Composites this entity into the renderer's pixel buffer.
    /// `camera` is the zero view for static draws.
    fn render(&self, renderer: &mut Renderer, camera: &CameraView);
}
