use super::bounds::Bounds;
use super::property::Property;
use crate::input::state::InputState;
use crate::renderer::camera::CameraView;
use crate::renderer::traits::Renderable;

/// An updatable entity with identity and a bounding box.
///
/// Components live in exactly one scene and receive one update per tick
/// while that scene is active. The renderable subset additionally
/// implements [`Renderable`] and is dispatched by the scene's render
/// queue.
pub trait Component: Send {
    /// Stable identifier. Unique within a scene by convention; uniqueness
    /// is not enforced.
    fn id(&self) -> &str;

    /// The component's bounding box.
    fn bounds(&self) -> &Bounds;

    /// Attaches a property to this component. Components with no use for
    /// properties silently ignore the call.
    fn add_property(&mut self, property: Box<dyn Property>);

    /// Advances the component by one tick. `camera` is the view computed
    /// on the previous tick; the scene updates its camera after all
    /// components.
    fn update(&mut self, dt: f32, input: &InputState, camera: &CameraView);

    /// The renderable capability of this component, if it has one.
    fn renderable(&self) -> Option<&dyn Renderable> {
        None
    }

    /// Mutable access to the renderable capability.
    fn renderable_mut(&mut self) -> Option<&mut dyn Renderable> {
        None
    }
}
