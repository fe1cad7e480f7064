use super::bounds::Bounds;
use super::component::Component;
use super::property::Property;
use crate::input::state::InputState;
use crate::renderer::camera::CameraView;

/// A component that cannot be rendered and never updates, but holds a
/// position on screen: a camera focus target or spatial reference point.
/// Anchor bounds are position-only: size mutation is silently ignored.
pub struct Anchor {
    id: String,
    bounds: Bounds,
}

impl Anchor {
    pub fn new(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            bounds: Bounds::position_only(x, y),
        }
    }

    /// Mutable bounds access for scene-setup code.
    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

impl Component for Anchor {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Anchors have no use for properties; the call is ignored.
    fn add_property(&mut self, _property: Box<dyn Property>) {}

    /// Anchors do nothing when updating.
    fn update(&mut self, _dt: f32, _input: &InputState, _camera: &CameraView) {}
}
