use super::bounds::Bounds;
use crate::input::state::{keys, InputState};

/// A behavior module attached to exactly one component, invoked during
/// that component's update. The parent hands over mutable access to its
/// bounds; a property mutates owned state, never the parent itself.
pub trait Property: Send {
    fn update(&mut self, bounds: &mut Bounds, dt: f32, input: &InputState);
}

/// Moves the parent component with WASD input.
///
/// The step is a fixed number of pixels per tick, not scaled by `dt`.
pub struct Controller {
    speed: f32,
}

impl Controller {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Property for Controller {
    fn update(&mut self, bounds: &mut Bounds, _dt: f32, input: &InputState) {
        let mut dx = 0.0;
        let mut dy = 0.0;

        if input.key(keys::W) {
            dy -= self.speed;
        }
        if input.key(keys::S) {
            dy += self.speed;
        }
        if input.key(keys::A) {
            dx -= self.speed;
        }
        if input.key(keys::D) {
            dx += self.speed;
        }

        bounds.translate(dx, dy);
    }
}
