use std::sync::Arc;

use super::bounds::Bounds;
use super::component::Component;
use super::property::Property;
use crate::input::state::InputState;
use crate::renderer::camera::CameraView;
use crate::renderer::grid::ColorGrid;
use crate::renderer::raster::Renderer;
use crate::renderer::traits::{DrawType, Renderable};

/// Component which draws a single color grid to the screen.
///
/// The bounds size always matches the texture dimensions; textures are
/// shared, so swapping one in is cheap.
pub struct Sprite {
    id: String,
    texture: Arc<ColorGrid>,
    bounds: Bounds,
    layer: i32,
    draw_type: DrawType,
    visible: bool,
    properties: Vec<Box<dyn Property>>,
}

impl Sprite {
    /// Creates a sprite. The bounds size is taken from the texture.
    pub fn new(id: impl Into<String>, texture: impl Into<Arc<ColorGrid>>, mut bounds: Bounds) -> Self {
        let texture = texture.into();
        bounds.set_size(texture.width() as f32, texture.height() as f32);

        Self {
            id: id.into(),
            texture,
            bounds,
            layer: 0,
            draw_type: DrawType::Static,
            visible: true,
            properties: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_draw_type(mut self, draw_type: DrawType) -> Self {
        self.draw_type = draw_type;
        self
    }

    /// Swaps the texture. The bounds size follows the new texture.
    pub fn set_texture(&mut self, texture: impl Into<Arc<ColorGrid>>) {
        self.texture = texture.into();
        self.bounds
            .set_size(self.texture.width() as f32, self.texture.height() as f32);
    }

    pub fn texture(&self) -> &ColorGrid {
        &self.texture
    }

    /// Mutable bounds access for scene-setup code.
    pub fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

impl Component for Sprite {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn add_property(&mut self, property: Box<dyn Property>) {
        self.properties.push(property);
    }

    fn update(&mut self, dt: f32, input: &InputState, _camera: &CameraView) {
        for property in &mut self.properties {
            property.update(&mut self.bounds, dt, input);
        }
    }

    fn renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }

    fn renderable_mut(&mut self) -> Option<&mut dyn Renderable> {
        Some(self)
    }
}

impl Renderable for Sprite {
    fn layer(&self) -> i32 {
        self.layer
    }

    fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn draw_type(&self) -> DrawType {
        self.draw_type
    }

    fn set_draw_type(&mut self, draw_type: DrawType) {
        self.draw_type = draw_type;
    }

    fn render(&self, renderer: &mut Renderer, camera: &CameraView) {
        renderer.draw_color_grid(
            (self.bounds.x() - camera.offset.x as f32) as i32,
            (self.bounds.y() - camera.offset.y as f32) as i32,
            &self.texture,
        );
    }
}
