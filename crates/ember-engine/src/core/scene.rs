use crate::assets::record::Record;
use crate::components::bounds::Bounds;
use crate::components::component::Component;
use crate::error::AssetError;
use crate::input::state::InputState;
use crate::renderer::camera::{Camera, ScreenSize};
use crate::renderer::queue::{RenderQueue, SortPolicy};
use crate::renderer::raster::Renderer;
use crate::renderer::traits::Renderable;

/// A collection of components which update and render together.
///
/// The scene owns its components outright; the render queue and camera
/// only hold id handles into it. Every renderable component added to the
/// scene is present in the queue exactly once.
pub struct Scene {
    id: String,
    components: Vec<Box<dyn Component>>,
    queue: RenderQueue,
    camera: Camera,
}

impl Scene {
    pub fn new(id: impl Into<String>, policy: SortPolicy, screen: ScreenSize) -> Self {
        Self {
            id: id.into(),
            components: Vec::new(),
            queue: RenderQueue::new(policy),
            camera: Camera::new(screen),
        }
    }

    /// Reconstructs a scene from its two-entry record: id and sort code.
    /// The result has a fresh camera and no components.
    pub fn from_record(data: &[String], screen: ScreenSize) -> Result<Self, AssetError> {
        let id = data
            .first()
            .ok_or_else(|| AssetError::malformed("scene record", "missing id entry"))?;
        let code = data
            .get(1)
            .ok_or_else(|| AssetError::malformed("scene record", "missing sort code entry"))?;
        let code: u32 = code.parse().map_err(|_| {
            AssetError::malformed("scene record", format!("sort code {code:?} is not a number"))
        })?;
        let policy = SortPolicy::from_code(code).ok_or_else(|| {
            AssetError::malformed("scene record", format!("unknown sort code {code}"))
        })?;

        Ok(Self::new(id.clone(), policy, screen))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Adds a component. Renderable components are also enqueued for
    /// drawing.
    pub fn add_component(&mut self, component: Box<dyn Component>) {
        if let Some(renderable) = component.renderable() {
            self.queue.add(renderable);
        }
        self.components.push(component);
    }

    /// Removes a component by id from the scene and, when renderable,
    /// from the render queue. Returns the component if it was present.
    pub fn remove_component(&mut self, id: &str) -> Option<Box<dyn Component>> {
        let idx = self.components.iter().position(|c| c.id() == id)?;
        let component = self.components.remove(idx);
        if component.renderable().is_some() {
            self.queue.remove(id);
        }
        Some(component)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Component + 'static)> {
        self.components
            .iter_mut()
            .find(|c| c.id() == id)
            .map(|c| c.as_mut())
    }

    /// Re-sorts the render queue from live bounds and layers. Call after
    /// editing a renderable outside its own update.
    pub fn resync_queue(&mut self) {
        let components = &self.components;
        self.queue
            .resync(|id| Self::find_renderable(components, id));
    }

    /// Advances every component, then the camera.
    ///
    /// Components see the camera view computed on the previous tick; the
    /// camera then re-centers on its focus, resolved by id. An
    /// unresolvable focus leaves the offsets untouched.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let view = self.camera.view();
        for component in &mut self.components {
            component.update(dt, input, &view);
        }

        let focus_id = self.camera.focus_id().map(str::to_owned);
        let focus_bounds: Option<Bounds> = focus_id
            .as_deref()
            .and_then(|id| self.components.iter().find(|c| c.id() == id))
            .map(|c| c.bounds().clone());
        self.camera.update(focus_bounds.as_ref());
    }

    /// Draws all renderable components through the render queue.
    pub fn render(&self, renderer: &mut Renderer) {
        let view = self.camera.view();
        self.queue.render(renderer, &view, |id| {
            Self::find_renderable(&self.components, id)
        });
    }

    fn find_renderable<'a>(
        components: &'a [Box<dyn Component>],
        id: &str,
    ) -> Option<&'a dyn Renderable> {
        components
            .iter()
            .find(|c| c.id() == id)
            .and_then(|c| c.renderable())
    }
}

impl Record for Scene {
    fn write_record(&self) -> Vec<String> {
        vec![self.id.clone(), self.queue.policy().code().to_string()]
    }
}
