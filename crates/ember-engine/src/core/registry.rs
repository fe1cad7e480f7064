use std::collections::HashMap;

use super::scene::Scene;

/// Owns every scene in a game and tracks which one is active.
///
/// Exactly one registry exists per engine; it is constructed explicitly
/// and passed by reference to setup code and the loop; there is no
/// process-wide instance. The loop reads the active scene once per frame.
pub struct SceneRegistry {
    scenes: HashMap<String, Scene>,
    active: Option<String>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
        }
    }

    /// Registers a scene under its own id. A scene with the same id is
    /// replaced.
    pub fn add(&mut self, scene: Scene) {
        self.scenes.insert(scene.id().to_owned(), scene);
    }

    /// Selects the active scene. Selecting an unknown id clears the
    /// active scene.
    pub fn set_active(&mut self, id: &str) {
        if self.scenes.contains_key(id) {
            self.active = Some(id.to_owned());
        } else {
            log::warn!("scene {id:?} is not registered; active scene cleared");
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<&Scene> {
        self.active.as_deref().and_then(|id| self.scenes.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Scene> {
        let id = self.active.as_deref()?;
        self.scenes.get_mut(id)
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
