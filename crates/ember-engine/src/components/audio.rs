use glam::Vec2;

use super::bounds::Bounds;
use super::component::Component;
use super::property::Property;
use crate::assets::sound::AudioClip;
use crate::input::state::InputState;
use crate::renderer::camera::CameraView;

/// Decibel range the falloff distance is mapped across.
const GAIN_RANGE_DB: f32 = 80.0;

/// How an audio component behaves when its clip finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayStyle {
    /// The clip plays once, then the component closes itself.
    #[default]
    Once,
    /// The clip restarts from the beginning each time it finishes.
    Looped,
}

/// Component which plays sound.
///
/// A spatial emitter attenuates its clip by the distance between its
/// position and the camera's raw focus center; a global emitter plays at
/// nominal gain. Audio bounds are position-only: size mutation is
/// silently ignored.
pub struct Audio {
    id: String,
    bounds: Bounds,
    clip: Box<dyn AudioClip>,
    global: bool,
    falloff: f32,
    style: PlayStyle,
    playing: bool,
    closed: bool,
}

impl Audio {
    /// Creates a spatial emitter at `(x, y)`. `falloff` is the distance at
    /// which the clip becomes silent; greater distances are treated as
    /// equal to it.
    pub fn spatial(
        id: impl Into<String>,
        clip: Box<dyn AudioClip>,
        x: f32,
        y: f32,
        falloff: f32,
    ) -> Self {
        Self {
            id: id.into(),
            bounds: Bounds::position_only(x, y),
            clip,
            global: false,
            falloff,
            style: PlayStyle::Once,
            playing: false,
            closed: false,
        }
    }

    /// Creates a global emitter playing at nominal gain.
    pub fn global(id: impl Into<String>, clip: Box<dyn AudioClip>) -> Self {
        Self {
            id: id.into(),
            bounds: Bounds::position_only(0.0, 0.0),
            clip,
            global: true,
            falloff: 1.0,
            style: PlayStyle::Once,
            playing: false,
            closed: false,
        }
    }

    pub fn set_play_style(&mut self, style: PlayStyle) {
        self.style = style;
    }

    /// Starts playback, or rewinds to the start when already playing.
    /// Does nothing once the component is closed.
    pub fn play(&mut self) {
        if self.closed {
            return;
        }
        if self.playing {
            self.clip.restart();
        } else {
            self.playing = true;
        }
    }

    /// Pauses playback at the current position.
    pub fn pause(&mut self) {
        if !self.closed {
            self.playing = false;
        }
    }

    /// Releases the clip. Irreversible; a new component has to be
    /// created for the same sound.
    pub fn close(&mut self) {
        self.clip.close();
        self.closed = true;
        self.playing = false;
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Attenuates the clip by the distance to the camera's focus center.
    fn apply_spatial_gain(&mut self, camera: &CameraView) {
        let position = Vec2::new(self.bounds.x(), self.bounds.y());
        let distance = position
            .distance(camera.focus_center.as_vec2())
            .min(self.falloff);
        self.clip.set_gain_db(-(distance * GAIN_RANGE_DB) / self.falloff);
    }
}

impl Component for Audio {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Audio components have no use for properties; the call is ignored.
    fn add_property(&mut self, _property: Box<dyn Property>) {}

    fn update(&mut self, _dt: f32, _input: &InputState, camera: &CameraView) {
        if !self.playing {
            return;
        }

        if !self.global {
            self.apply_spatial_gain(camera);
        }

        if !self.clip.is_running() {
            match self.style {
                PlayStyle::Looped => self.clip.restart(),
                PlayStyle::Once => self.close(),
            }
        }
    }
}
