use glam::IVec2;

use crate::components::bounds::Bounds;

/// Fixed screen dimensions a camera centers its focus in.
/// Configured once from the game config, before any camera exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// Camera offsets sampled for one tick.
///
/// `offset` is subtracted from dynamic draws; `focus_center` is the raw
/// center of the focused component (no screen centering), used for
/// spatial calculations such as audio falloff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraView {
    pub offset: IVec2,
    pub focus_center: IVec2,
}

impl CameraView {
    /// The zero view used for static draws.
    pub const STATIC: CameraView = CameraView {
        offset: IVec2::ZERO,
        focus_center: IVec2::ZERO,
    };
}

/// Tracks a focus component by id and recomputes the screen offset once
/// per scene tick so the focus stays centered.
///
/// The focus reference is non-owning: the scene resolves the id each tick
/// and hands the bounds over. A missing or unresolvable focus leaves the
/// last computed offsets in place; there is no reset.
#[derive(Debug, Clone)]
pub struct Camera {
    screen: ScreenSize,
    focus: Option<String>,
    offset: IVec2,
    focus_center: IVec2,
}

impl Camera {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            focus: None,
            offset: IVec2::ZERO,
            focus_center: IVec2::ZERO,
        }
    }

    /// Follows the component with the given id.
    pub fn set_focus(&mut self, id: impl Into<String>) {
        self.focus = Some(id.into());
    }

    /// Stops following; offsets keep their last value.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    pub fn focus_id(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Recomputes the offset and raw focus center from the focus bounds.
    /// Called once per scene tick, after all components have updated.
    pub fn update(&mut self, focus: Option<&Bounds>) {
        if let Some(b) = focus {
            let half_w = (self.screen.width / 2) as f32;
            let half_h = (self.screen.height / 2) as f32;

            self.offset = IVec2::new(
                (b.x() - half_w + b.width() / 2.0) as i32,
                (b.y() - half_h + b.height() / 2.0) as i32,
            );
            self.focus_center = IVec2::new(
                (b.x() + b.width() / 2.0) as i32,
                (b.y() + b.height() / 2.0) as i32,
            );
        }
    }

    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    pub fn focus_center(&self) -> IVec2 {
        self.focus_center
    }

    /// The offsets as an immutable per-tick view.
    pub fn view(&self) -> CameraView {
        CameraView {
            offset: self.offset,
            focus_center: self.focus_center,
        }
    }
}
