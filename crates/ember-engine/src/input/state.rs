use glam::IVec2;

use super::queue::InputEvent;

/// Number of key codes tracked.
pub const KEY_COUNT: usize = 128;
/// Number of mouse button codes tracked. Code 0 is reserved for
/// unrecognized buttons.
pub const BUTTON_COUNT: usize = 6;

/// Well-known key codes (the classic VK_* values for movement keys).
pub mod keys {
    pub const SPACE: u8 = 32;
    pub const A: u8 = 65;
    pub const D: u8 = 68;
    pub const S: u8 = 83;
    pub const W: u8 = 87;
}

/// Keyboard and mouse state for one update pass.
///
/// The snapshot is immutable for the duration of a pass; [`advance`]
/// rolls current state into previous-frame storage afterwards and resets
/// the per-pass change values. Codes outside the tracked ranges read as
/// "not pressed" and are dropped on write.
///
/// [`advance`]: InputState::advance
pub struct InputState {
    scale: f32,
    keys: [bool; KEY_COUNT],
    keys_last: [bool; KEY_COUNT],
    buttons: [bool; BUTTON_COUNT],
    buttons_last: [bool; BUTTON_COUNT],
    mouse: IVec2,
    mouse_last: IVec2,
    mouse_delta: IVec2,
    scroll: i32,
    dragging: bool,
}

impl InputState {
    /// `scale` is the window pixel scale; pointer coordinates are divided
    /// by it so mouse positions line up with the render buffer.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            keys: [false; KEY_COUNT],
            keys_last: [false; KEY_COUNT],
            buttons: [false; BUTTON_COUNT],
            buttons_last: [false; BUTTON_COUNT],
            mouse: IVec2::ZERO,
            mouse_last: IVec2::ZERO,
            mouse_delta: IVec2::ZERO,
            scroll: 0,
            dragging: false,
        }
    }

    /// Folds one raw event into the current state.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { code } => self.set_key(code, true),
            InputEvent::KeyUp { code } => self.set_key(code, false),
            InputEvent::ButtonDown { code } => self.set_button(code, true),
            InputEvent::ButtonUp { code } => self.set_button(code, false),
            InputEvent::PointerMove { x, y } => {
                self.set_pointer(x, y);
                self.dragging = false;
            }
            InputEvent::PointerDrag { x, y } => {
                self.set_pointer(x, y);
                self.dragging = true;
            }
            InputEvent::Wheel { amount } => self.scroll = amount,
        }
    }

    /// Rolls current-frame state into previous-frame storage and resets
    /// scroll and mouse deltas. Called after every update pass.
    pub fn advance(&mut self) {
        self.keys_last = self.keys;
        self.buttons_last = self.buttons;
        self.mouse_last = self.mouse;
        self.mouse_delta = IVec2::ZERO;
        self.scroll = 0;
    }

    fn set_key(&mut self, code: u8, down: bool) {
        if let Some(key) = self.keys.get_mut(code as usize) {
            *key = down;
        }
    }

    fn set_button(&mut self, code: u8, down: bool) {
        if let Some(button) = self.buttons.get_mut(code as usize) {
            *button = down;
        }
    }

    fn set_pointer(&mut self, x: f32, y: f32) {
        self.mouse = IVec2::new((x / self.scale) as i32, (y / self.scale) as i32);
        self.mouse_delta = self.mouse - self.mouse_last;
    }

    /// Whether the key with the given code is currently down.
    pub fn key(&self, code: u8) -> bool {
        self.keys.get(code as usize).copied().unwrap_or(false)
    }

    /// Whether the key went down since the previous pass.
    pub fn key_pressed(&self, code: u8) -> bool {
        self.key(code) && !self.keys_last.get(code as usize).copied().unwrap_or(false)
    }

    /// Whether the button with the given code is currently down.
    pub fn button(&self, code: u8) -> bool {
        self.buttons.get(code as usize).copied().unwrap_or(false)
    }

    /// Whether the button went down since the previous pass.
    pub fn button_pressed(&self, code: u8) -> bool {
        self.button(code) && !self.buttons_last.get(code as usize).copied().unwrap_or(false)
    }

    /// Current pointer position in buffer pixels.
    pub fn mouse(&self) -> IVec2 {
        self.mouse
    }

    /// Pointer movement since the previous pass.
    pub fn mouse_delta(&self) -> IVec2 {
        self.mouse_delta
    }

    /// Wheel movement since the previous pass.
    pub fn scroll(&self) -> i32 {
        self.scroll
    }

    /// Whether the pointer is moving with a button held.
    pub fn dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_state_tracks_down_and_up() {
        let mut input = InputState::new(1.0);
        input.apply(InputEvent::KeyDown { code: keys::W });
        assert!(input.key(keys::W));

        input.apply(InputEvent::KeyUp { code: keys::W });
        assert!(!input.key(keys::W));
    }

    #[test]
    fn key_pressed_is_an_edge() {
        let mut input = InputState::new(1.0);
        input.apply(InputEvent::KeyDown { code: keys::SPACE });
        assert!(input.key_pressed(keys::SPACE));

        input.advance();
        // Still held, but no longer a fresh press.
        assert!(input.key(keys::SPACE));
        assert!(!input.key_pressed(keys::SPACE));
    }

    #[test]
    fn out_of_range_codes_are_ignored() {
        let mut input = InputState::new(1.0);
        input.apply(InputEvent::KeyDown { code: 200 });
        assert!(!input.key(200));

        input.apply(InputEvent::ButtonDown { code: 100 });
        assert!(!input.button(100));
    }

    #[test]
    fn pointer_descales_and_tracks_delta() {
        let mut input = InputState::new(2.0);
        input.apply(InputEvent::PointerMove { x: 100.0, y: 60.0 });
        assert_eq!(input.mouse(), IVec2::new(50, 30));
        assert_eq!(input.mouse_delta(), IVec2::new(50, 30));
        assert!(!input.dragging());

        input.advance();
        input.apply(InputEvent::PointerDrag { x: 110.0, y: 60.0 });
        assert_eq!(input.mouse_delta(), IVec2::new(5, 0));
        assert!(input.dragging());
    }

    #[test]
    fn advance_resets_scroll_and_delta() {
        let mut input = InputState::new(1.0);
        input.apply(InputEvent::Wheel { amount: 3 });
        input.apply(InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert_eq!(input.scroll(), 3);

        input.advance();
        assert_eq!(input.scroll(), 0);
        assert_eq!(input.mouse_delta(), IVec2::ZERO);
        // Position itself persists.
        assert_eq!(input.mouse(), IVec2::new(10, 10));
    }
}
