use std::sync::mpsc::{self, Receiver, Sender};

/// Raw device events pushed by the windowing collaborator.
/// Pointer coordinates are window pixels, before descaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { code: u8 },
    KeyUp { code: u8 },
    ButtonDown { code: u8 },
    ButtonUp { code: u8 },
    /// Pointer moved with no button held.
    PointerMove { x: f32, y: f32 },
    /// Pointer moved while a button was held.
    PointerDrag { x: f32, y: f32 },
    Wheel { amount: i32 },
}

/// Cloneable handle the windowing layer pushes events through.
///
/// Events cross onto the tick thread over a single-consumer channel; the
/// engine drains them at the top of each tick, so engine state is only
/// ever mutated from the tick thread.
#[derive(Clone)]
pub struct InputQueue {
    tx: Sender<InputEvent>,
}

impl InputQueue {
    /// Enqueues one event. Events pushed after the engine has shut down
    /// are discarded.
    pub fn push(&self, event: InputEvent) {
        let _ = self.tx.send(event);
    }
}

/// Creates an input queue and the engine-side receiver.
pub fn channel() -> (InputQueue, Receiver<InputEvent>) {
    let (tx, rx) = mpsc::channel();
    (InputQueue { tx }, rx)
}
