pub mod queue;
pub mod state;

pub use queue::{channel, InputEvent, InputQueue};
pub use state::{InputState, BUTTON_COUNT, KEY_COUNT};
