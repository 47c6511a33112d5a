mod events;
mod frame_clock;
mod game_state;

pub use events::{InputEvent, Key};
pub use frame_clock::{FrameClock, LESSON_FRAME_DELAY};
pub use game_state::GameState;
