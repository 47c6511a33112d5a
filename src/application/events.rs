/// Keys the lessons react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    /// Clear the grid
    C,
    /// Randomize the grid
    R,
    /// Single step while paused
    N,
}

/// Input drained from the window once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    MouseDown { x: i32, y: i32 },
    KeyDown(Key),
}

impl InputEvent {
    /// Window close or Escape
    pub const fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }
}
