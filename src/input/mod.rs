use macroquad::prelude::*;

use crate::application::{InputEvent, Key};

const KEYS: [(KeyCode, Key); 5] = [
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Space, Key::Space),
    (KeyCode::C, Key::C),
    (KeyCode::R, Key::R),
    (KeyCode::N, Key::N),
];

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Route window close through `poll_events` instead of exiting immediately
pub fn capture_quit() {
    prevent_quit();
}

/// Drain this frame's input into events
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    if BUTTONS.iter().any(|&button| is_mouse_button_pressed(button)) {
        let (x, y) = mouse_position();
        events.push(InputEvent::MouseDown {
            x: x.floor() as i32,
            y: y.floor() as i32,
        });
    }

    events.extend(
        KEYS.iter()
            .filter(|(code, _)| is_key_pressed(*code))
            .map(|&(_, key)| InputEvent::KeyDown(key)),
    );

    events
}

/// True when any event asks the window to close
pub fn wants_quit(events: &[InputEvent]) -> bool {
    events.iter().any(InputEvent::is_quit)
}
