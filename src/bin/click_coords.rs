//! Shows the pixel coordinate of the last mouse click.

use macroquad::prelude::*;
use grid_lessons::{
    application::{FrameClock, InputEvent},
    domain::{CANVAS_HEIGHT, CANVAS_WIDTH, CellGeometry, ClickState, GRID_LINE, LineEdges, SLATE, WHITE, pixel_label},
    input,
    rendering::{self, TextRenderer, titles},
};

fn window_conf() -> Conf {
    rendering::window_conf(titles::CLICK_COORDS, CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    input::capture_quit();

    let text = TextRenderer::load(20).await;
    let geometry = CellGeometry::default();
    let mut click = ClickState::new();
    let mut clock = FrameClock::default();

    loop {
        let events = input::poll_events();
        if input::wants_quit(&events) {
            break;
        }
        for event in events {
            if let InputEvent::MouseDown { x, y } = event {
                click.record(x, y);
                log::debug!("click at {}", pixel_label(x, y));
            }
        }

        rendering::clear(SLATE);
        rendering::draw_grid_lines(&geometry, LineEdges::Exclusive, GRID_LINE);

        if let Some((x, y)) = click.pixel().filter(|&(x, y)| x >= 0 && y >= 0) {
            text.draw_top_right(&pixel_label(x, y), geometry.width(), WHITE);
        }

        next_frame().await;
        clock.pace();
    }
}
