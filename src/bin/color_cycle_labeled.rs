//! Color cycle with a text label beside each draw stage.

use macroquad::prelude::*;
use grid_lessons::{
    application::FrameClock,
    domain::{BouncingRect, CANVAS_HEIGHT, CANVAS_WIDTH, CellGeometry, ColorCycle, LineEdges, RED, SALMON, WHITE, YELLOW},
    input,
    rendering::{self, TextRenderer, titles},
};

fn window_conf() -> Conf {
    rendering::window_conf(titles::COLOR_CYCLE_LABELED, CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    input::capture_quit();

    let text = TextRenderer::load(24).await;
    let geometry = CellGeometry::default();
    let cycle = ColorCycle::default();
    // Static here, only the colours move
    let rect = BouncingRect::default();
    let mut clock = FrameClock::default();

    loop {
        if input::wants_quit(&input::poll_events()) {
            break;
        }

        let background = cycle.at(clock.frame());
        rendering::clear(background);
        text.draw("BACKGROUND", 20.0, 20.0, WHITE);

        rendering::draw_grid_lines(&geometry, LineEdges::Exclusive, background.complement());
        text.draw("GRID", 20.0, 60.0, YELLOW);

        rendering::fill_rect(&rect, RED);
        text.draw("SHAPE", 20.0, 100.0, SALMON);

        next_frame().await;
        clock.pace();
    }
}
