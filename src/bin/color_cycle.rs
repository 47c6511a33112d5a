//! Draw order: background, then grid, then shape, each with its own colour.

use macroquad::prelude::*;
use grid_lessons::{
    application::FrameClock,
    domain::{BouncingRect, CANVAS_HEIGHT, CANVAS_WIDTH, CellGeometry, ColorCycle, LineEdges, YELLOW},
    input,
    rendering::{self, titles},
};

fn window_conf() -> Conf {
    rendering::window_conf(titles::COLOR_CYCLE, CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    input::capture_quit();

    let geometry = CellGeometry::default();
    let cycle = ColorCycle::default();
    let mut rect = BouncingRect::default();
    let mut clock = FrameClock::default();

    loop {
        if input::wants_quit(&input::poll_events()) {
            break;
        }

        // 1. Background, slowly changing
        let background = cycle.at(clock.frame());
        rendering::clear(background);

        // 2. Grid in the complementary colour
        rendering::draw_grid_lines(&geometry, LineEdges::Exclusive, background.complement());

        // 3. Shape, drawn last so it sits on top
        rendering::fill_rect(&rect, YELLOW);
        rect.step(geometry.width(), geometry.height());

        next_frame().await;
        clock.pace();
    }

    log::info!("closed after {} frames", clock.frame());
}
