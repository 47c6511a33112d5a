//! Converts a click into (row, col) and highlights that cell.

use macroquad::prelude::*;
use grid_lessons::{
    application::{FrameClock, InputEvent},
    domain::{CANVAS_HEIGHT, CANVAS_WIDTH, CellGeometry, ClickState, GRID_LINE, HIGHLIGHT, LineEdges, SLATE, WHITE, cell_label},
    input,
    rendering::{self, TextRenderer, titles},
};

fn window_conf() -> Conf {
    rendering::window_conf(titles::CLICK_TO_CELL, CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    input::capture_quit();

    let text = TextRenderer::load(20).await;
    let geometry = CellGeometry::default();
    let mut click = ClickState::new();
    let mut clock = FrameClock::default();

    log::info!("{} cols x {} rows", geometry.cols(), geometry.rows());

    loop {
        let events = input::poll_events();
        if input::wants_quit(&events) {
            break;
        }
        for event in events {
            if let InputEvent::MouseDown { x, y } = event {
                click.record(x, y);
            }
        }

        rendering::clear(SLATE);
        rendering::draw_grid_lines(&geometry, LineEdges::Inclusive, GRID_LINE);

        if let Some((row, col)) = click.raw_cell(&geometry) {
            rendering::fill_cell(&geometry, row, col, HIGHLIGHT);
            text.draw_top_right(&cell_label(row, col), geometry.width(), WHITE);
        }

        next_frame().await;
        clock.pace();
    }
}
