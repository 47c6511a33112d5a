//! Editable grid: each click flips the cell under the cursor.

use macroquad::prelude::*;
use grid_lessons::{
    application::{FrameClock, InputEvent},
    domain::{AMBER, CANVAS_HEIGHT, CANVAS_WIDTH, CellGeometry, ClickState, GRID_LINE, Grid, LineEdges, SLATE, WHITE, cell_label},
    input,
    rendering::{self, TextRenderer, titles},
};

fn window_conf() -> Conf {
    rendering::window_conf(titles::CLICK_TO_TOGGLE, CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    input::capture_quit();

    let text = TextRenderer::load(20).await;
    let geometry = CellGeometry::default();
    let mut grid = Grid::new(geometry.rows(), geometry.cols());
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
                if let Some((row, col)) = click.cell(&geometry) {
                    grid.toggle(row, col);
                }
            }
        }

        rendering::clear(SLATE);

        // Live cells before grid lines so the lines stay crisp
        rendering::draw_alive_cells(&grid, &geometry, AMBER);
        rendering::draw_grid_lines(&geometry, LineEdges::Inclusive, GRID_LINE);

        if let Some((row, col)) = click.cell(&geometry) {
            if let Some(cell) = grid.get(row, col) {
                let label = format!("{} {}", cell_label(row, col), cell.label());
                text.draw_top_right(&label, geometry.width(), WHITE);
            }
        }

        next_frame().await;
        clock.pace();
    }
}
