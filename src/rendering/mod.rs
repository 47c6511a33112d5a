use macroquad::prelude::*;

use crate::domain::{BouncingRect, CellGeometry, Grid, LineEdges, Rgba};

mod text;

pub use text::{FONT_CANDIDATES, TextRenderer};

/// Window titles of the lesson binaries
pub mod titles {
    pub const COLOR_CYCLE: &str = "SDL2 Color Cycle Demo";
    pub const COLOR_CYCLE_LABELED: &str = "SDL2 Color Cycle Demo (Labeled)";
    pub const CLICK_COORDS: &str = "Click Coordinate Demo";
    pub const CLICK_TO_CELL: &str = "Click to Cell Demo";
    pub const CLICK_TO_TOGGLE: &str = "Click-to-Toggle Grid";
}

/// Window settings shared by every lesson: fixed size, not resizable
pub fn window_conf(title: &str, width: i32, height: i32) -> Conf {
    Conf {
        window_title: title.to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

pub fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Fill the whole frame
pub fn clear(color: Rgba) {
    clear_background(to_color(color));
}

/// Draw vertical then horizontal lines every cell
pub fn draw_grid_lines(geometry: &CellGeometry, edges: LineEdges, color: Rgba) {
    let color = to_color(color);
    let (w, h) = (geometry.width() as f32, geometry.height() as f32);

    for x in geometry.vertical_lines(edges) {
        draw_line(x as f32, 0.0, x as f32, h, 1.0, color);
    }
    for y in geometry.horizontal_lines(edges) {
        draw_line(0.0, y as f32, w, y as f32, 1.0, color);
    }
}

/// Fill one cell; (row, col) may lie past the grid for the click lessons
pub fn fill_cell(geometry: &CellGeometry, row: usize, col: usize, color: Rgba) {
    let (x, y) = geometry.cell_origin(row, col);
    let size = geometry.cell_size() as f32;
    draw_rectangle(x as f32, y as f32, size, size, to_color(color));
}

/// Fill every live cell
pub fn draw_alive_cells(grid: &Grid, geometry: &CellGeometry, color: Rgba) {
    grid.alive_cells()
        .for_each(|(row, col)| fill_cell(geometry, row, col, color));
}

pub fn fill_rect(rect: &BouncingRect, color: Rgba) {
    draw_rectangle(
        rect.x as f32,
        rect.y as f32,
        rect.w as f32,
        rect.h as f32,
        to_color(color),
    );
}
