//! Pixel <-> cell arithmetic for a canvas split into square cells.

/// Default canvas width in pixels
pub const CANVAS_WIDTH: i32 = 800;
/// Default canvas height in pixels
pub const CANVAS_HEIGHT: i32 = 600;
/// Default cell edge in pixels
pub const CELL_SIZE: i32 = 40;

/// Whether grid lines include the line on the far canvas edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEdges {
    /// `0, cell, ...` while `< extent`
    Exclusive,
    /// `0, cell, ...` while `<= extent`
    Inclusive,
}

/// Canvas split into `cols x rows` cells of `cell_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl CellGeometry {
    /// `cell_size` must be positive
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        debug_assert!(cell_size > 0);
        Self { width, height, cell_size }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of whole columns
    pub const fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Number of whole rows
    pub const fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// Plain integer division, no bounds check
    pub const fn raw_cell(&self, x: i32, y: i32) -> (i32, i32) {
        (y / self.cell_size, x / self.cell_size)
    }

    /// Map a pixel to (row, col), or None when it falls outside the grid
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (row, col) = self.raw_cell(x, y);
        let (row, col) = (row as usize, col as usize);
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }

    /// Top-left pixel of a cell
    pub const fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (col as i32 * self.cell_size, row as i32 * self.cell_size)
    }

    /// X positions of vertical grid lines
    pub fn vertical_lines(&self, edges: LineEdges) -> impl Iterator<Item = i32> {
        Self::line_positions(self.width, self.cell_size, edges)
    }

    /// Y positions of horizontal grid lines
    pub fn horizontal_lines(&self, edges: LineEdges) -> impl Iterator<Item = i32> {
        Self::line_positions(self.height, self.cell_size, edges)
    }

    fn line_positions(extent: i32, step: i32, edges: LineEdges) -> impl Iterator<Item = i32> {
        let last = match edges {
            LineEdges::Exclusive => extent - 1,
            LineEdges::Inclusive => extent,
        };
        (0..=last.max(-1)).step_by(step as usize)
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, CELL_SIZE)
    }
}
