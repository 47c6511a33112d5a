use super::CellGeometry;

/// Last mouse click, overwritten by every new click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickState {
    last: Option<(i32, i32)>,
}

impl ClickState {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub fn record(&mut self, x: i32, y: i32) {
        self.last = Some((x, y));
    }

    /// Last clicked pixel
    pub const fn pixel(&self) -> Option<(i32, i32)> {
        self.last
    }

    /// Last click as (row, col) by plain division; negative results are dropped
    pub fn raw_cell(&self, geometry: &CellGeometry) -> Option<(usize, usize)> {
        let (x, y) = self.last?;
        let (row, col) = geometry.raw_cell(x, y);
        (row >= 0 && col >= 0).then_some((row as usize, col as usize))
    }

    /// Last click as (row, col) when it lies on the grid
    pub fn cell(&self, geometry: &CellGeometry) -> Option<(usize, usize)> {
        let (x, y) = self.last?;
        geometry.pixel_to_cell(x, y)
    }
}

/// `(x, y)` label for the click coordinate lesson
pub fn pixel_label(x: i32, y: i32) -> String {
    format!("({}, {})", x, y)
}

/// `[col=C, row=R]` label for the click-to-cell lessons
pub fn cell_label(row: usize, col: usize) -> String {
    format!("[col={}, row={}]", col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_click_yet() {
        let click = ClickState::new();
        assert_eq!(click.pixel(), None);
        assert_eq!(click.cell(&CellGeometry::default()), None);
    }

    #[test]
    fn test_latest_click_wins() {
        let geo = CellGeometry::default();
        let mut click = ClickState::new();
        click.record(45, 85);
        click.record(125, 5);
        assert_eq!(click.pixel(), Some((125, 5)));
        assert_eq!(click.cell(&geo), Some((0, 3)));
    }

    #[test]
    fn test_raw_cell_ignores_grid_bounds() {
        let geo = CellGeometry::default();
        let mut click = ClickState::new();
        click.record(805, 10);
        assert_eq!(click.cell(&geo), None);
        assert_eq!(click.raw_cell(&geo), Some((0, 20)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(pixel_label(12, 340), "(12, 340)");
        assert_eq!(cell_label(4, 7), "[col=7, row=4]");
    }
}
