use super::{Cell, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Cell count above which `evolve_auto` switches to the rayon path
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Grid is a row-major matrix of cells addressed by (row, col).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-range indices are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Toggle the cell at position, returning its new state.
    /// Returns None and leaves the grid untouched when out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.get_index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors using toroidal wrapping
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let r = self.rows as i64;
        let c = self.cols as i64;

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let nr = (row as i64 + dr).rem_euclid(r) as usize;
                let nc = (col as i64 + dc).rem_euclid(c) as usize;
                self.cells[self.get_index(nr, nc)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize, rule: &dyn Rule) -> Cell {
        let (row, col) = (idx / self.cols, idx % self.cols);
        rule.evolve(self.cells[idx], self.count_live_neighbors(row, col))
    }

    /// Compute the next generation serially
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.cells.len())
            .map(|idx| self.next_cell(idx, rule))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Compute the next generation with rayon
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx, rule))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Pick the serial or parallel path depending on grid size
    pub fn evolve_auto(&self, rule: &dyn Rule) -> Self {
        if self.cells.len() > PARALLEL_THRESHOLD {
            self.evolve_parallel(rule)
        } else {
            self.evolve(rule)
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize grid, each cell alive with the given probability
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, alive_chance: f64) {
        let p = alive_chance.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(p)));
    }

    /// Iterate over live cells as (row, col)
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::ConwayRule;
    use rand::{SeedableRng, rngs::StdRng};

    fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut grid = Grid::new(15, 20);
        let before = grid.clone();
        assert_eq!(grid.toggle(3, 7), Some(Cell::Alive));
        assert_eq!(grid.toggle(3, 7), Some(Cell::Dead));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut grid = with_alive(15, 20, &[(0, 0)]);
        let before = grid.clone();
        assert_eq!(grid.toggle(15, 0), None);
        assert_eq!(grid.toggle(0, 20), None);
        grid.set(100, 100, Cell::Alive);
        assert_eq!(grid, before);
        assert_eq!(grid.get(15, 20), None);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = horizontal.evolve(&ConwayRule);
        let expected = with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(vertical, expected);
        assert_eq!(vertical.evolve(&ConwayRule), horizontal);
    }

    #[test]
    fn test_block_is_still() {
        let block = with_alive(6, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(block.evolve(&ConwayRule), block);
    }

    #[test]
    fn test_neighbors_wrap_around_edges() {
        // Blinker straddling the left/right edge still oscillates
        let grid = with_alive(5, 5, &[(2, 4), (2, 0), (2, 1)]);
        let next = grid.evolve(&ConwayRule);
        assert_eq!(next, with_alive(5, 5, &[(1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(40, 60);
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(grid.evolve(&ConwayRule), grid.evolve_parallel(&ConwayRule));
    }

    #[test]
    fn test_randomize_and_clear() {
        let mut grid = Grid::new(15, 20);
        grid.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(grid.population(), 300);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.alive_cells().count(), 0);
    }

    #[test]
    fn test_alive_cells_are_row_major() {
        let grid = with_alive(3, 4, &[(2, 1), (0, 3)]);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 3), (2, 1)]);
    }
}
