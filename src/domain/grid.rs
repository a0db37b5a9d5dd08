use super::Cell;
use rayon::prelude::*;

/// A single rows × cols buffer of cells, stored row-major.
/// Cells outside the grid read as dead; there is no wraparound.
#[derive(Clone, Debug, PartialEq)]
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

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out of bounds is ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position. Returns false when out of bounds.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cells among the 8 Moore neighbors; off-grid neighbors count as dead
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        row_range
            .flat_map(|r| {
                let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
                col_range.map(move |c| (r, c))
            })
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Copy the rectangle shared by both grids from `other` at the same
    /// coordinates. Cells of `self` outside the overlap are left untouched.
    pub fn copy_overlap_from(&mut self, other: &Grid) {
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        for row in 0..rows {
            let src = other.index(row, 0);
            let dst = self.index(row, 0);
            self.cells[dst..dst + cols].copy_from_slice(&other.cells[src..src + cols]);
        }
    }

    /// Write the next generation of `self` into `next`.
    /// Every cell reads the same snapshot, so `next` must be a different buffer.
    pub fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.cols == 0 {
            return;
        }
        next.cells
            .chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| self.evolve_row(row, out));
    }

    /// Parallel variant of `evolve_into`, one rayon task per row
    pub fn evolve_into_parallel(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.cols == 0 {
            return;
        }
        next.cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| self.evolve_row(row, out));
    }

    fn evolve_row(&self, row: usize, out: &mut [Cell]) {
        for (col, slot) in out.iter_mut().enumerate() {
            let current = self.cells[self.index(row, col)];
            *slot = current.evolve(self.count_live_neighbors(row, col));
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Iterate over the positions of live cells only
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_dead() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.get(3, 0), None);
        assert!(!grid.is_alive(0, 3));
    }

    #[test]
    fn test_toggle_reports_bounds() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.toggle(1, 2));
        assert!(grid.is_alive(1, 2));
        assert!(!grid.toggle(5, 5));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 1, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
        assert_eq!(grid.count_live_neighbors(4, 3), 1);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let mut grid = Grid::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_copy_overlap_shrinks_and_grows() {
        let mut big = Grid::new(4, 4);
        big.set(0, 0, Cell::Alive);
        big.set(3, 3, Cell::Alive);

        let mut small = Grid::new(2, 2);
        small.copy_overlap_from(&big);
        assert_eq!(small.live_cells().collect::<Vec<_>>(), vec![(0, 0)]);

        let mut wide = Grid::new(2, 8);
        wide.copy_overlap_from(&big);
        assert_eq!(wide.live_cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(16, 12);
        for (row, col) in [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (8, 8), (8, 9), (8, 10)] {
            grid.set(row, col, Cell::Alive);
        }
        let mut serial = Grid::new(16, 12);
        let mut parallel = Grid::new(16, 12);
        grid.evolve_into(&mut serial);
        grid.evolve_into_parallel(&mut parallel);
        assert_eq!(serial, parallel);
    }
}
