//! Double-buffered Life engine.
//!
//! The engine owns two grids of identical dimensions. One is the current
//! generation, the other is scratch space for the next one; after each step
//! the roles flip by index, so a step never copies a buffer.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Canvas, Cell, Grid, canvas::clamp_cell_size};

/// Fill probability used by the Random control
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.20;

pub struct LifeEngine {
    buffers: [Grid; 2],
    current: usize,
    cell_size: usize,
    canvas: Canvas,
    generation: u64,
}

impl LifeEngine {
    /// Create an all-dead engine laid over `canvas`
    pub fn new(canvas: Canvas, cell_size: usize) -> Self {
        let cell_size = clamp_cell_size(cell_size);
        let (rows, cols) = canvas.grid_dimensions(cell_size);
        Self {
            buffers: [Grid::new(rows, cols), Grid::new(rows, cols)],
            current: 0,
            cell_size,
            canvas,
            generation: 0,
        }
    }

    /// The generation the Shell should render
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.current]
    }

    /// Split into (current, next) without copying
    fn split_buffers(&mut self) -> (&Grid, &mut Grid) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current().dimensions()
    }

    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Completed steps since the last clear/randomize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current().is_alive(row, col)
    }

    /// Flip one cell. Coordinates outside the grid are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if !self.current_mut().toggle(row, col) {
            log::trace!("toggle at ({row}, {col}) outside grid");
        }
    }

    /// Set one cell. Coordinates outside the grid are ignored.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        self.current_mut().set(row, col, Cell::from_alive(alive));
    }

    /// Recompute dimensions for a new cell size and/or canvas, keeping the
    /// overlapping top-left rectangle of the old generation.
    pub fn resize(&mut self, cell_size: usize, canvas_width: usize, canvas_height: usize) {
        let cell_size = clamp_cell_size(cell_size);
        let canvas = Canvas::new(canvas_width, canvas_height);
        if cell_size == self.cell_size && canvas == self.canvas {
            return;
        }

        let (rows, cols) = canvas.grid_dimensions(cell_size);
        let mut fresh = Grid::new(rows, cols);
        fresh.copy_overlap_from(self.current());

        log::info!(
            "resized grid {:?} -> {:?} (cell size {} -> {})",
            self.dimensions(),
            (rows, cols),
            self.cell_size,
            cell_size
        );

        self.buffers = [fresh, Grid::new(rows, cols)];
        self.current = 0;
        self.cell_size = cell_size;
        self.canvas = canvas;
    }

    /// Kill every cell in both buffers
    pub fn clear(&mut self) {
        self.buffers.iter_mut().for_each(Grid::clear);
        self.generation = 0;
    }

    /// Randomize using the thread-local RNG
    pub fn randomize(&mut self, alive_probability: f64) {
        self.randomize_with(alive_probability, &mut rand::rng());
    }

    /// Randomize reproducibly from a seed
    pub fn randomize_seeded(&mut self, alive_probability: f64, seed: u64) {
        self.randomize_with(alive_probability, &mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Each current cell becomes alive independently with `alive_probability`;
    /// the scratch buffer is reset to dead.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, alive_probability: f64, rng: &mut R) {
        let p = if alive_probability.is_nan() { 0.0 } else { alive_probability.clamp(0.0, 1.0) };
        let (rows, cols) = self.dimensions();
        self.buffers[self.current ^ 1].clear();

        let grid = self.current_mut();
        for row in 0..rows {
            for col in 0..cols {
                grid.set(row, col, Cell::from_alive(rng.random::<f64>() < p));
            }
        }
        self.generation = 0;
    }

    /// Advance one generation
    pub fn step(&mut self) {
        let (current, next) = self.split_buffers();
        current.evolve_into(next);
        self.finish_step();
    }

    /// Advance one generation, computing rows in parallel
    pub fn step_parallel(&mut self) {
        let (current, next) = self.split_buffers();
        current.evolve_into_parallel(next);
        self.finish_step();
    }

    fn finish_step(&mut self) {
        self.current ^= 1;
        self.generation += 1;
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new(Canvas::default(), super::DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10×10 grid
    fn small_engine() -> LifeEngine {
        LifeEngine::new(Canvas::new(100, 100), 10)
    }

    fn live(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine.current().live_cells().collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        let mut engine = small_engine();
        engine.step();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut engine = small_engine();
        engine.toggle(5, 5);
        engine.step();
        assert!(!engine.is_alive(5, 5));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut engine = small_engine();
        for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            engine.toggle(r, c);
        }
        for _ in 0..10 {
            engine.step();
        }
        assert_eq!(live(&engine), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut engine = small_engine();
        for c in 4..=6 {
            engine.toggle(5, c);
        }
        engine.step();
        assert_eq!(live(&engine), vec![(4, 5), (5, 5), (6, 5)]);
        engine.step();
        assert_eq!(live(&engine), vec![(5, 4), (5, 5), (5, 6)]);
    }

    #[test]
    fn test_edge_blinker_is_clipped() {
        // Against the top edge the vertical phase loses its top cell
        let mut engine = small_engine();
        for c in 0..=2 {
            engine.toggle(0, c);
        }
        engine.step();
        assert_eq!(live(&engine), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_scratch_buffer_does_not_leak_into_next_step() {
        let mut engine = small_engine();
        for c in 4..=6 {
            engine.toggle(5, c);
        }
        engine.step();
        engine.step();
        engine.step();
        assert_eq!(live(&engine), vec![(4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_step_parallel_matches_step() {
        let mut serial = small_engine();
        serial.randomize_seeded(0.35, 7);
        let mut parallel = small_engine();
        parallel.randomize_seeded(0.35, 7);
        for _ in 0..5 {
            serial.step();
            parallel.step_parallel();
        }
        assert_eq!(serial.current(), parallel.current());
    }

    #[test]
    fn test_randomize_extremes() {
        let mut engine = small_engine();
        engine.randomize_seeded(0.0, 1);
        assert_eq!(engine.population(), 0);
        engine.randomize_seeded(1.0, 1);
        assert_eq!(engine.population(), 100);
    }

    #[test]
    fn test_randomize_clamps_probability() {
        let mut engine = small_engine();
        engine.randomize_seeded(3.0, 1);
        assert_eq!(engine.population(), 100);
        engine.randomize_seeded(-1.0, 1);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_seeded_is_deterministic() {
        let mut a = small_engine();
        let mut b = small_engine();
        a.randomize_seeded(0.2, 42);
        b.randomize_seeded(0.2, 42);
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut engine = small_engine();
        engine.step();
        engine.randomize_seeded(0.5, 3);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_noop() {
        let mut engine = small_engine();
        engine.toggle(10, 0);
        engine.toggle(0, 99);
        assert_eq!(engine.population(), 0);
        engine.toggle(9, 9);
        assert!(engine.is_alive(9, 9));
        engine.toggle(9, 9);
        assert!(!engine.is_alive(9, 9));
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut engine = small_engine();
        engine.randomize_seeded(1.0, 0);
        engine.clear();
        let (rows, cols) = engine.dimensions();
        for r in 0..rows {
            for c in 0..cols {
                assert!(!engine.is_alive(r, c));
            }
        }
    }

    #[test]
    fn test_resize_shrink_keeps_overlap() {
        let mut engine = small_engine();
        engine.toggle(0, 0);
        engine.toggle(7, 7);
        engine.resize(20, 100, 100);
        assert_eq!(engine.dimensions(), (5, 5));
        assert_eq!(live(&engine), vec![(0, 0)]);
    }

    #[test]
    fn test_resize_grow_leaves_new_cells_dead() {
        let mut engine = small_engine();
        engine.toggle(0, 0);
        engine.resize(5, 100, 100);
        assert_eq!(engine.dimensions(), (20, 20));
        assert_eq!(live(&engine), vec![(0, 0)]);
    }

    #[test]
    fn test_resize_clamps_cell_size() {
        let mut engine = small_engine();
        engine.resize(1, 100, 100);
        assert_eq!(engine.cell_size(), 2);
        assert_eq!(engine.dimensions(), (50, 50));
        engine.resize(500, 100, 100);
        assert_eq!(engine.cell_size(), 50);
        assert_eq!(engine.dimensions(), (2, 2));
    }

    #[test]
    fn test_resize_then_step_uses_fresh_scratch() {
        let mut engine = small_engine();
        for c in 4..=6 {
            engine.toggle(5, c);
        }
        engine.step();
        engine.resize(5, 100, 100);
        engine.step();
        assert_eq!(live(&engine), vec![(5, 4), (5, 5), (5, 6)]);
    }
}
