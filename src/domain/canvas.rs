use serde::{Deserialize, Serialize};

pub const MIN_CELL_SIZE: usize = 2;
pub const MAX_CELL_SIZE: usize = 50;
pub const DEFAULT_CELL_SIZE: usize = 10;

/// Clamp a requested cell edge length into `MIN_CELL_SIZE..=MAX_CELL_SIZE`.
/// Out-of-range requests are corrected, never rejected.
pub fn clamp_cell_size(requested: usize) -> usize {
    let clamped = requested.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
    if clamped != requested {
        log::warn!("cell size {requested} out of range, using {clamped}");
    }
    clamped
}

/// Logical drawing surface the grid is laid over
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Grid (rows, cols) for a given cell size, never smaller than 1×1
    pub fn grid_dimensions(&self, cell_size: usize) -> (usize, usize) {
        let cell_size = cell_size.max(1);
        ((self.height / cell_size).max(1), (self.width / cell_size).max(1))
    }

    /// Map a pixel position to a (row, col) pair. Negative positions map to
    /// None; positions past the edge are returned as-is for the engine to ignore.
    pub fn cell_at(x: f32, y: f32, cell_size: usize) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || cell_size == 0 {
            return None;
        }
        Some((y as usize / cell_size, x as usize / cell_size))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1400, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_dimensions() {
        let canvas = Canvas::default();
        assert_eq!(canvas.grid_dimensions(10), (80, 140));
        assert_eq!(canvas.grid_dimensions(3), (266, 466));
    }

    #[test]
    fn test_tiny_canvas_keeps_one_cell() {
        let canvas = Canvas::new(10, 10);
        assert_eq!(canvas.grid_dimensions(50), (1, 1));
    }

    #[test]
    fn test_clamp_cell_size() {
        assert_eq!(clamp_cell_size(0), MIN_CELL_SIZE);
        assert_eq!(clamp_cell_size(1000), MAX_CELL_SIZE);
        assert_eq!(clamp_cell_size(17), 17);
    }

    #[test]
    fn test_pixel_to_cell() {
        assert_eq!(Canvas::cell_at(25.0, 9.0, 10), Some((0, 2)));
        assert_eq!(Canvas::cell_at(-1.0, 9.0, 10), None);
        assert_eq!(Canvas::cell_at(5000.0, 5000.0, 10), Some((500, 500)));
    }
}
