use super::LifeEngine;

/// A named pattern that can be stamped onto the engine
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Build a pattern from live (row, col) offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Cells that land outside the grid are dropped.
    pub fn place_on(&self, engine: &mut LifeEngine, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            engine.set_alive(row + dr, col + dc, true);
        }
    }

    /// Stamp the pattern centered in the grid
    pub fn place_centered(&self, engine: &mut LifeEngine) {
        let (rows, cols) = engine.dimensions();
        let row = rows.saturating_sub(self.rows) / 2;
        let col = cols.saturating_sub(self.cols) / 2;
        self.place_on(engine, row, col);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves down-right
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - stabilizes after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn pulsar() -> Pattern {
        let mut cells = Vec::with_capacity(48);
        for &r in &[0, 5, 7, 12] {
            for &c in &[2, 3, 4, 8, 9, 10] {
                cells.push((r, c));
                cells.push((c, r));
            }
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
            pulsar(),
            glider_gun(),
        ]
    }
}
