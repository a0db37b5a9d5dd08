mod canvas;
mod cell;
mod engine;
mod grid;
mod patterns;

pub use canvas::{Canvas, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE, clamp_cell_size};
pub use cell::Cell;
pub use engine::{DEFAULT_ALIVE_PROBABILITY, LifeEngine};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
