// Domain layer - Life rule, grids, engine
pub mod domain;

// Application layer - run/pause driver and ticker
pub mod application;

pub mod config;

// Presentation shell - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Canvas, Cell, Grid, LifeEngine, Pattern, presets};
pub use application::{Redraw, SimState, SimulationDriver};
pub use config::Settings;
