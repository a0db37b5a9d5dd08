use macroquad::prelude::*;

use crate::application::SimState;
use crate::domain::Grid;
use crate::ui::{self, PANEL_HEIGHT};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const CANVAS_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// What the status line shows
pub struct Status {
    pub state: SimState,
    pub generation: u64,
    pub population: usize,
    pub dimensions: (usize, usize),
    pub delay_ms: u64,
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{n}")
    }
}

/// Draw live cells and, optionally, the grid lines on top
pub fn draw_grid(grid: &Grid, cell_size: usize, show_grid_lines: bool) {
    let size = cell_size as f32;
    let (rows, cols) = grid.dimensions();
    draw_rectangle(0.0, 0.0, cols as f32 * size, rows as f32 * size, CANVAS_COLOR);

    // Leave a one pixel gap for the lines when they are shown
    let (inset, fill) = if show_grid_lines { (1.0, size - 1.0) } else { (0.0, size) };
    for (row, col) in grid.live_cells() {
        let (x, y) = (col as f32 * size + inset, row as f32 * size + inset);
        draw_rectangle(x, y, fill, fill, ALIVE_COLOR);
    }

    if show_grid_lines {
        let width = cols as f32 * size;
        let height = rows as f32 * size;
        for row in 0..=rows {
            let y = row as f32 * size;
            draw_line(0.0, y, width, y, 1.0, GRID_LINE_COLOR);
        }
        for col in 0..=cols {
            let x = col as f32 * size;
            draw_line(x, 0.0, x, height, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Control panel background and the status line
pub fn draw_panel(canvas_height: f32, status: &Status) {
    let y = ui::panel_y(canvas_height);
    draw_rectangle(0.0, y, screen_width(), PANEL_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    let (state_text, state_color) = match status.state {
        SimState::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
        SimState::Paused => ("Paused", Color::from_rgba(255, 165, 0, 255)),
    };
    let line_y = y + PANEL_HEIGHT - 14.0;
    draw_text(state_text, ui::MARGIN, line_y, 18.0, state_color);

    let (rows, cols) = status.dimensions;
    let details = format!(
        "Generation: {}   Population: {}   Grid: {}x{}   Delay: {} ms",
        status.generation,
        format_number(status.population),
        rows,
        cols,
        status.delay_ms
    );
    draw_text(&details, ui::MARGIN + 90.0, line_y, 16.0, Color::from_rgba(180, 180, 180, 255));
    draw_text(
        "Space: start/pause  C: clear  R: random  N: step  G: grid lines",
        screen_width() - 470.0,
        line_y,
        14.0,
        GRAY,
    );
}
