//! Step timing on the default canvas, serial vs rayon rows

use std::time::Instant;
use life_canvas::{Canvas, LifeEngine, domain::{MAX_CELL_SIZE, MIN_CELL_SIZE}};

const SEED: u64 = 2024;

fn seeded_engine(cell_size: usize) -> LifeEngine {
    let mut engine = LifeEngine::new(Canvas::default(), cell_size);
    engine.randomize_seeded(0.2, SEED);
    engine
}

/// Milliseconds per generation
fn benchmark(cell_size: usize, iterations: u32, step: fn(&mut LifeEngine)) -> f64 {
    let mut engine = seeded_engine(cell_size);
    let start = Instant::now();
    for _ in 0..iterations {
        step(&mut engine);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Step Benchmark (canvas {:?}) ===\n", Canvas::default());

    let cell_sizes = [MAX_CELL_SIZE, 20, 10, 5, 3, MIN_CELL_SIZE];
    let iterations = 50;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Cell", "Grid", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for cell_size in cell_sizes {
        let (rows, cols) = Canvas::default().grid_dimensions(cell_size);
        let serial_ms = benchmark(cell_size, iterations, LifeEngine::step);
        let parallel_ms = benchmark(cell_size, iterations, LifeEngine::step_parallel);

        println!(
            "{:>10} {:>12} {:>12.3} {:>12.3} {:>9.1}x",
            cell_size,
            format!("{rows}x{cols}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    // Both paths must agree generation for generation
    let mut serial = seeded_engine(MIN_CELL_SIZE);
    let mut parallel = seeded_engine(MIN_CELL_SIZE);
    for _ in 0..iterations {
        serial.step();
        parallel.step_parallel();
    }
    println!(
        "\nAfter {} generations: serial population {}, parallel population {}, identical: {}",
        iterations,
        serial.population(),
        parallel.population(),
        serial.current() == parallel.current()
    );
}
