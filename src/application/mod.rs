mod driver;

pub use driver::{DEFAULT_DELAY_MS, Redraw, SimState, SimulationDriver, parse_delay};
