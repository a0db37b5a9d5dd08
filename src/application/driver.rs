//! Simulation driver: run/pause state plus the background ticker.
//!
//! The engine lives behind a mutex shared with a single ticker thread. While
//! running, the ticker steps the engine, posts a `Redraw` message, then waits
//! `delay_ms` (or until paused). The redraw channel holds a single message, so
//! ticks the Shell has not caught up with collapse into one repaint. The run
//! flag is checked once per tick and again after the engine lock is taken, so
//! a pause never cuts a step short and no step starts after a pause has been
//! observed by the lock holder.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::LifeEngine;

/// Default wait between generations
pub const DEFAULT_DELAY_MS: u64 = 100;

/// "State may have changed, repaint"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redraw;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Paused,
    Running,
}

/// Parse a delay typed by the user. Only integers >= 0 are accepted;
/// anything else yields None and the caller keeps its previous delay.
pub fn parse_delay(text: &str) -> Option<u64> {
    text.trim().parse::<i64>().ok().and_then(|ms| u64::try_from(ms).ok())
}

/// State shared between the driver and its ticker thread
struct Shared {
    engine: Mutex<LifeEngine>,
    running: AtomicBool,
    delay_ms: AtomicU64,
    /// Wakes a ticker sleeping between steps when the run flag drops
    wake: (Mutex<()>, Condvar),
}

impl Shared {
    fn lock_engine(&self) -> MutexGuard<'_, LifeEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn set_running(&self, running: bool) {
        let (lock, cvar) = &self.wake;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.running.store(running, Ordering::Release);
        cvar.notify_all();
    }

    /// Sleep for the current delay, returning early if paused
    fn wait_for_next_tick(&self) {
        let delay = Duration::from_millis(self.delay_ms.load(Ordering::Relaxed));
        if delay.is_zero() {
            thread::yield_now();
            return;
        }
        let (lock, cvar) = &self.wake;
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = cvar
            .wait_timeout_while(guard, delay, |_| self.is_running())
            .unwrap_or_else(PoisonError::into_inner);
    }
}

/// Handle owned by the Shell for controlling the simulation
pub struct SimulationDriver {
    shared: Arc<Shared>,
    ticker: Option<JoinHandle<()>>,
    /// Holds at most one pending redraw; further ones coalesce into it
    redraw_tx: SyncSender<Redraw>,
    redraw_rx: Receiver<Redraw>,
}

impl SimulationDriver {
    pub fn new(engine: LifeEngine) -> Self {
        Self::with_delay(engine, DEFAULT_DELAY_MS)
    }

    pub fn with_delay(engine: LifeEngine, delay_ms: u64) -> Self {
        let (redraw_tx, redraw_rx) = mpsc::sync_channel(1);
        Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                running: AtomicBool::new(false),
                delay_ms: AtomicU64::new(delay_ms),
                wake: (Mutex::new(()), Condvar::new()),
            }),
            ticker: None,
            redraw_tx,
            redraw_rx,
        }
    }

    /// Exclusive access to the engine. Hold it briefly: the ticker
    /// cannot step while the guard is alive.
    pub fn lock_engine(&self) -> MutexGuard<'_, LifeEngine> {
        self.shared.lock_engine()
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    pub fn state(&self) -> SimState {
        if self.is_running() { SimState::Running } else { SimState::Paused }
    }

    pub fn delay_ms(&self) -> u64 {
        self.shared.delay_ms.load(Ordering::Relaxed)
    }

    /// Change the tick interval. Negative values are ignored.
    pub fn set_delay(&self, ms: i64) {
        match u64::try_from(ms) {
            Ok(ms) => {
                self.shared.delay_ms.store(ms, Ordering::Relaxed);
                log::debug!("delay set to {ms} ms");
            }
            Err(_) => log::warn!("ignoring negative delay {ms}, keeping {} ms", self.delay_ms()),
        }
    }

    /// Paused -> Running. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        // A previous loop must be fully gone before a new one starts
        self.join_ticker();

        self.shared.set_running(true);
        let shared = Arc::clone(&self.shared);
        let redraw_tx = self.redraw_tx.clone();
        let spawned = thread::Builder::new()
            .name("life-ticker".into())
            .spawn(move || run_ticker(shared, redraw_tx));

        match spawned {
            Ok(handle) => {
                self.ticker = Some(handle);
                log::info!("simulation started ({} ms delay)", self.delay_ms());
            }
            Err(err) => {
                self.shared.set_running(false);
                log::error!("failed to spawn ticker thread: {err}");
            }
        }
    }

    /// Running -> Paused. Takes effect at the next tick boundary.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.shared.set_running(false);
        log::info!("simulation paused at generation {}", self.lock_engine().generation());
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() { self.pause() } else { self.start() }
    }

    /// Pause, then kill every cell. Stays paused.
    pub fn clear(&mut self) {
        self.pause();
        self.lock_engine().clear();
        log::info!("grid cleared");
        self.request_redraw();
    }

    /// Pause, then refill at random. Stays paused.
    pub fn randomize(&mut self, alive_probability: f64) {
        self.pause();
        self.lock_engine().randomize(alive_probability);
        log::info!("grid randomized (p = {alive_probability})");
        self.request_redraw();
    }

    /// Pause, then refill from a seed. Stays paused.
    pub fn randomize_seeded(&mut self, alive_probability: f64, seed: u64) {
        self.pause();
        self.lock_engine().randomize_seeded(alive_probability, seed);
        log::info!("grid randomized (p = {alive_probability}, seed = {seed})");
        self.request_redraw();
    }

    /// Change the cell size, keeping the overlapping content.
    /// A running simulation is paused for the resize and resumed after.
    pub fn resize_cells(&mut self, cell_size: usize) {
        let was_running = self.is_running();
        self.pause();
        {
            let mut engine = self.lock_engine();
            let canvas = engine.canvas();
            engine.resize(cell_size, canvas.width, canvas.height);
        }
        if was_running {
            self.start();
        } else {
            self.request_redraw();
        }
    }

    /// Advance exactly one generation. Ignored while running.
    pub fn step_once(&self) {
        if self.is_running() {
            return;
        }
        self.lock_engine().step();
        self.request_redraw();
    }

    /// Drain pending redraw messages; true if any arrived
    pub fn take_redraw(&self) -> bool {
        let mut pending = false;
        loop {
            match self.redraw_rx.try_recv() {
                Ok(Redraw) => pending = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        pending
    }

    fn request_redraw(&self) {
        // Full means a redraw is already pending
        let _ = self.redraw_tx.try_send(Redraw);
    }

    fn join_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            if handle.join().is_err() {
                log::error!("ticker thread panicked");
            }
        }
    }
}

impl Drop for SimulationDriver {
    fn drop(&mut self) {
        self.shared.set_running(false);
        self.join_ticker();
    }
}

/// Ticker loop, one per `start`
fn run_ticker(shared: Arc<Shared>, redraw_tx: SyncSender<Redraw>) {
    log::debug!("ticker started");
    while shared.is_running() {
        {
            let mut engine = shared.lock_engine();
            if !shared.is_running() {
                break;
            }
            engine.step();
            log::trace!("generation {}", engine.generation());
        }
        if let Err(TrySendError::Disconnected(_)) = redraw_tx.try_send(Redraw) {
            break;
        }
        shared.wait_for_next_tick();
    }
    log::debug!("ticker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Canvas;
    use std::time::Instant;

    fn driver(delay_ms: u64) -> SimulationDriver {
        SimulationDriver::with_delay(LifeEngine::new(Canvas::new(100, 100), 10), delay_ms)
    }

    fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("250"), Some(250));
        assert_eq!(parse_delay(" 0 "), Some(0));
        assert_eq!(parse_delay("-5"), None);
        assert_eq!(parse_delay("fast"), None);
        assert_eq!(parse_delay(""), None);
    }

    #[test]
    fn test_negative_delay_keeps_previous() {
        let driver = driver(100);
        driver.set_delay(-1);
        assert_eq!(driver.delay_ms(), 100);
        driver.set_delay(0);
        assert_eq!(driver.delay_ms(), 0);
    }

    #[test]
    fn test_starts_paused() {
        let driver = driver(10);
        assert_eq!(driver.state(), SimState::Paused);
        assert!(!driver.take_redraw());
    }

    #[test]
    fn test_running_steps_and_signals_redraw() {
        let mut driver = driver(1);
        driver.start();
        assert!(driver.is_running());
        assert!(wait_until(|| driver.lock_engine().generation() >= 3));
        driver.pause();
        assert!(driver.take_redraw());
        assert_eq!(driver.state(), SimState::Paused);
    }

    #[test]
    fn test_redraws_coalesce_while_undrained() {
        let mut driver = driver(0);
        driver.start();
        assert!(wait_until(|| driver.lock_engine().generation() >= 50));
        driver.pause();
        driver.join_ticker();
        driver.step_once();
        // Fifty ticks and a step, none drained, leave a single message
        assert_eq!(driver.redraw_rx.try_iter().count(), 1);
        assert!(!driver.take_redraw());
    }

    #[test]
    fn test_pause_stops_stepping() {
        let mut driver = driver(0);
        driver.start();
        assert!(wait_until(|| driver.lock_engine().generation() >= 1));
        driver.pause();
        // Clear takes the lock after the pause, so no step can follow it
        driver.clear();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(driver.lock_engine().generation(), 0);
    }

    #[test]
    fn test_pause_interrupts_long_wait() {
        let mut driver = driver(60_000);
        driver.start();
        assert!(wait_until(|| driver.lock_engine().generation() == 1));
        let started = Instant::now();
        driver.pause();
        driver.start();
        assert!(started.elapsed() < Duration::from_secs(5));
        driver.pause();
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut driver = driver(5);
        driver.pause();
        assert!(!driver.is_running());
        driver.start();
        driver.start();
        assert!(driver.is_running());
        driver.pause();
        driver.pause();
        assert!(!driver.is_running());
    }

    #[test]
    fn test_randomize_forces_pause() {
        let mut driver = driver(1);
        driver.start();
        driver.randomize_seeded(1.0, 9);
        assert!(!driver.is_running());
        assert_eq!(driver.lock_engine().population(), 100);
        assert_eq!(driver.lock_engine().generation(), 0);
    }

    #[test]
    fn test_resize_resumes_when_running() {
        let mut driver = driver(1);
        driver.lock_engine().toggle(0, 0);
        driver.resize_cells(5);
        assert!(!driver.is_running());
        assert_eq!(driver.lock_engine().dimensions(), (20, 20));
        assert!(driver.lock_engine().is_alive(0, 0));

        driver.start();
        driver.resize_cells(20);
        assert!(driver.is_running());
        driver.pause();
        assert_eq!(driver.lock_engine().dimensions(), (5, 5));
    }

    #[test]
    fn test_step_once_only_when_paused() {
        let mut driver = driver(60_000);
        driver.step_once();
        assert_eq!(driver.lock_engine().generation(), 1);
        assert!(driver.take_redraw());

        driver.start();
        assert!(wait_until(|| driver.lock_engine().generation() == 2));
        driver.step_once();
        assert_eq!(driver.lock_engine().generation(), 2);
        driver.pause();
    }
}
