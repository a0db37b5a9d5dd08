use macroquad::prelude::*;
use life_canvas::{
    Grid, LifeEngine, Pattern, Settings, SimulationDriver, presets,
    application::parse_delay,
    domain::{MAX_CELL_SIZE, MIN_CELL_SIZE},
    input::{self, Action},
    rendering::{self, Status},
    ui::{self, Checkbox, Dropdown, NumberField, Spinner, PANEL_HEIGHT},
};

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: settings.canvas.width as i32,
        window_height: (settings.canvas.height as f32 + PANEL_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Panel widgets other than the buttons
struct Controls {
    delay: NumberField,
    cell_size: Spinner,
    grid_lines: Checkbox,
    pattern: Dropdown,
    patterns: Vec<Pattern>,
    /// Where the selected pattern's description is written
    description_at: (f32, f32),
}

impl Controls {
    fn new(settings: &Settings, canvas_height: f32) -> Self {
        let y = ui::panel_y(canvas_height) + 22.0;
        let patterns = presets::all_patterns();
        let names = patterns.iter().map(|p| p.name.to_string()).collect();
        Self {
            delay: NumberField::new(400.0, y, 90.0, "Delay (ms)", settings.delay_ms),
            cell_size: Spinner::new(
                520.0,
                y,
                "Cell size",
                settings.cell_size,
                MIN_CELL_SIZE,
                MAX_CELL_SIZE,
            ),
            grid_lines: Checkbox::new(660.0, y + 4.0, "Show grid lines", settings.show_grid_lines),
            pattern: Dropdown::new(850.0, y, 200.0, "Stamp pattern", names),
            patterns,
            description_at: (1062.0, y + 19.0),
        }
    }

    fn selected_pattern(&self) -> Option<&Pattern> {
        self.patterns.get(self.pattern.selected())
    }

    fn draw(&self, mouse_pos: (f32, f32)) {
        self.delay.draw();
        self.cell_size.draw(mouse_pos);
        self.grid_lines.draw();
        if let Some(pattern) = self.selected_pattern() {
            let (x, y) = self.description_at;
            draw_text(pattern.description, x, y, 14.0, GRAY);
        }
        self.pattern.draw(mouse_pos);
    }
}

/// Copy of the engine state the canvas is drawn from, so the ticker is
/// never blocked on drawing
struct Frame {
    grid: Grid,
    cell_size: usize,
    generation: u64,
    population: usize,
}

impl Frame {
    fn capture(driver: &SimulationDriver) -> Self {
        let engine = driver.lock_engine();
        Self {
            grid: engine.current().clone(),
            cell_size: engine.cell_size(),
            generation: engine.generation(),
            population: engine.population(),
        }
    }

    fn status(&self, driver: &SimulationDriver) -> Status {
        Status {
            state: driver.state(),
            generation: self.generation,
            population: self.population,
            dimensions: self.grid.dimensions(),
            delay_ms: driver.delay_ms(),
        }
    }
}

/// Apply the typed delay; invalid text is reverted to the current delay
fn commit_delay(driver: &SimulationDriver, field: &mut NumberField) {
    match parse_delay(field.text()) {
        Some(ms) => driver.set_delay(ms as i64),
        None => {
            log::warn!("invalid delay {:?}, keeping {} ms", field.text(), driver.delay_ms());
            field.set_value(driver.delay_ms());
        }
    }
}

fn apply(
    action: Action,
    driver: &mut SimulationDriver,
    controls: &mut Controls,
    settings: &Settings,
) {
    match action {
        Action::ToggleRunning => {
            if !driver.is_running() {
                commit_delay(driver, &mut controls.delay);
            }
            driver.toggle_running();
        }
        Action::Clear => driver.clear(),
        Action::Randomize => match settings.seed {
            Some(seed) => driver.randomize_seeded(settings.alive_probability, seed),
            None => driver.randomize(settings.alive_probability),
        },
        Action::Step => driver.step_once(),
        Action::ToggleGridLines => {
            let checked = !controls.grid_lines.checked();
            controls.grid_lines.set_checked(checked);
        }
    }
}

fn main() {
    // Load first so the log level can come from the file; the outcome is
    // reported once the logger exists
    let loaded = Settings::load_or_default();
    let filter = loaded.settings.log_level.clone();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    loaded.report();

    let settings = loaded.settings;
    macroquad::Window::from_config(window_conf(&settings), run(settings));
}

async fn run(settings: Settings) {
    let canvas = settings.canvas;
    let canvas_height = canvas.height as f32;
    log::info!(
        "starting on a {}x{} canvas, cell size {}, delay {} ms",
        canvas.width,
        canvas.height,
        settings.cell_size,
        settings.delay_ms
    );

    let engine = LifeEngine::new(canvas, settings.cell_size);
    let mut driver = SimulationDriver::with_delay(engine, settings.delay_ms);
    let mut buttons = ui::create_buttons(canvas_height);
    let mut controls = Controls::new(&settings, canvas_height);
    let mut frame = Frame::capture(&driver);

    loop {
        let mouse_pos = mouse_position();
        let mut actions = Vec::new();

        // An open pattern menu covers the canvas and takes the click,
        // including the one that dismisses it
        let menu_captured = controls.pattern.is_open() || controls.pattern.captures(mouse_pos);
        if let Some(index) = controls.pattern.update(mouse_pos) {
            if let Some(pattern) = controls.patterns.get(index) {
                pattern.place_centered(&mut driver.lock_engine());
                log::info!("stamped {}", pattern.name);
            }
        }

        if let Some(text) = controls.delay.update(mouse_pos) {
            log::debug!("delay field committed {text:?}");
            commit_delay(&driver, &mut controls.delay);
        }
        if let Some(size) = controls.cell_size.update(mouse_pos) {
            driver.resize_cells(size);
        }
        controls.grid_lines.update(mouse_pos);

        actions.extend(input::button_actions(&buttons, mouse_pos));
        if !controls.delay.is_focused() {
            actions.extend(input::keyboard_actions());
        }
        if !menu_captured {
            input::handle_canvas_click(&driver, canvas, mouse_pos);
        }

        let had_actions = !actions.is_empty();
        for action in actions {
            apply(action, &mut driver, &mut controls, &settings);
        }
        buttons[0].set_text(if driver.is_running() { "Pause" } else { "Start" });

        // Re-read the engine only when something may have changed
        let interacted = is_mouse_button_pressed(MouseButton::Left) || had_actions;
        if driver.take_redraw() || interacted {
            frame = Frame::capture(&driver);
        }

        clear_background(BLACK);
        rendering::draw_grid(&frame.grid, frame.cell_size, controls.grid_lines.checked());
        rendering::draw_panel(canvas_height, &frame.status(&driver));
        buttons.iter().for_each(|btn| btn.draw(mouse_pos));
        controls.draw(mouse_pos);

        next_frame().await;
    }
}
