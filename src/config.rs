//! Settings for the simulator, loaded from YAML with defaults for every field.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_DELAY_MS;
use crate::domain::{Canvas, DEFAULT_ALIVE_PROBABILITY, DEFAULT_CELL_SIZE};

/// Files tried, in order, by `Settings::load_or_default`
pub const CONFIG_PATHS: &[&str] = &["life.yaml", "life_canvas.yaml"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Drawing surface in pixels
    pub canvas: Canvas,
    /// Edge length of one cell; clamped to 2..=50 by the engine
    pub cell_size: usize,
    /// Milliseconds between generations
    pub delay_ms: u64,
    pub show_grid_lines: bool,
    /// Probability used by the Random control
    pub alive_probability: f64,
    /// Fixed seed for Random; fresh randomness when absent
    pub seed: Option<u64>,
    /// Default env_logger filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            cell_size: DEFAULT_CELL_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            show_grid_lines: true,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path.as_ref(), yaml)
            .with_context(|| format!("writing {}", path.as_ref().display()))?;
        Ok(())
    }

    /// First readable file from `CONFIG_PATHS`, or defaults
    pub fn load_or_default() -> Loaded {
        Self::load_first(CONFIG_PATHS)
    }

    /// First of `paths` that loads, or defaults. Nothing is logged here, since
    /// the log level itself comes from the result; call `Loaded::report`
    /// once the logger is up.
    pub fn load_first<P: AsRef<Path>>(paths: &[P]) -> Loaded {
        let mut skipped = Vec::new();
        for path in paths {
            let path: &Path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(settings) => {
                    return Loaded { settings, source: Some(path.to_path_buf()), skipped };
                }
                Err(err) => skipped.push((path.to_path_buf(), err)),
            }
        }
        Loaded { settings: Self::default(), source: None, skipped }
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            bail!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas.width,
                self.canvas.height
            );
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            bail!("alive_probability must be within 0..=1, got {}", self.alive_probability);
        }
        Ok(())
    }
}

/// Settings plus where they came from and which files were rejected
pub struct Loaded {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub skipped: Vec<(PathBuf, anyhow::Error)>,
}

impl Loaded {
    /// Log the outcome of the search
    pub fn report(&self) {
        for (path, err) in &self.skipped {
            log::warn!("ignoring {}: {err:#}", path.display());
        }
        match &self.source {
            Some(path) => log::info!("loaded settings from {}", path.display()),
            None => log::info!("using default settings"),
        }
    }
}
