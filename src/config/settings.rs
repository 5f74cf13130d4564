//! Configuration settings for the Game of Life driver

use crate::game_of_life::{load_seed_from_file, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Longest accepted pause between generations
const MAX_TICK_MILLIS: u64 = 60_000;

/// Largest accepted grid side length
pub const MAX_GRID_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub generation_limit: u64,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub pattern: Pattern,
    /// Seed file; takes precedence over `pattern` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: OutputStyle,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// One square glyph per cell
    Glyph,
    /// Bordered grid of 1/0 digits
    Framed,
    /// JSON snapshot of the live cells
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                grid_size: 20,
                generation_limit: 25,
                tick_millis: 500,
            },
            seed: SeedConfig {
                pattern: Pattern::Pulsar,
                file: None,
            },
            output: OutputConfig {
                style: OutputStyle::Glyph,
                color: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Relative seed paths are relative to the config file, not the working directory
        if let (Some(file), Some(config_dir)) = (settings.seed.file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = config_dir.join(&*file);
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.grid_size == 0 {
            anyhow::bail!("Grid size must be positive");
        }

        if self.simulation.grid_size > MAX_GRID_SIZE {
            anyhow::bail!(
                "Grid size {} exceeds the {} maximum",
                self.simulation.grid_size,
                MAX_GRID_SIZE
            );
        }

        if self.simulation.tick_millis > MAX_TICK_MILLIS {
            anyhow::bail!(
                "Tick interval of {}ms exceeds the {}ms maximum",
                self.simulation.tick_millis,
                MAX_TICK_MILLIS
            );
        }

        if let Some(ref file) = self.seed.file {
            if !file.exists() {
                anyhow::bail!("Seed file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Resolve the configured seed to coordinates
    pub fn load_seed(&self) -> Result<Vec<(isize, isize)>> {
        match self.seed.file {
            Some(ref file) => load_seed_from_file(file),
            None => Ok(self.seed.pattern.coordinates().to_vec()),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(grid_size) = cli_overrides.grid_size {
            self.simulation.grid_size = grid_size;
        }
        if let Some(generation_limit) = cli_overrides.generation_limit {
            self.simulation.generation_limit = generation_limit;
        }
        if let Some(tick_millis) = cli_overrides.tick_millis {
            self.simulation.tick_millis = tick_millis;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.seed.pattern = pattern;
            self.seed.file = None;
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.seed.file = Some(seed_file.clone());
        }
        if let Some(style) = cli_overrides.style {
            self.output.style = style;
        }
        if cli_overrides.no_color {
            self.output.color = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub grid_size: Option<usize>,
    pub generation_limit: Option<u64>,
    pub tick_millis: Option<u64>,
    pub pattern: Option<Pattern>,
    pub seed_file: Option<PathBuf>,
    pub style: Option<OutputStyle>,
    pub no_color: bool,
}
