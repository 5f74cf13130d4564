//! Timed loop that advances an engine and prints every generation

use crate::config::{OutputStyle, Settings};
use crate::game_of_life::Engine;
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How a [`Runner`] drives its engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop once the engine reaches this generation
    pub generation_limit: u64,
    /// Pause before each advance
    pub tick: Duration,
    pub style: OutputStyle,
}

impl RunOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            generation_limit: settings.simulation.generation_limit,
            tick: Duration::from_millis(settings.simulation.tick_millis),
            style: settings.output.style,
        }
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub final_living: usize,
    pub stopped_early: bool,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ran {} generation(s) in {:.3}s, {} living cell(s) remain",
            self.generations,
            self.elapsed.as_secs_f64(),
            self.final_living
        )?;
        if self.stopped_early {
            write!(f, " (stopped early)")?;
        }
        Ok(())
    }
}

/// Drives an [`Engine`] up to a generation limit.
///
/// Rendering goes to any `Write`; the loop can be interrupted from another
/// thread through [`Runner::stop_handle`].
pub struct Runner {
    engine: Engine,
    options: RunOptions,
    stop: Arc<AtomicBool>,
}

impl Runner {
    pub fn new(engine: Engine, options: RunOptions) -> Self {
        Self {
            engine,
            options,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Build the engine described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let seed = settings.load_seed().context("Failed to load seed")?;
        let engine = Engine::new(settings.simulation.grid_size, &seed)
            .context("Failed to build simulation engine")?;
        Ok(Self::new(engine, RunOptions::from_settings(settings)))
    }

    /// Flag checked between generations; set it to end the run
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Write the current generation to `out`
    pub fn render_frame<W: Write>(&self, out: &mut W) -> Result<()> {
        let frame = GridFormatter::render(&self.engine, self.options.style)?;
        if self.options.style != OutputStyle::Json {
            writeln!(out, "{}", GridFormatter::header(&self.engine))?;
        }
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Render the current generation, then advance and render until the limit
    /// is reached or a stop is requested.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let start_time = Instant::now();
        let start_generation = self.engine.current_generation();
        let mut stopped_early = false;

        info!(
            "Running {}x{} grid to generation {}",
            self.engine.grid_size(),
            self.engine.grid_size(),
            self.options.generation_limit
        );
        self.render_frame(out)?;

        while self.engine.current_generation() < self.options.generation_limit {
            if self.stop.load(Ordering::Relaxed) {
                debug!("Stop requested at generation {}", self.engine.current_generation());
                stopped_early = true;
                break;
            }
            if !self.options.tick.is_zero() {
                std::thread::sleep(self.options.tick);
            }
            self.engine.advance();
            self.render_frame(out)?;
        }

        Ok(RunSummary {
            generations: self.engine.current_generation() - start_generation,
            final_living: self.engine.living_count(),
            stopped_early,
            elapsed: start_time.elapsed(),
        })
    }

    /// Advance `count` generations without rendering or pausing
    pub fn skip(&mut self, count: u64) {
        for _ in 0..count {
            self.engine.advance();
        }
    }
}
