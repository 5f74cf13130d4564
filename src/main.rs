//! Command line driver for the Game of Life simulation

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use conway_life::{
    config::{CliOverrides, OutputStyle, Settings},
    game_of_life::{create_example_seeds, Pattern},
    simulation::Runner,
    utils::ColorOutput,
};
use log::warn;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation, printing each generation
    Run {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Milliseconds between generations (overrides config)
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a number of generations at once and print the result
    Step {
        #[command(flatten)]
        sim: SimulationArgs,

        /// Generations to advance
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,
    },

    /// List the built-in patterns
    Patterns,

    /// Create a default configuration and example seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by every command that builds an engine
#[derive(Args, Debug)]
struct SimulationArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Built-in seed pattern (overrides config)
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,

    /// Seed file, text grid or JSON pairs (overrides config)
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Grid side length (overrides config)
    #[arg(short, long)]
    size: Option<usize>,

    /// Output style (overrides config)
    #[arg(long, value_enum)]
    style: Option<OutputStyle>,

    /// Disable colored status messages
    #[arg(long)]
    no_color: bool,
}

impl SimulationArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            grid_size: self.size,
            pattern: self.pattern,
            seed_file: self.seed_file.clone(),
            style: self.style,
            no_color: self.no_color,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    init_logging(verbose);

    match cli.command {
        Commands::Run { sim, generations, tick_ms, verbose } => {
            run_command(sim, generations, tick_ms, verbose)
        }
        Commands::Step { sim, count } => step_command(sim, count),
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load configuration, falling back to defaults when the file is missing
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    sim: SimulationArgs,
    generations: Option<u64>,
    tick_ms: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let overrides = CliOverrides {
        generation_limit: generations,
        tick_millis: tick_ms,
        ..sim.overrides()
    };
    let settings = load_settings(&sim.config, &overrides)?;
    let color = ColorOutput::new(settings.output.color);

    if verbose {
        println!("Configuration:");
        println!("  Grid size: {}", settings.simulation.grid_size);
        println!("  Generation limit: {}", settings.simulation.generation_limit);
        println!("  Tick: {}ms", settings.simulation.tick_millis);
        match settings.seed.file {
            Some(ref file) => println!("  Seed file: {}", file.display()),
            None => println!("  Pattern: {}", settings.seed.pattern),
        }
        println!();
    }

    let mut runner = Runner::from_settings(&settings)?;
    let summary = runner.run(&mut std::io::stdout().lock())?;

    println!("{}", color.success(&summary.to_string()));
    Ok(())
}

fn step_command(sim: SimulationArgs, count: u64) -> Result<()> {
    let settings = load_settings(&sim.config, &sim.overrides())?;

    let mut runner = Runner::from_settings(&settings)?;
    runner.skip(count);
    runner.render_frame(&mut std::io::stdout().lock())?;

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("Built-in patterns:");
    for pattern in Pattern::ALL {
        println!(
            "  {:8} {:3} cells, fits a {}x{} grid",
            pattern.name(),
            pattern.coordinates().len(),
            pattern.min_grid_size(),
            pattern.min_grid_size()
        );
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let color = ColorOutput::new(true);
    println!("{}", color.info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("seeds");

    for dir in [&config_dir, &seeds_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let defaults = Settings::default();
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        defaults
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        let skipped = format!("Skipped: {} (already exists)", config_path.display());
        println!("{}", color.warning(&skipped));
    }

    let written = create_example_seeds(&seeds_dir, defaults.simulation.grid_size, force)
        .context("Failed to create example seeds")?;
    println!(
        "Created {} example seeds in: {}",
        written.len(),
        seeds_dir.display()
    );
    let kept = Pattern::ALL.len() - written.len();
    if kept > 0 {
        let skipped = format!("Skipped: {} existing seed files", kept);
        println!("{}", color.warning(&skipped));
    }

    // A variant that reads its seed from one of the files above; the path is
    // relative to the config file's directory
    let glider_path = config_dir.join("examples").join("glider.yaml");
    if !glider_path.exists() || force {
        let mut glider_config = Settings::default();
        glider_config.simulation.generation_limit = 40;
        glider_config.seed.file = Some(PathBuf::from("../../seeds/glider.txt"));
        glider_config.output.style = OutputStyle::Framed;
        glider_config.to_file(&glider_path)?;
        println!("Created: {}", glider_path.display());
    } else {
        let skipped = format!("Skipped: {} (already exists)", glider_path.display());
        println!("{}", color.warning(&skipped));
    }

    println!("\n{}", color.success("Setup complete!"));
    Ok(())
}
