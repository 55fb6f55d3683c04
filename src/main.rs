//! Driverless Car - interactive sensor/decision simulator
//!
//! # Usage
//!
//! ```bash
//! # Interactive menu
//! cargo run --release
//!
//! # Reproducible session
//! cargo run --release -- --seed 42
//!
//! # One-shot: run the camera sensor against a specific image
//! cargo run --release -- --sensor camera --image assets/traffic_go.png
//! ```
//!
//! # Environment Variables
//!
//! - `DRIVERLESS_CAR_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Console logging level (default: info)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use driverless_car::config::defaults::MAX_SEED;
use driverless_car::config::{self, LoggingConfig, SimConfig};
use driverless_car::pipeline::{run_interactive, Menu, Pipeline};
use driverless_car::{Control, SensorKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "driverless-car")]
#[command(about = "Driverless car sensor/decision simulator")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides DRIVERLESS_CAR_CONFIG and ./driverless_car.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random source (reproducible sensor readings)
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    seed: Option<u64>,

    /// Image used by the camera traffic-signal sensor
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Run one sensor/decision pair non-interactively and exit
    #[arg(long, value_enum)]
    sensor: Option<SensorArg>,

    /// Number of one-shot runs (with --sensor)
    #[arg(long, default_value = "1", requires = "sensor")]
    runs: u32,

    /// File receiving error-level log records
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Emit console logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SensorArg {
    Lane,
    Obstacle,
    Traffic,
    Camera,
}

impl From<SensorArg> for SensorKind {
    fn from(arg: SensorArg) -> Self {
        match arg {
            SensorArg::Lane => Self::Lane,
            SensorArg::Obstacle => Self::Obstacle,
            SensorArg::Traffic => Self::TrafficSignal,
            SensorArg::Camera => Self::TrafficCamera,
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console layer on stderr plus an append-only log file at the configured level.
fn init_logging(cfg: &LoggingConfig, json: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.file)
        .with_context(|| format!("Failed to open log file {}", cfg.file.display()))?;
    let file_level: LevelFilter = cfg
        .file_level
        .to_ascii_lowercase()
        .parse()
        .unwrap_or(LevelFilter::ERROR);

    let console = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed()
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(file_level);

    tracing_subscriber::registry()
        .with(console.with_filter(console_filter()))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Load config under a temporary stderr subscriber so warnings raised while
/// loading are not lost before the real subscriber exists.
fn load_config(args: &CliArgs) -> Result<SimConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(console_filter())
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    let mut config = tracing::subscriber::with_default(bootstrap, || {
        SimConfig::load(args.config.as_deref())
    })
    .context("Failed to load configuration")?;

    if let Some(image) = &args.image {
        config.sensors.camera.image_path = image.clone();
    }
    if let Some(log_file) = &args.log_file {
        config.logging.file = log_file.clone();
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    config
        .validate()
        .context("Invalid configuration after command-line overrides")?;
    Ok(config)
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let sim_config = load_config(&args)?;
    if args.print_config {
        print!("{}", sim_config.to_toml_string()?);
        return Ok(());
    }

    init_logging(&sim_config.logging, args.log_json)?;
    config::init(sim_config);
    let cfg = config::get();

    info!(
        vehicle = %cfg.vehicle.name,
        image = %cfg.sensors.camera.image_path.display(),
        log_file = %cfg.logging.file.display(),
        "Driverless car simulator starting"
    );

    let mut rng = match cfg.simulation.seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut pipeline = Pipeline::from_config(&cfg.sensors);
    let mut control = Control::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(sensor) = args.sensor {
        let kind = SensorKind::from(sensor);
        for _ in 0..args.runs {
            let outcome = pipeline.run(kind, &mut rng)?;
            control.execute(&outcome.decision, &mut out)?;
        }
    } else {
        let menu = Menu::new(cfg.vehicle.name.clone());
        let summary = run_interactive(
            io::stdin().lock(),
            &mut out,
            &menu,
            &mut pipeline,
            &mut control,
            &mut rng,
        )?;
        info!(
            runs = summary.runs,
            distinct_decisions = control.len(),
            "Interactive session complete"
        );
    }

    let stats = pipeline.stats();
    info!(
        runs = stats.runs,
        fallbacks = stats.fallbacks,
        empty_readings = stats.empty_readings,
        "Driverless car simulator shutdown complete"
    );
    Ok(())
}
