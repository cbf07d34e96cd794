//! Weather Station Control Tool
//!
//! Wires sensors, the observation log and the console notifier together and
//! runs sensing cycles from the command line.

mod config;
mod input;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weather_station_core::{Aggregator, ConsoleNotifier, FileLogger, Notifier, SensorFactory};

use config::Config;

#[derive(Parser)]
#[command(name = "weatherctl")]
#[command(about = "Simulated weather station")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (TOML); built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run sensing cycles and log the merged observation
    Run(RunArgs),
    /// List known sensor types
    Sensors,
    /// Write the effective configuration to a file
    InitConfig {
        /// Output file path
        #[arg(default_value = "weather.toml")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// JSON file holding the raw input object
    #[arg(long)]
    input: Option<PathBuf>,

    /// Override one input field (e.g. --set temperature=21.5)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = input::parse_assignment)]
    set: Vec<(String, f64)>,

    /// Number of cycles to run with the same input
    #[arg(long, default_value = "1")]
    cycles: u32,

    /// Message to send to configured recipients after the last cycle
    #[arg(long)]
    notify: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path).context("Failed to load configuration")?;
            info!("Loaded configuration from: {}", path.display());
            config
        }
        None => {
            info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    match cli.command {
        Commands::Run(args) => handle_run(&config, args)?,
        Commands::Sensors => handle_sensors(),
        Commands::InitConfig { output } => handle_init_config(&config, &output)?,
    }

    Ok(())
}

/// Builds an aggregator from `config`, skipping unknown sensor types.
fn build_station(config: &Config, factory: &SensorFactory) -> Aggregator {
    let logger = Arc::new(FileLogger::new(&config.log_file));
    let notifier = Arc::new(ConsoleNotifier::new());
    for recipient in &config.recipients {
        notifier.add_recipient(recipient);
    }

    let mut station = Aggregator::new(logger).with_notifier(notifier);
    for type_id in &config.sensors {
        match factory.try_create(type_id) {
            Ok(sensor) => station.add_sensor(sensor),
            Err(e) => warn!("{}, skipping", e),
        }
    }
    station
}

fn handle_run(config: &Config, args: RunArgs) -> Result<()> {
    let input = input::resolve(&config.input, args.input.as_deref(), &args.set)?;

    let factory = SensorFactory::new();
    let mut station = build_station(config, &factory);
    if station.is_empty() {
        warn!("No sensors registered, observation will stay empty");
    }

    for cycle in 1..=args.cycles {
        match station.run_cycle(&input) {
            Ok(()) => info!("Cycle {} logged to {}", cycle, config.log_file),
            Err(e) => warn!("Cycle {} incomplete: {}", cycle, e),
        }
    }

    let observation = station
        .observation()
        .to_pretty_json()
        .context("Failed to format observation")?;
    println!("{}", observation);

    if let Some(message) = args.notify {
        station
            .notify(&message)
            .context("Failed to notify recipients")?;
    }

    Ok(())
}

fn handle_sensors() {
    let factory = SensorFactory::new();
    println!("Available sensor types:");
    for type_id in factory.type_ids() {
        if let Some(sensor) = factory.create(type_id) {
            println!("  {:<12} field: {}", type_id, sensor.kind().field());
        }
    }
}

fn handle_init_config(config: &Config, output: &Path) -> Result<()> {
    config.save(output)?;
    println!("Configuration written to: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use weather_station_core::SensorKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "weatherctl",
            "run",
            "--set",
            "temperature=1.5",
            "--set",
            "humidity=2",
            "--cycles",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(
                    args.set,
                    vec![
                        ("temperature".to_string(), 1.5),
                        ("humidity".to_string(), 2.0)
                    ]
                );
                assert_eq!(args.cycles, 3);
                assert!(args.notify.is_none());
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_build_station_skips_unknown_types() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: dir.path().join("weather.txt").display().to_string(),
            sensors: vec![
                "TEMPERATURE".to_string(),
                "WIND".to_string(),
                "HUMIDITY".to_string(),
            ],
            ..Config::default()
        };

        let station = build_station(&config, &SensorFactory::new());
        let kinds: Vec<SensorKind> = station.sensors().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![SensorKind::Temperature, SensorKind::Humidity]);
    }

    #[test]
    fn test_run_appends_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("weather.txt");
        let config = Config {
            log_file: log_file.display().to_string(),
            ..Config::default()
        };
        let args = RunArgs {
            input: None,
            set: Vec::new(),
            cycles: 2,
            notify: None,
        };

        handle_run(&config, args).unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        let block = "{\n    \"humidity\": 45.5,\n    \"temperature\": 50.0\n}\n";
        assert_eq!(content, block.repeat(2));
    }
}
