//! FYI - terminal dashboard
//!
//! Shows the current time, CPU usage and the local weather.
//!
//! ## Usage
//!
//! ```bash
//! # Start the dashboard
//! fyi
//!
//! # With verbose logging
//! fyi -v
//!
//! # Clock and CPU only
//! fyi --no-weather
//!
//! # Custom config and environment file
//! fyi --config ./fyi.yaml --env-file ./secrets.env
//! ```

use std::io::Write;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use fyi_core::{DashboardConfig, LogGuard, config, init_logging};
use fyi_sources::{BlockingWeatherSource, SysinfoMetrics};
use fyi_tui::{App, Dashboard, KeyMap, Scheduler};
use tracing::{error, info, warn};

/// FYI terminal dashboard
///
/// Displays a clock, CPU utilization and current weather conditions.
/// Press `q` or Ctrl+C to quit.
#[derive(Parser, Debug)]
#[command(name = "fyi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.fyi/logs/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.fyi/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Environment file to load before reading the API key
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Do not fetch or show weather
    #[arg(long)]
    no_weather: bool,

    /// Do not sample or show CPU usage
    #[arg(long)]
    no_metrics: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(1);
        }
    };

    install_panic_hook();

    info!("Starting FYI dashboard");

    match run_app(&cli) {
        Ok(()) => {
            info!("FYI dashboard exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("FYI dashboard error: {:#}", e);
            eprintln!("Error: {:#}", e);
            if let Some(hint) = e
                .downcast_ref::<fyi_core::FyiError>()
                .and_then(|e| e.guidance())
            {
                eprintln!("{}", hint);
            }
            ExitCode::from(1)
        }
    }
}

/// Install a panic hook that restores the terminal before printing the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Restore terminal to its normal state.
fn restore_terminal() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();

    crossterm::execute!(
        stdout,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;

    stdout.flush()?;

    Ok(())
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> fyi_core::Result<LogGuard> {
    let verbose = cli.verbose > 0;
    init_logging(cli.log_dir.clone(), verbose)
}

/// Load settings, apply command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    config::load_env_file(cli.env_file.as_deref()).context("loading environment file")?;

    let mut config = DashboardConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.no_weather {
        config.capabilities = config.capabilities.without_weather();
    }
    if cli.no_metrics {
        config.capabilities = config.capabilities.without_metrics();
    }
    Ok(config)
}

/// Attach the sources the configuration enables.
fn build_dashboard(config: &DashboardConfig) -> Dashboard {
    let mut dashboard = Dashboard::new(Local::now(), KeyMap::default());

    if config.capabilities.metrics {
        let metrics = SysinfoMetrics::new(config.refresh.cpu_sample_window());
        dashboard = dashboard.with_metrics(Box::new(metrics));
    }

    if config.capabilities.weather {
        match config.weather.resolve_api_key() {
            Some(key) => match BlockingWeatherSource::new(&config.weather, key) {
                Ok(source) => {
                    dashboard = dashboard.with_weather(Box::new(source), config.weather.location.clone());
                }
                Err(e) => warn!(error = %e, "weather client unavailable, weather disabled"),
            },
            None => warn!(
                env = %config.weather.api_key_env,
                "weather API key not set, weather disabled"
            ),
        }
    }

    dashboard
}

/// Run the TUI application.
fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    info!(capabilities = ?config.capabilities, "configuration loaded");

    let dashboard = build_dashboard(&config);
    let scheduler = Scheduler::from_config(&config.refresh);
    let mut app = App::new(dashboard, scheduler).with_weather_on_start(config.weather.fetch_on_start);

    app.run().map_err(|e| anyhow::anyhow!("terminal error: {}", e))
}
