//! Cycle infotainment head unit, terminal edition
//!
//! Home, lock, dashboard, control center, navigation and model viewer
//! screens driven from the keyboard, or by dragging with the mouse.

use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use infotainment_core::Screen;
use infotainment_tui::app::{App, TuiConfig};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "infotainment_tui=info,infotainment_core=info";

#[derive(Parser)]
#[command(name = "infotainment")]
#[command(about = "Cycle infotainment head unit in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to start on, e.g. lock or dashboard
    #[arg(short, long)]
    screen: Option<Screen>,

    /// Use the high-contrast palette
    #[arg(long)]
    high_contrast: bool,

    /// Write logs to this file; the terminal is busy drawing
    #[arg(long, default_value = "infotainment.log")]
    log_file: PathBuf,
}

/// Application entry point with panic handling for terminal restoration
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    init_logging(&cli.log_file)?;

    let config_path = cli.config.clone().or_else(TuiConfig::config_file_path);
    let mut config = match &config_path {
        Some(path) => TuiConfig::load_from(path),
        None => TuiConfig::default(),
    };
    if let Some(screen) = cli.screen {
        config.start_screen = screen;
    }

    let mut app = App::new(config, config_path).context("Invalid configuration")?;
    app.set_high_contrast(cli.high_contrast);

    let result = run_app(app).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}

/// Main application runner
async fn run_app(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
