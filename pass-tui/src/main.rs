mod app;
mod bootstrap;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::Result;
use app::{App, TimerSize};
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use config::PassConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pass_window::{Clock, SystemClock, Ticker};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use time::UtcOffset;
use tracing::info;

// The local UTC offset can only be read while the process has a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let cli = Cli::parse();
    let cfg = PassConfig::load()?;

    match PassConfig::log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path, &cfg.log_filter) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    match cli.command {
        Some(Commands::ConfigPath) => {
            let path = PassConfig::config_path()?;
            if !path.exists() {
                PassConfig::default().save_to(&path)?;
                println!("Created default config.");
            }
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Status) => {
            let store = bootstrap::open_store(&cfg, false)?;
            let line = bootstrap::status_line(&*store, local_offset, SystemClock.now())?;
            println!("{}", line);
            Ok(())
        }
        Some(Commands::Clear) => {
            let mut store = bootstrap::open_store(&cfg, false)?;
            bootstrap::clear_stored(&mut *store)?;
            println!("Stored AOS and LOS cleared.");
            Ok(())
        }
        Some(Commands::Run(_)) | None => run(cli.run_args(), &cfg, local_offset).await,
    }
}

async fn run(args: RunArgs, cfg: &PassConfig, local_offset: UtcOffset) -> Result<()> {
    info!(offset = %local_offset, "starting pass-tui");

    let store = bootstrap::open_store(cfg, args.ephemeral)?;
    let tracker = bootstrap::initialize_tracker(store, local_offset, &args);

    let tick_interval = args
        .tick_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| cfg.tick_interval());
    let mut ticker = Ticker::start(SystemClock, tick_interval);

    let mut app = App::new(
        tracker,
        ticker.now(),
        TimerSize::from_config(cfg.large_timer),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut ticker).await;
    drop(ticker);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("pass-tui exiting");
    res
}
