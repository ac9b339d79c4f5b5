mod app;
mod config;
mod error;
mod network;
mod telemetry;
mod types;
mod ui;
mod usage;
mod utils;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::watch;
use tracing::{info, warn};

use app::App;
use config::{Config, CONFIG_FILE};
use network::sampler::SysinfoSampler;
use types::Snapshot;
use usage::poller::Poller;
use usage::store::{data_dir, UsageStore};
use usage::tracker::UsageTracker;

/// How long to wait for input before redrawing.
const FRAME_RATE: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let data_dir = data_dir().context("cannot locate a user-scoped data directory")?;

    let (config, config_err) = match Config::load_from(&data_dir.join(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let _log_guard = telemetry::init_tracing(&config.log_dir_or_default(&data_dir), &config.log_level)
        .context("failed to initialise logging")?;
    if let Some(err) = config_err {
        warn!("Using default settings: {}", err);
    }
    info!("Starting netmeter {}", env!("CARGO_PKG_VERSION"));

    let store = UsageStore::at_default_location().context("cannot locate the usage data file")?;
    if let Err(err) = store.ensure_dir() {
        warn!("Could not create data directory: {}", err);
    }
    let data_file = store.path().to_path_buf();

    let mut tracker = UsageTracker::new(SysinfoSampler::new(), store);
    let initial = tracker.initialize();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("netmeter-poller")
        .enable_time()
        .build()
        .context("failed to start the polling runtime")?;

    // Set up the terminal before polling starts; nothing after the spawn returns early
    let mut terminal = setup_terminal()?;

    let (poller, mut snapshots) = {
        let _enter = runtime.enter();
        Poller::spawn(tracker, initial.clone())
    };

    let mut app = App::new(initial, data_file);
    let result = run_app(&mut terminal, &mut app, &mut snapshots);

    // Persist before handing the terminal back
    runtime.block_on(poller.stop_and_persist());
    info!("netmeter closed");

    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            let _ = restore_terminal();
            Err(err).context("failed to set up the terminal")
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    snapshots: &mut watch::Receiver<Snapshot>,
) -> Result<()> {
    loop {
        app.update(snapshots);
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(FRAME_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}
