mod app;
mod ui;
mod api;
mod models;
mod utils;
mod error;

use crate::api::spawn_fetch;
use crate::app::App;
use crate::ui::run_app;

use crossterm::{
    execute,
    terminal::{ enable_raw_mode, disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen },
};
use std::{ env, error::Error, fs::File, io, sync::Arc, time::Duration };
use tracing_subscriber::EnvFilter;
use tui::{ backend::CrosstermBackend, Terminal };

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(200);
    let mut app = App::new();

    // Start loading a fact right away, the same as a tap.
    if app.on_tap() {
        spawn_fetch(app.sender());
    }

    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

/// The terminal belongs to the UI, so diagnostics go to a file in the OS
/// temp directory. RUST_LOG overrides the default info level.
fn init_logging() -> Result<(), Box<dyn Error>> {
    let log_file = File::create(env::temp_dir().join("chuck-facts.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
