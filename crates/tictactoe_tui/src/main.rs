//! Tic-tac-toe terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tictactoe_tui::terminal::{self, RestoreGuard};
use tictactoe_tui::{App, UiConfig, ui};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = UiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    if cli.descending {
        config = config.with_descending(true);
    }

    init_tracing(&config)?;
    info!(config_path = %cli.config.display(), "Starting tic-tac-toe");

    let guard = RestoreGuard::new(terminal::restore);
    let mut terminal = terminal::init().context("Failed to set up terminal")?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err);
    }

    info!(moves = app.session().history().len() - 1, "Exited cleanly");
    Ok(())
}

/// Draws, waits for one event, handles it, repeats until the user quits.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut area = Rect::default();

    while !*app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        let event = event::read()?;
        if let Event::Resize(width, height) = event {
            debug!(width, height, "Terminal resized");
            continue;
        }
        if let Some(transition) = app.handle_event(&event, area) {
            debug!(?transition, "Event handled");
        }
    }

    Ok(())
}

/// Sends tracing output to the configured log file.
fn init_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
