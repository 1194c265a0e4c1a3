//! issuelist - a terminal client for the issue tracker's GraphQL API
//!
//! Lists issues, creates new ones and maintains the owner blacklist.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod tasks;
mod ui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info, warn};

use crate::api::GraphQLClient;
use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::{create_task_channel, ApiMessage, TaskSpawner};

#[derive(Parser, Debug)]
#[command(name = "issuelist")]
#[command(about = "Browse and add issues from the terminal", version)]
struct Args {
    /// GraphQL endpoint URL (overrides config file and ISSUELIST_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = run(args).await;
    if let Err(e) = &result {
        error!(error = %e, "Application error");
        if let Some(app_err) = e.downcast_ref::<AppError>() {
            if app_err.is_critical() {
                eprintln!("{}", app_err.user_message());
            }
        }
        if let Some(dir) = logging::log_directory() {
            eprintln!("Logs: {}", dir.display());
        }
    }
    logging::shutdown();
    result
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref(), args.endpoint.as_deref())
        .map_err(AppError::from)?;

    if !io::stdout().is_terminal() {
        anyhow::bail!("issuelist requires an interactive terminal");
    }

    let client = GraphQLClient::new(&config).context("Failed to create HTTP client")?;
    info!(endpoint = %client.endpoint(), "Starting issuelist");
    let (rx, spawner) = create_task_channel(client);
    let events = EventHandler::new(config.settings.tick_rate_ms);
    let mut app = App::new(&config);

    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app, &events, &spawner, rx);

    // Restore the terminal even when the loop failed
    if let Err(e) = restore_terminal(&mut terminal) {
        warn!(error = %e, "Failed to restore terminal");
    }

    info!("Exiting issuelist");
    result
}

fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    spawner: &TaskSpawner,
    mut rx: UnboundedReceiver<ApiMessage>,
) -> Result<()> {
    loop {
        for request in app.take_pending_requests() {
            spawner.spawn(request);
        }

        terminal.draw(|frame| app.view(frame))?;

        let event = events.next()?;
        app.update(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut Tui) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}
