use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use taskflow_core::{Route, TaskflowError, Workspace};
use tracing::info;

use taskflow_tui::app::{App, Mode};
use taskflow_tui::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let workspace = Workspace::sample().context("failed to load sample workspace")?;

    if config.dump_json {
        return dump_json(&workspace, &config.route);
    }

    info!(route = %config.route, locale = %config.locale, "taskflow starting");
    let today = Local::now().date_naive();
    let app = App::new(workspace, config.route, config.locale, today);
    run_tui(app)
}

/// The terminal is owned by the UI, so logs only go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn dump_json(workspace: &Workspace, route: &Route) -> Result<()> {
    let json = match route {
        Route::ProjectDetail(id) => {
            let board = workspace
                .board(*id)
                .ok_or(TaskflowError::ProjectNotFound(*id))?;
            serde_json::to_string_pretty(&board.by_column())?
        }
        _ => serde_json::to_string_pretty(workspace.catalog.list())?,
    };
    println!("{json}");
    Ok(())
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits from the plain views only
            if key.code == KeyCode::Char('q') && matches!(app.mode(), Mode::Normal) {
                break;
            }
            app.handle_key(key);
        }
    }

    info!("taskflow exiting");
    Ok(())
}
