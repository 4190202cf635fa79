// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

mod app;
mod clipboard;
mod config;
mod data;
mod diagram;
mod error;
mod events;
mod state;
mod ui;

use app::App;
use crate::config::{Overrides, Settings, ThemePreference};
use error::GuideError;

#[derive(Parser, Debug)]
#[command(name = "otel-guide")]
#[command(about = "Interactive terminal guide to an OpenTelemetry pipeline")]
struct Args {
    /// Settings file (defaults to ./otel-guide.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemePreference>,

    /// Start with the flow animation paused
    #[arg(long)]
    no_animation: bool,

    /// Redraw interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export the example data to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?.with_overrides(&Overrides {
        theme: args.theme,
        no_animation: args.no_animation,
        tick_ms: args.tick_ms,
        log_file: args.log_file.clone(),
    })?;

    init_logging(&settings)?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        data::write_export(&export_path)?;
        println!("Exported example data to: {}", export_path.display());
        return Ok(());
    }

    run_tui(settings)
}

/// Install the tracing subscriber when a log file is configured.
///
/// The terminal belongs to the UI, so nothing is logged without a file.
fn init_logging(settings: &Settings) -> error::Result<()> {
    let Some(ref path) = settings.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| GuideError::LogFile {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| GuideError::Logging(e.to_string()))
}

/// Run the TUI until the user quits
fn run_tui(settings: Settings) -> Result<()> {
    // Resolve the theme before raw mode; detection queries the terminal itself
    let theme = settings.theme.resolve();
    let (width, _) = crossterm::terminal::size().unwrap_or((ui::MIN_WIDTH, ui::MIN_HEIGHT));
    let tick = settings.tick();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(settings, theme, width);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("guide closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: std::time::Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The poll timeout doubles as the animation frame interval
        if let Some(event) = events::poll_event(tick)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    events::handle_key_event(app, key)
                }
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
