//! Field Trip Tracker - look up a student and see which field trips they
//! attended.
//!
//! Runs as an interactive terminal UI by default. `--report <name>` and
//! `--search <query>` print to stdout and exit without starting the UI.

mod app;
mod search_box;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fieldtrip_core::loader::LOAD_FAILURE_MESSAGE;
use fieldtrip_core::{load_catalog, progress_view, suggest, Catalog, Config, SourceClient, Suggestions};

use app::{App, AppState};
use ui::input::{handle_input, handle_mouse};
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds).
/// Short enough that the suggestion blur delay expires on time.
const EVENT_POLL_TIMEOUT_MS: u64 = 50;

/// Log file name inside the cache directory
const LOG_FILE: &str = "fieldtrip.log";

const USAGE: &str = "\
Usage:
  fieldtrip                   Start the interactive tracker
  fieldtrip --report <name>   Print progress for an exact roster name
  fieldtrip --search <query>  Print students whose name contains the query

Data sources come from ~/.config/fieldtrip/config.json, or the
FIELDTRIP_ROSTER and FIELDTRIP_TRIPS environment variables.";

fn env_filter() -> EnvFilter {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logging for the command-line reports goes to stderr
fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter())
        .init();
}

/// Logging for the interactive UI goes to a file so it never draws over the
/// terminal. Returns the guard that flushes the writer on drop.
fn init_file_tracing() -> Option<WorkerGuard> {
    let log_dir = Config::log_dir().ok()?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter())
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--report") => {
            init_stderr_tracing();
            let name = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
            return run_report(&name).await;
        }
        Some("--search") => {
            init_stderr_tracing();
            let query = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
            return run_search(&query).await;
        }
        Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown argument: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    // Initialize logging
    let _log_guard = init_file_tracing();
    info!("Field trip tracker starting");

    let config = Config::load_or_default().with_env();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and start loading behind the UI
    let mut app = App::new(config);
    app.start_loading();

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Field trip tracker shutting down");
    Ok(())
}

/// Load the catalog for the non-interactive commands
async fn load_for_cli() -> Result<Catalog> {
    let config = Config::load_or_default().with_env();
    let client = SourceClient::new()?;
    load_catalog(&client, &config.roster(), &config.trips())
        .await
        .context(LOAD_FAILURE_MESSAGE)
}

/// Print the progress view for an exact roster name
async fn run_report(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("--report needs a student name\n\n{}", USAGE);
    }

    let catalog = load_for_cli().await?;
    let view = progress_view(&catalog, catalog.select_by_name(name));
    print!("{}", view);
    Ok(())
}

/// Print the suggestion list for a query
async fn run_search(query: &str) -> Result<()> {
    let catalog = load_for_cli().await?;
    match suggest(catalog.roster(), query) {
        Suggestions::Hidden => {
            warn!(query, "No suggestions for query");
            eprintln!("No matching students (queries need at least 2 characters)");
        }
        Suggestions::Shown(students) => {
            for student in students {
                println!("{}\t{}", student.name, student.grade_label());
            }
        }
    }
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI, remembering the area for mouse hit-testing
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            render(f, app);
        })?;
        app.viewport = area;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(());
                    }

                    if handle_input(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        // Expire the suggestion blur delay and pick up the load result
        app.tick(Instant::now());
        app.check_background_tasks();

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
