use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use movie_catalog::config::AppConfig;
use movie_catalog::core::{logging, Catalog};
use movie_catalog::tui::app::AppState;
use movie_catalog::tui::events::{AppEvent, Notification, NotificationLevel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // Initialize logging (file only, the TUI owns stdout)
    let _log_guard = logging::init_tui(&config.data_dir());
    tracing::info!("{} v{} starting", movie_catalog::NAME, movie_catalog::VERSION);

    // Optional initial view, e.g. `movie-catalog "?genre=drama&page=2"`
    let initial_query = std::env::args().nth(1).unwrap_or_default();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let catalog = load_catalog(&config, &event_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(
        catalog,
        config.catalog.effective_page_size(),
        &initial_query,
        event_rx,
    );
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(event_tx);

    if let Err(e) = result {
        tracing::error!("TUI exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Print the final view so it can be reopened later
    println!("{}", movie_catalog::core::query_string::to_search(app.sync().state()));

    Ok(())
}

/// Configured catalog file, or the built-in list if none is set or it fails to load.
fn load_catalog(config: &AppConfig, event_tx: &mpsc::UnboundedSender<AppEvent>) -> Catalog {
    let Some(path) = config.catalog.catalog_file.as_deref() else {
        return Catalog::builtin();
    };

    match Catalog::from_file(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("{e}; falling back to the built-in catalog");
            let _ = event_tx.send(AppEvent::Notification(Notification {
                id: 0, // Assigned by AppState
                message: "Catalog file failed to load, using built-in movies".to_string(),
                level: NotificationLevel::Warning,
                ttl_ticks: 60,
            }));
            Catalog::builtin()
        }
    }
}
