use crate::config::Config;
use crate::controller::SearchController;
use crate::dom::MemoryDocument;
use crate::search::HttpSearchBackend;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runs the interactive search screen until the user quits.
///
/// Must be called with a Tokio runtime entered; submissions spawn onto it.
pub fn run(config: Config) -> anyhow::Result<()> {
    let backend = HttpSearchBackend::new(&config.client)?;
    tracing::info!(endpoint = %backend.endpoint(), "Starting search screen");
    let document = MemoryDocument::with_regions(&config.regions);
    let controller = SearchController::new(backend, document, config.regions, config.labels);
    let mut app = App::new(controller);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            // Responses land in the document and ratatui picks up the new
            // size on draw; both only need the redraw above
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    let _ = io::Write::flush(&mut io::stdout());
    Ok(())
}
