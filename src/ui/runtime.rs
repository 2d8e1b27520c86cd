use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    tracing::info!(id_strategy = ?config.list.id_strategy, "shopping list started");

    // Forces the first frame.
    let mut drawn_revision = None;
    loop {
        if drawn_revision != Some(app.revision()) {
            terminal.draw(|frame| draw(frame, &app))?;
            drawn_revision = Some(app.revision());
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // View-local changes (selection, focus, edit buffers) bypass the store.
                drawn_revision = None;
            }
            // Resize is picked up by the next draw.
            Ok(AppEvent::Resize(_, _)) => drawn_revision = None,
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(items = app.state().items.len(), "shopping list closed");
    drop(guard);
    Ok(())
}
