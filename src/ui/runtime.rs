use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::store::Store;
use crate::todo::{TodoListState, TodoReducer};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Composition root: builds the store, wires the change notification,
/// and runs the draw/event loop until quit.
pub fn run(config: &Config, initial: TodoListState) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let store = Store::<TodoReducer>::new(initial);
    let dirty = Arc::new(AtomicBool::new(true));
    {
        // Store → view change notification: republished state marks the
        // screen dirty; the loop below redraws on the next pass.
        let dirty = Arc::clone(&dirty);
        store.subscribe(move |_| dirty.store(true, Ordering::Relaxed));
    }
    let mut app = App::new(store);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    loop {
        if dirty.swap(false, Ordering::Relaxed) {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // Selection and footer are view chrome outside the store.
                dirty.store(true, Ordering::Relaxed);
            }
            Ok(AppEvent::Paste(text)) => {
                app.insert_text(&text);
                dirty.store(true, Ordering::Relaxed);
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => dirty.store(true, Ordering::Relaxed),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
