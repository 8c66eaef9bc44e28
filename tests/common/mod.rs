//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tuido::store::Store;
use tuido::todo::{TodoItem, TodoListState, TodoReducer};
use tuido::ui::app::App;

/// Two-item starting list used by most tests.
pub fn grocery_state() -> TodoListState {
    TodoListState::new(vec![TodoItem::new("Milk"), TodoItem::new("Eggs")])
}

pub fn make_store(state: TodoListState) -> Store<TodoReducer> {
    Store::new(state)
}

pub fn make_app(state: TodoListState) -> App {
    App::new(Store::new(state))
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
