use crate::store::{Binding, Store};
use crate::todo::{TodoEffect, TodoError, TodoIntent, TodoReducer};

/// View-layer state: the store handle plus screen chrome.
///
/// The selection cursor and quit flag belong to the view, not the store;
/// the todo list itself is only ever read through `store().snapshot()`.
pub struct App {
    store: Store<TodoReducer>,
    selection: usize,
    should_quit: bool,
    last_rejection: Option<String>,
}

impl App {
    pub fn new(store: Store<TodoReducer>) -> Self {
        Self {
            store,
            selection: 0,
            should_quit: false,
            last_rejection: None,
        }
    }

    pub fn store(&self) -> &Store<TodoReducer> {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The most recent rejected intent, cleared by the next accepted one.
    pub fn last_rejection(&self) -> Option<&str> {
        self.last_rejection.as_deref()
    }

    /// Selection cursor, clamped to the list.
    pub fn selection(&self) -> usize {
        match self.list_len() {
            0 => 0,
            len => self.selection.min(len - 1),
        }
    }

    /// Move the selection cursor up (`-1`) or down (`1`), wrapping.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.list_len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Checkbox gesture: flip the selected row's completion flag.
    pub fn toggle_selected(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let result = self.store.dispatch(TodoIntent::ToggleComplete { index });
        self.note_outcome(result);
    }

    /// Text-field gesture: append one character to the selected row.
    pub fn append_char(&mut self, ch: char) {
        self.edit_selected(|text| text.push(ch));
    }

    /// Text-field gesture: delete the last character of the selected row.
    pub fn delete_char(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let binding = self.description_binding(index);
        let mut text = binding.get();
        if text.pop().is_none() {
            return;
        }
        let result = binding.set(text);
        self.note_outcome(result);
    }

    /// Paste gesture: append a block of text to the selected row.
    pub fn insert_text(&mut self, pasted: &str) {
        if pasted.is_empty() {
            return;
        }
        self.edit_selected(|text| text.push_str(pasted));
    }

    /// Read-modify-dispatch through the description binding. Every edit
    /// goes out as a full `ChangeDescription`, one per keystroke.
    fn edit_selected(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let binding = self.description_binding(index);
        let mut text = binding.get();
        edit(&mut text);
        let result = binding.set(text);
        self.note_outcome(result);
    }

    fn description_binding(&self, index: usize) -> Binding<TodoReducer, String> {
        self.store.bind(
            move |state| {
                state
                    .todos
                    .get(index)
                    .map(|todo| todo.description.clone())
                    .unwrap_or_default()
            },
            move |text| TodoIntent::ChangeDescription { index, text },
        )
    }

    fn note_outcome(&mut self, result: Result<TodoEffect, TodoError>) {
        match result {
            // The only effect today is None; nothing to interpret.
            Ok(TodoEffect::None) => self.last_rejection = None,
            Err(err) => self.last_rejection = Some(err.to_string()),
        }
    }

    fn selected_index(&self) -> Option<usize> {
        match self.list_len() {
            0 => None,
            len => Some(self.selection.min(len - 1)),
        }
    }

    fn list_len(&self) -> usize {
        self.store.snapshot().len()
    }
}
