use crate::mvi::Intent;

/// User gestures on the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoIntent {
    /// Checkbox activated on the row at `index`: flip its completion flag.
    ToggleComplete { index: usize },
    /// Text field on the row at `index` changed: `text` replaces the
    /// description verbatim. Sent on every keystroke, not on commit.
    ChangeDescription { index: usize, text: String },
}

impl Intent for TodoIntent {}
