use crate::mvi::Model;
use uuid::Uuid;

/// Stable identity for a todo row.
///
/// Assigned when the item is created and never reassigned; unique within
/// the list. Used only so rows keep their identity across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in the list: free-text description plus a completion flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    pub description: String,
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            description: description.into(),
            is_complete: false,
        }
    }

    pub fn completed(description: impl Into<String>) -> Self {
        Self {
            is_complete: true,
            ..Self::new(description)
        }
    }
}

/// The whole application state: an ordered list of todos.
///
/// Ordering is display order. No intent adds or removes items, so the
/// length is fixed for the lifetime of the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoListState {
    pub todos: Vec<TodoItem>,
}

impl Model for TodoListState {}

impl TodoListState {
    pub fn new(todos: Vec<TodoItem>) -> Self {
        Self { todos }
    }

    /// The seed list shown by `--demo`.
    pub fn demo() -> Self {
        Self::new(vec![
            TodoItem::new("Milk"),
            TodoItem::new("Eggs"),
            TodoItem::completed("Hand Soap"),
        ])
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_complete).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(TodoListState::default(), TodoListState::new(Vec::new()));
    }

    #[test]
    fn new_item_starts_incomplete() {
        let item = TodoItem::new("Milk");
        assert_eq!(item.description, "Milk");
        assert!(!item.is_complete);
    }

    #[test]
    fn ids_are_unique() {
        let a = TodoItem::new("Milk");
        let b = TodoItem::new("Milk");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn demo_seed_shape() {
        let state = TodoListState::demo();
        assert_eq!(state.len(), 3);
        assert_eq!(state.completed_count(), 1);
        assert!(state.todos[2].is_complete);
    }
}
