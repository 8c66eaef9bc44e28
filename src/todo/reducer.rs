use thiserror::Error;

use crate::mvi::{Effect, Reducer};
use crate::todo::intent::TodoIntent;
use crate::todo::state::TodoListState;

/// Side-effect description produced by [`TodoReducer`].
///
/// Both intents are synchronous state edits, so the only variant is
/// `None`. The runtime still receives it so the reducer contract keeps
/// an effect channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoEffect {
    None,
}

impl Effect for TodoEffect {}

/// Rejections the reducer can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("index {index} out of range for {len} todos")]
    InvalidIndex { index: usize, len: usize },
}

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Intent = TodoIntent;
    type Effect = TodoEffect;
    type Error = TodoError;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> Result<(Self::State, Self::Effect), Self::Error> {
        let len = state.todos.len();
        match intent {
            TodoIntent::ToggleComplete { index } => {
                let todo = state
                    .todos
                    .get_mut(index)
                    .ok_or(TodoError::InvalidIndex { index, len })?;
                todo.is_complete = !todo.is_complete;
            }
            TodoIntent::ChangeDescription { index, text } => {
                let todo = state
                    .todos
                    .get_mut(index)
                    .ok_or(TodoError::InvalidIndex { index, len })?;
                // Verbatim replacement: no trimming, empty string allowed.
                todo.description = text;
            }
        }
        Ok((state, TodoEffect::None))
    }
}
