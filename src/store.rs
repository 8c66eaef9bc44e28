//! Store and subscription layer.
//!
//! The store is the single owner of the application state: it accepts an
//! intent, runs the reducer, installs the resulting state, and republishes
//! it to every observer. It is constructed once by the composition root
//! and handed to the view layer; there is no process-wide singleton.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::mvi::Reducer;

type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Clonable handle over one shared state cell.
///
/// All clones see the same state and the same subscriber registry.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    subscribers: Arc<Mutex<Vec<Subscriber<R::State>>>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.read().clone()
    }

    /// Apply one intent through the reducer.
    ///
    /// On success the new state is installed and every subscriber is
    /// called with it. On rejection the state is left untouched and no
    /// subscriber runs; the error is returned so the caller can decide
    /// whether to surface, log, or ignore it.
    pub fn dispatch(&self, intent: R::Intent) -> Result<R::Effect, R::Error> {
        let mut guard = self.state.write();
        tracing::debug!(intent = ?intent, "dispatch");
        match R::reduce((*guard).clone(), intent) {
            Ok((next, effect)) => {
                if next != *guard {
                    // Informational trace only, not a contract.
                    tracing::debug!(before = ?*guard, after = ?next, "state changed");
                }
                *guard = next.clone();
                drop(guard);
                self.notify(&next);
                Ok(effect)
            }
            Err(err) => {
                tracing::warn!(error = %err, "intent rejected");
                Err(err)
            }
        }
    }

    /// Register a change observer.
    ///
    /// Subscribers run on the dispatching thread after the new state is
    /// installed. They must not dispatch from inside the callback.
    pub fn subscribe(&self, subscriber: impl Fn(&R::State) + Send + Sync + 'static) {
        self.subscribers.lock().push(Box::new(subscriber));
    }

    /// Build a two-way accessor for one field of the state.
    ///
    /// `get` reads the displayed value out of a state snapshot; `send`
    /// turns an edited value into the intent that writes it back.
    pub fn bind<V>(
        &self,
        get: impl Fn(&R::State) -> V + Send + Sync + 'static,
        send: impl Fn(V) -> R::Intent + Send + Sync + 'static,
    ) -> Binding<R, V> {
        Binding {
            store: self.clone(),
            get: Arc::new(get),
            send: Arc::new(send),
        }
    }

    fn notify(&self, state: &R::State) {
        for subscriber in self.subscribers.lock().iter() {
            subscriber(state);
        }
    }
}

/// Two-way accessor linking a UI control's displayed value to a field in
/// state, translating edits back into intents.
pub struct Binding<R: Reducer, V> {
    store: Store<R>,
    get: Arc<dyn Fn(&R::State) -> V + Send + Sync>,
    send: Arc<dyn Fn(V) -> R::Intent + Send + Sync>,
}

impl<R: Reducer, V> Clone for Binding<R, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            get: Arc::clone(&self.get),
            send: Arc::clone(&self.send),
        }
    }
}

impl<R: Reducer, V> Binding<R, V> {
    /// Read the current value through a fresh snapshot.
    pub fn get(&self) -> V {
        (self.get)(&self.store.state.read())
    }

    /// Dispatch the intent that writes `value` back into the state.
    pub fn set(&self, value: V) -> Result<R::Effect, R::Error> {
        self.store.dispatch((self.send)(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{TodoIntent, TodoItem, TodoListState, TodoReducer};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_store() -> Store<TodoReducer> {
        Store::new(TodoListState::new(vec![
            TodoItem::new("Milk"),
            TodoItem::new("Eggs"),
        ]))
    }

    #[test]
    fn dispatch_installs_the_reduced_state() {
        let store = make_store();

        store
            .dispatch(TodoIntent::ToggleComplete { index: 0 })
            .unwrap();

        assert!(store.snapshot().todos[0].is_complete);
    }

    #[test]
    fn subscribers_see_each_new_state() {
        let store = make_store();
        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            store.subscribe(move |state: &TodoListState| {
                assert_eq!(state.len(), 2);
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        store
            .dispatch(TodoIntent::ToggleComplete { index: 0 })
            .unwrap();
        store
            .dispatch(TodoIntent::ChangeDescription {
                index: 1,
                text: "Bread".to_string(),
            })
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn rejection_leaves_state_untouched_and_silent() {
        let store = make_store();
        let before = store.snapshot();
        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            store.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        let err = store
            .dispatch(TodoIntent::ToggleComplete { index: 9 })
            .unwrap_err();

        assert_eq!(
            err,
            crate::todo::TodoError::InvalidIndex { index: 9, len: 2 }
        );
        assert_eq!(store.snapshot(), before);
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn binding_reads_and_writes_one_field() {
        let store = make_store();
        let binding = store.bind(
            |state: &TodoListState| state.todos[0].description.clone(),
            |text| TodoIntent::ChangeDescription { index: 0, text },
        );

        assert_eq!(binding.get(), "Milk");

        binding.set("Oat Milk".to_string()).unwrap();

        assert_eq!(binding.get(), "Oat Milk");
        assert_eq!(store.snapshot().todos[0].description, "Oat Milk");
    }
}
