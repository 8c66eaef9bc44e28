//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses, edits) and are processed
/// by reducers to produce new states. They are plain data and carry
/// everything the reducer needs (the target index, the new value).
pub trait Intent: Debug + Send + 'static {}
