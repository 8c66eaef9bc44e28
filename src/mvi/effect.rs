//! Base trait for effect descriptions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for the value a reducer returns alongside the new state.
///
/// An effect describes work to be performed against the outside world; it
/// is not performed by the reducer, only interpreted later by the runtime.
/// The `Eq` bound keeps effects comparable so that effect determinacy
/// (same state and intent, same effect) stays testable.
pub trait Effect: Debug + Eq + Send + 'static {}
