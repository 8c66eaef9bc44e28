//! Base trait for application state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait Model: Clone + PartialEq + Debug + Default + Send + 'static {}
