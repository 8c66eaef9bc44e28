//! Reducer trait for MVI architecture.

use std::error::Error;

use super::effect::Effect;
use super::intent::Intent;
use super::model::Model;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: given the same state and intent it always produces
/// the same result, and it performs no work beyond computing it.
///
/// A rejected intent returns `Err` and the caller keeps the old state;
/// the reducer never mutates partway before failing.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Model;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect description returned with every accepted intent.
    type Effect: Effect;

    /// How this reducer rejects an intent it cannot apply.
    type Error: Error + Send + 'static;

    /// Process an intent and return the new state plus an effect.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
    ) -> Result<(Self::State, Self::Effect), Self::Error>;
}
