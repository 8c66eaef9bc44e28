//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect) ──→ Store ──→ View
//!    ↑                                                  │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! - **Model**: immutable representation of application state
//! - **Intent**: user actions or system events
//! - **Effect**: a description of outside-world work the reducer requests
//! - **Reducer**: pure function transforming state in response to intents

mod effect;
mod intent;
mod model;
mod reducer;

pub use effect::Effect;
pub use intent::Intent;
pub use model::Model;
pub use reducer::Reducer;
