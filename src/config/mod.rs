//! TOML configuration: tick rate and the optional startup seed list.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SeedTodo, UiConfig};
