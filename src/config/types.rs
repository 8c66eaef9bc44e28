use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    /// Items placed in the list at startup. Read-only seeding; the list
    /// is never written back.
    #[serde(default)]
    pub seed: Vec<SeedTodo>,
}

/// UI timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick cadence in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// One seeded list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTodo {
    pub description: String,
    #[serde(default)]
    pub complete: bool,
}
