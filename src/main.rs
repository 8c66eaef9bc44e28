use anyhow::Context;
use clap::Parser;

use tuido::cli::Cli;
use tuido::config::Config;
use tuido::todo::{TodoItem, TodoListState};
use tuido::trace::init_tracing;
use tuido::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let initial = if cli.demo {
        TodoListState::demo()
    } else {
        seed_state(&config)
    };

    runtime::run(&config, initial).context("terminal ui failed")?;
    Ok(())
}

/// Build the starting list from the configured seed entries.
fn seed_state(config: &Config) -> TodoListState {
    TodoListState::new(
        config
            .seed
            .iter()
            .map(|seed| {
                if seed.complete {
                    TodoItem::completed(seed.description.as_str())
                } else {
                    TodoItem::new(seed.description.as_str())
                }
            })
            .collect(),
    )
}
