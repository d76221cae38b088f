//! cli
//!
//! Command-line interface: argument parsing and command dispatch.
//!
//! # Architecture
//!
//! `run` parses arguments, builds the execution [`Context`](crate::engine::Context)
//! from flags and the environment, and hands off to the command
//! handlers. Each handler runs its guard requirements first and only
//! then does its work; errors bubble up as `anyhow::Error` and are
//! rendered once, in `main`.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ConfigAction, GenerateArgs};

use anyhow::Result;

use crate::core::storage::Store;
use crate::engine::{self, Context};

/// Parse arguments, build the context, and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
        interactive: cli.interactive(),
        api_key_override: std::env::var(engine::ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty()),
        store: Store::open_default(),
    };

    commands::dispatch(cli, &ctx)
}
