//! Command implementations and dispatch.

pub mod edit;
pub mod init;
pub mod path;
pub mod search;
pub mod status;
pub mod tree;
pub mod view;

use std::process::ExitCode;

use streem_graph::NodeStore;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Tree(cmd) => tree::run(ctx, &cmd),
        Commands::View(cmd) => view::run(ctx, &cmd),
        Commands::Path(cmd) => path::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Add(cmd) => edit::add(ctx, &cmd),
        Commands::Indent(cmd) => edit::indent(ctx, &cmd),
        Commands::Outdent(cmd) => edit::outdent(ctx, &cmd),
        Commands::Delete(cmd) => edit::delete(ctx, &cmd),
        Commands::Status => status::run(ctx),
    }
}

/// Fails with a consistent message unless `id` is in the store.
fn require_node(store: &NodeStore, id: &str) -> Result<(), ExitCode> {
    if store.contains(id) {
        Ok(())
    } else {
        eprintln!("error: not found: {id}");
        Err(ExitCode::FAILURE)
    }
}
