//! Implementation of `streem path`.

use std::process::ExitCode;

use super::require_node;
use crate::cli::{args::PathCommand, context::CommandContext, output::print_json};

/// Prints the root-first path to a node.
pub fn run(ctx: &CommandContext, cmd: &PathCommand) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    if let Err(code) = require_node(&store, &cmd.id) {
        return code;
    }

    let path = store.find_path(&cmd.id);
    if cmd.output.json {
        return print_json(&path);
    }
    let crumbs: Vec<&str> = path
        .iter()
        .map(|node| node.text().lines().next().unwrap_or_default())
        .collect();
    println!("> {}", crumbs.join(" › "));
    ExitCode::SUCCESS
}
