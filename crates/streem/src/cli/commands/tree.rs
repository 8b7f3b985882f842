//! Implementation of `streem tree`.

use std::process::ExitCode;

use streem_graph::build_tree;

use super::require_node;
use crate::cli::{
    args::TreeCommand,
    context::CommandContext,
    output::{print_json, print_tree},
};

/// Prints the whole forest, or the sub-tree below `--root`.
pub fn run(ctx: &CommandContext, cmd: &TreeCommand) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    if let Some(root) = &cmd.root
        && let Err(code) = require_node(&store, root)
    {
        return code;
    }

    let tree = build_tree(store.nodes(), cmd.root.as_deref());
    if cmd.output.json {
        return print_json(&tree);
    }
    print_tree(&tree);
    ExitCode::SUCCESS
}
