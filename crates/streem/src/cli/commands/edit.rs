//! Implementations of `streem add`, `indent`, `outdent` and `delete`.

use std::process::ExitCode;

use chrono::Utc;
use streem_graph::{GraphError, Node, NodeStore, edit};
use uuid::Uuid;

use crate::cli::{
    args::{AddCommand, SelectionCommand},
    context::CommandContext,
};

/// Appends a note with a fresh time-ordered id.
pub fn add(ctx: &CommandContext, cmd: &AddCommand) -> ExitCode {
    let id = Uuid::now_v7().to_string();
    let created = Utc::now().timestamp_millis();
    let result = apply(ctx, |store| {
        edit::new_node(store, id.clone(), created, &cmd.content, cmd.parent.as_deref())
    });
    match result {
        Ok(()) => {
            println!("{id}");
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

/// Indents the selected notes.
pub fn indent(ctx: &CommandContext, cmd: &SelectionCommand) -> ExitCode {
    apply(ctx, |store| edit::indent(store, &selection(cmd)))
        .map_or_else(|code| code, |()| ExitCode::SUCCESS)
}

/// Outdents the selected notes.
pub fn outdent(ctx: &CommandContext, cmd: &SelectionCommand) -> ExitCode {
    apply(ctx, |store| edit::outdent(store, &selection(cmd)))
        .map_or_else(|code| code, |()| ExitCode::SUCCESS)
}

/// Tombstones the selected notes.
pub fn delete(ctx: &CommandContext, cmd: &SelectionCommand) -> ExitCode {
    apply(ctx, |store| edit::delete(store, &selection(cmd)))
        .map_or_else(|code| code, |()| ExitCode::SUCCESS)
}

/// Borrows the selected ids.
fn selection(cmd: &SelectionCommand) -> Vec<&str> {
    cmd.ids.iter().map(String::as_str).collect()
}

/// Loads the store, applies `edit_fn`, and saves the result.
fn apply(
    ctx: &CommandContext,
    edit_fn: impl FnOnce(&NodeStore) -> Result<Vec<Node>, GraphError>,
) -> Result<(), ExitCode> {
    let store = ctx.store()?;
    let nodes = edit_fn(&store).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    ctx.save(&nodes)
}
