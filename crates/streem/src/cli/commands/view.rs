//! Implementation of `streem view`.

use std::process::ExitCode;

use streem_graph::{WindowPager, build_streem, filter_descendants};

use super::require_node;
use crate::cli::{
    args::ViewCommand,
    context::CommandContext,
    output::{dim, print_json, print_streem},
};

/// Prints the tail of the (optionally focused) note list.
pub fn run(ctx: &CommandContext, cmd: &ViewCommand) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    if let Some(focus) = &cmd.focus
        && let Err(code) = require_node(&store, focus)
    {
        return code;
    }

    let view = &ctx.config.view;
    let pager = WindowPager::new(cmd.limit.unwrap_or(view.limit), view.step);
    let filtered = filter_descendants(&store, cmd.focus.as_deref());
    let streem = build_streem(&store, &filtered, pager.limit);

    if cmd.output.json {
        return print_json(&streem);
    }
    if pager.has_more(filtered.len()) {
        let hidden = filtered.len() - pager.limit;
        let mut more = pager;
        more.load_more();
        println!(
            "{}",
            dim(&format!("... {hidden} earlier notes (--limit {})", more.limit))
        );
    }
    print_streem(&streem);
    if pager.can_load_less() {
        let mut less = pager;
        less.load_less();
        println!(
            "{}",
            dim(&format!("... showing fewer notes with --limit {}", less.limit))
        );
    }
    ExitCode::SUCCESS
}
