//! Implementation of `streem status`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL};
use streem_config::discover_config_files;
use streem_graph::build_tree;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader},
};

/// Shows configuration files and node list statistics.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("{}", subheader("Config files:"));
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    for path in &config_files {
        println!("   {}", path.display());
    }
    if let Some(root) = &ctx.config.config_root {
        println!("{} {}", subheader("Config root:"), root.display());
    }
    println!();

    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let roots = store.get_children(None).len();
    let deleted = store.nodes().iter().filter(|n| n.deleted).count();
    let height = build_tree(store.nodes(), None).height;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Store", "Nodes", "Roots", "Deleted", "Depth"]);
    table.add_row(vec![
        ctx.store_path.display().to_string(),
        store.len().to_string(),
        roots.to_string(),
        deleted.to_string(),
        height.to_string(),
    ]);
    println!("{table}");
    ExitCode::SUCCESS
}
