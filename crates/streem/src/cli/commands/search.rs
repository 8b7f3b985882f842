//! Implementation of `streem search`.

use std::process::ExitCode;

use streem_search::Searcher;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, print_json, print_tree, subheader},
};

/// Searches the node list and prints each result group as a tree.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut searcher = match Searcher::from_language_name(&ctx.config.search.stemmer) {
        Ok(searcher) => searcher,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let groups = searcher.search(&store, &query).ranked_trees();

    if cmd.output.json {
        return print_json(&groups);
    }
    if groups.is_empty() {
        println!("{}", dim("No result groups."));
        return ExitCode::SUCCESS;
    }
    for group in &groups {
        println!(
            "{} {}",
            subheader(&group.key),
            dim(&format!("({} matches)", group.matches))
        );
        print_tree(&group.tree);
        println!();
    }
    ExitCode::SUCCESS
}
