//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use serde::Serialize;
use streem_graph::{Node, Streem, StreemNode, Tree, TreeNode};

/// ANSI color codes.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dimmed text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in `color` when stdout is a terminal.
fn paint(color: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("{color}{text}{}", colors::RESET)
    } else {
        text.to_string()
    }
}

/// Formats text as a subheader (bold cyan).
pub fn subheader(text: &str) -> String {
    paint(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Formats text as secondary information.
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

/// Formats text as a warning.
pub fn warning(text: &str) -> String {
    paint(colors::YELLOW, text)
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// One-line label for a node: first line of content plus its id.
fn label(node: &Node) -> String {
    let first_line = node.text().lines().next().unwrap_or_default();
    let mut line = format!("{first_line} {}", dim(&format!("[{}]", node.id)));
    if node.deleted {
        line.push_str(&format!(" {}", warning("(deleted)")));
    }
    line
}

/// Prints a tree as an indented outline.
pub fn print_tree(tree: &Tree) {
    for child in &tree.children {
        print_tree_node(child, 0);
    }
}

/// Prints one tree node and its descendants.
fn print_tree_node(node: &TreeNode, depth: usize) {
    println!("{}- {}", "  ".repeat(depth), label(&node.node));
    for child in &node.children {
        print_tree_node(child, depth + 1);
    }
}

/// Prints a windowed view as an indented outline.
///
/// Ancestors repeated after a gap are marked as continued.
pub fn print_streem(streem: &Streem) {
    for child in &streem.children {
        print_streem_node(child, 0);
    }
}

/// Prints one view node and its descendants.
fn print_streem_node(node: &StreemNode, depth: usize) {
    let mut line = format!("{}- {}", "  ".repeat(depth), label(&node.node));
    if node.iteration > 0 {
        line.push_str(&format!(" {}", dim("(continued)")));
    }
    println!("{line}");
    for child in &node.children {
        print_streem_node(child, depth + 1);
    }
}
