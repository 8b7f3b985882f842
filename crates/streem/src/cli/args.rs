//! Clap argument definitions for the `streem` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "streem")]
#[command(about = "Streem - an outliner journal over a flat note list")]
pub struct Cli {
    /// Node list file to use instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `streem init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `streem tree`.
#[derive(Args, Debug, Clone)]
pub struct TreeCommand {
    /// Only show the tree below this node
    #[arg(long)]
    pub root: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `streem view`.
#[derive(Args, Debug, Clone)]
pub struct ViewCommand {
    /// Restrict the view to this node and its descendants
    #[arg(short = 'f', long)]
    pub focus: Option<String>,

    /// Number of trailing notes to show [default: from config]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `streem path`.
#[derive(Args, Debug, Clone)]
pub struct PathCommand {
    /// Node id
    pub id: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `streem search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `streem add`.
#[derive(Args, Debug, Clone)]
pub struct AddCommand {
    /// Note text
    pub content: String,

    /// Parent node id
    #[arg(short = 'p', long)]
    pub parent: Option<String>,
}

/// Arguments for commands acting on a selection of nodes.
#[derive(Args, Debug, Clone)]
pub struct SelectionCommand {
    /// Selected node ids, first one decides the target
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Supported `streem` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a .streem.toml and an empty node list in the current directory
    Init(InitCommand),

    /// Print the full note tree
    Tree(TreeCommand),

    /// Print the most recent notes with their ancestors
    View(ViewCommand),

    /// Print the path from the root to a note
    Path(PathCommand),

    /// Search notes, grouped by the query words they match
    Search(SearchCommand),

    /// Append a note
    Add(AddCommand),

    /// Move notes under the previous sibling of the first one
    Indent(SelectionCommand),

    /// Move notes up one level
    Outdent(SelectionCommand),

    /// Mark notes as deleted
    Delete(SelectionCommand),

    /// Show configuration and node list statistics
    Status,
}
