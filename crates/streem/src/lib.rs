//! streem: an outliner journal.
//!
//! Notes are kept as a flat list of parent-linked nodes in a JSON file. The
//! `streem` binary loads that list, hands it to the note graph and search
//! crates, and prints trees, windowed views and grouped search results.

#![warn(missing_docs)]

pub mod cli;
