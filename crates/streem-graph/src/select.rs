//! Selection and stepping over a filtered node list.

use crate::Node;

/// Returns the ids from `anchor` through `id`, inclusive, in list order.
///
/// Empty if either id is missing or `id` comes before `anchor`.
pub fn select_range(filtered: &[&Node], anchor: &str, id: &str) -> Vec<String> {
    let (Some(from), Some(to)) = (index_of(filtered, anchor), index_of(filtered, id)) else {
        return Vec::new();
    };
    if to < from {
        return Vec::new();
    }
    filtered[from..=to].iter().map(|n| n.id.clone()).collect()
}

/// Returns the entry before `id`, or the last entry when `id` is `None`.
pub fn previous_in<'a>(filtered: &[&'a Node], id: Option<&str>) -> Option<&'a Node> {
    match id {
        Some(id) => {
            let at = index_of(filtered, id)?;
            at.checked_sub(1).map(|p| filtered[p])
        }
        None => filtered.last().copied(),
    }
}

/// Returns the entry after `id`.
pub fn next_in<'a>(filtered: &[&'a Node], id: &str) -> Option<&'a Node> {
    let at = index_of(filtered, id)?;
    filtered.get(at + 1).copied()
}

/// Position of `id` in the list.
fn index_of(filtered: &[&Node], id: &str) -> Option<usize> {
    filtered.iter().position(|n| n.id == id)
}
