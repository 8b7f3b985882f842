//! Byte range utilities for emphasizing matched words.

use std::ops::Range;

/// Marker placed on both sides of an emphasized span.
pub const EMPHASIS: &str = "**";

/// Sorts byte ranges and merges overlapping ones.
///
/// Adjacent ranges stay separate so that each word gets its own markers.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort_by_key(|r| r.start);

    let mut merged = Vec::with_capacity(ranges.len());
    let mut current = ranges[0].clone();

    for range in ranges.into_iter().skip(1) {
        if range.start < current.end {
            current.end = current.end.max(range.end);
        } else {
            merged.push(current);
            current = range;
        }
    }
    merged.push(current);

    merged
}

/// Wraps each range of `text` in [`EMPHASIS`] markers.
///
/// Ranges must lie on character boundaries.
pub fn emphasize(text: &str, ranges: Vec<Range<usize>>) -> String {
    let ranges = merge_ranges(ranges);
    let mut out = String::with_capacity(text.len() + ranges.len() * EMPHASIS.len() * 2);
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(EMPHASIS);
        out.push_str(&text[range.clone()]);
        out.push_str(EMPHASIS);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}
