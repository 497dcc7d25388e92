//! Resolved regions and enclosing-region selection.
//!
//! A region is only materialized once a start marker has been closed by an
//! end marker. Pairing uses a stack discipline, not name matching: an end
//! marker closes the most recently opened region regardless of the path it
//! names, and the resolved region keeps the *start* marker's path. This
//! mismatch tolerance is contractual behavior, not an oversight.

use crate::engine::CommentNode;
use crate::marker::{Marker, MarkerGrammar};

/// A resolved region: a path scoped to an inclusive line range.
///
/// Immutable once materialized; a region set lives for one transform
/// invocation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The path relative URLs inside the region are joined onto.
    pub path: String,
    /// 1-based line of the start marker.
    pub start: usize,
    /// 1-based line of the matched end marker. Always `>= start`, since
    /// comments are visited in document order.
    pub end: usize,
}

impl Region {
    /// Whether `line` falls inside this region's inclusive range.
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// Resolve the document's comments into regions.
///
/// - A start marker pushes an open region.
/// - An end marker pops and completes the most recently pushed open region,
///   whatever path it names.
/// - Start markers still open at end of document are dropped silently, as
///   are end markers with no open start. Neither is an error.
/// - Duplicate and overlapping regions are all retained independently.
///
/// The returned order is completion order (stack-pop order), so with nested
/// markers the innermost region comes first.
#[must_use]
pub fn extract_regions(grammar: &MarkerGrammar, comments: &[CommentNode]) -> Vec<Region> {
    let mut open: Vec<(String, usize)> = Vec::new();
    let mut regions = Vec::new();

    for comment in comments {
        match grammar.parse(comment) {
            Some(Marker::Start { path, line }) => open.push((path, line)),
            Some(Marker::End { line, .. }) => {
                if let Some((path, start)) = open.pop() {
                    regions.push(Region {
                        path,
                        start,
                        end: line,
                    });
                }
            }
            None => {}
        }
    }

    regions
}

/// Select the most specific region containing `line`, if any.
///
/// A candidate replaces the current best only when its range is strictly
/// nested inside the best's range (`start` greater *and* `end` smaller).
/// Among overlapping candidates with no strict nesting, the first containing
/// region in scan order wins.
#[must_use]
pub fn enclosing_region(regions: &[Region], line: usize) -> Option<&Region> {
    let mut best: Option<&Region> = None;

    for region in regions {
        if !region.contains_line(line) {
            continue;
        }

        match best {
            Some(current) if !(region.start > current.start && region.end < current.end) => {}
            _ => best = Some(region),
        }
    }

    best
}
