/*
 * toc.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Table of contents nesting from flat section records.
 */

//! Table of contents nesting.
//!
//! The sectionize pass records one [`SectionRecord`] per heading, in
//! document order. [`nest_toc`] turns that flat list into a tree of
//! [`TocNode`]s.
//!
//! ## Page title
//!
//! A non-empty list must contain exactly one depth-1 record. That record is
//! the page's own title: it is validated, then left out of the ToC.
//!
//! ## Nesting rule
//!
//! Records are processed in order while remembering the most recent node
//! seen at each depth. A record at depth `d` becomes a child of the most
//! recent node at the greatest remembered depth below `d`, or a new root if
//! there is none. Remembering a node at depth `d` replaces only the entry
//! for `d`; entries for deeper levels are kept. So for depths `2, 4, 3, 4`
//! the second depth-4 record attaches to the depth-3 node, while for
//! `3, 4, 2, 4` it attaches to the first depth-3 node, which is no longer
//! an ancestor of anything recent:
//!
//! ```text
//! 3 A          A
//! 4 B            B
//! 2 C   =>       D
//! 4 D          C
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One heading as seen by the sectionize pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub depth: u8,
    pub title: String,
    pub id: String,
}

impl SectionRecord {
    pub fn new(depth: u8, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            depth,
            title: title.into(),
            id: id.into(),
        }
    }
}

/// A single entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    pub depth: u8,
    pub title: String,
    pub id: String,

    /// Nested entries, in document order
    #[serde(default)]
    pub children: Vec<TocNode>,
}

impl From<SectionRecord> for TocNode {
    fn from(record: SectionRecord) -> Self {
        Self {
            depth: record.depth,
            title: record.title,
            id: record.id,
            children: Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TocError {
    #[error("Missing page title: no depth-1 heading found")]
    MissingPageTitle,

    #[error("Ambiguous page title: found {count} depth-1 headings, expected exactly one")]
    AmbiguousPageTitle { count: usize },
}

/// Nest flat section records into a table of contents.
///
/// An empty input yields an empty ToC. Otherwise exactly one record must
/// have depth 1; it is excluded from the result.
pub fn nest_toc(records: Vec<SectionRecord>) -> Result<Vec<TocNode>, TocError> {
    if records.is_empty() {
        return Ok(vec![]);
    }

    match records.iter().filter(|r| r.depth == 1).count() {
        0 => return Err(TocError::MissingPageTitle),
        1 => {}
        count => return Err(TocError::AmbiguousPageTitle { count }),
    }

    // Nodes are linked by index while nesting; every child index is greater
    // than its parent's.
    let mut nodes: Vec<Option<TocNode>> = Vec::with_capacity(records.len());
    let mut child_indices: Vec<Vec<usize>> = Vec::with_capacity(records.len());
    let mut roots: Vec<usize> = vec![];
    let mut latest_at_depth: BTreeMap<u8, usize> = BTreeMap::new();

    for record in records.into_iter().filter(|r| r.depth != 1) {
        let index = nodes.len();
        match latest_at_depth.range(..record.depth).next_back() {
            Some((_, &parent)) => child_indices[parent].push(index),
            None => roots.push(index),
        }
        latest_at_depth.insert(record.depth, index);
        nodes.push(Some(TocNode::from(record)));
        child_indices.push(vec![]);
    }

    // Attach children bottom-up so each subtree is complete before it moves.
    for index in (0..nodes.len()).rev() {
        let children: Vec<TocNode> = child_indices[index]
            .iter()
            .filter_map(|&child| nodes[child].take())
            .collect();
        if let Some(node) = nodes[index].as_mut() {
            node.children = children;
        }
    }

    Ok(roots
        .into_iter()
        .filter_map(|root| nodes[root].take())
        .collect())
}
