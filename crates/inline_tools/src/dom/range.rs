// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ranges over the document tree and fragment extraction.
//!
//! Supported range shapes: both endpoints inside the same text node, or
//! inside sibling text nodes under one parent. Endpoints in unrelated
//! subtrees are a non-extractable boundary and fail with
//! [`DomError::NonExtractableRange`]; callers catch and log that case.

use crate::dom::{Dom, NodeId};
use crate::selection::Location;
use crate::DomError;

/// A directed range between two text positions, normalized so that
/// `start` precedes `end` in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomRange {
    pub start: Location,
    pub end: Location,
}

impl DomRange {
    /// Build a normalized range from two endpoints.
    pub fn between(
        dom: &Dom,
        a: Location,
        b: Location,
    ) -> Result<Self, DomError> {
        if document_order(dom, a, b)? == std::cmp::Ordering::Greater {
            Ok(Self { start: b, end: a })
        } else {
            Ok(Self { start: a, end: b })
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Where extracted contents were removed from, and where a replacement
/// should be inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionPoint {
    pub parent: NodeId,
    pub index: usize,
}

/// An ordered run of detached nodes produced by [`extract_contents`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub nodes: Vec<NodeId>,
}

impl Fragment {
    /// Concatenated text of the fragment, in order.
    pub fn text(&self, dom: &Dom) -> String {
        self.nodes.iter().map(|&n| dom.text_content(n)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Remove the contents of `range` from the document.
///
/// Boundary text nodes are split as needed; the covered run of siblings
/// is detached and returned together with the point where it was removed.
pub fn extract_contents(
    dom: &mut Dom,
    range: DomRange,
) -> Result<(Fragment, InsertionPoint), DomError> {
    let DomRange { start, end } = range;

    for endpoint in [start, end] {
        if !dom.is_text(endpoint.node) {
            return Err(DomError::NotAText(endpoint.node));
        }
    }

    let parent = dom
        .parent(start.node)
        .ok_or(DomError::DetachedNode(start.node))?;
    let end_parent = dom
        .parent(end.node)
        .ok_or(DomError::DetachedNode(end.node))?;
    if parent != end_parent {
        return Err(DomError::NonExtractableRange);
    }

    // Resolve the end boundary first: splitting there cannot disturb the
    // indices of anything at or before the start boundary.
    let mut end_index = split_point(dom, end.node, end.offset)?;
    let (start_index, start_split) =
        split_point_tracking(dom, start.node, start.offset)?;
    if start_split {
        end_index += 1;
    }

    if start_index > end_index || end_index > dom.children(parent).len() {
        // Un-normalized endpoints; nothing sensible to extract.
        return Err(DomError::NonExtractableRange);
    }
    let covered: Vec<NodeId> =
        dom.children(parent)[start_index..end_index].to_vec();
    for &node in &covered {
        dom.detach(node)?;
    }

    Ok((
        Fragment { nodes: covered },
        InsertionPoint {
            parent,
            index: start_index,
        },
    ))
}

/// Insert a detached node at an insertion point.
pub fn insert_at(
    dom: &mut Dom,
    point: InsertionPoint,
    node: NodeId,
) -> Result<(), DomError> {
    dom.insert_child(point.parent, point.index, node)
}

/// Turn a text position into a child-index boundary in the node's parent,
/// splitting the text node when the position is strictly inside it.
fn split_point(
    dom: &mut Dom,
    node: NodeId,
    offset: usize,
) -> Result<usize, DomError> {
    let (index, _) = split_point_tracking(dom, node, offset)?;
    Ok(index)
}

fn split_point_tracking(
    dom: &mut Dom,
    node: NodeId,
    offset: usize,
) -> Result<(usize, bool), DomError> {
    let len = dom.text_len_utf16(node)?;
    if offset > len {
        return Err(DomError::OffsetOutOfRange { node, offset, len });
    }
    let index = dom
        .index_in_parent(node)
        .ok_or(DomError::DetachedNode(node))?;
    if offset == 0 {
        Ok((index, false))
    } else if offset == len {
        Ok((index + 1, false))
    } else {
        let tail = dom.split_text(node, offset)?;
        let tail_index = dom
            .index_in_parent(tail)
            .ok_or(DomError::DetachedNode(tail))?;
        Ok((tail_index, true))
    }
}

/// Compare two text positions in document order.
pub fn document_order(
    dom: &Dom,
    a: Location,
    b: Location,
) -> Result<std::cmp::Ordering, DomError> {
    if a.node == b.node {
        return Ok(a.offset.cmp(&b.offset));
    }
    let path_a = path_from_root(dom, a.node)?;
    let path_b = path_from_root(dom, b.node)?;
    Ok(path_a.cmp(&path_b))
}

fn path_from_root(dom: &Dom, node: NodeId) -> Result<Vec<usize>, DomError> {
    let mut path = Vec::new();
    let mut current = node;
    while let Some(parent) = dom.parent(current) {
        let index = dom
            .index_in_parent(current)
            .ok_or(DomError::DetachedNode(current))?;
        path.push(index);
        current = parent;
    }
    if current != dom.root() {
        return Err(DomError::DetachedNode(node));
    }
    path.reverse();
    Ok(path)
}
