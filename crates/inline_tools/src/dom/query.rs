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

//! Ancestor and coverage queries over the document tree.
//!
//! [`closest`] is the approximate anchor-ancestor heuristic used by the
//! tools' `check_state`: it consults a single position and can disagree
//! with the true formatting of a partially formatted multi-node selection.
//! [`range_fully_covered`] is the exact check: every text node in the
//! range must carry the formatting ancestor.

use crate::dom::range::DomRange;
use crate::dom::{Dom, NodeId};
use crate::DomError;

/// Nearest ancestor-or-self element whose tag matches, ignoring ASCII
/// case. For a text node the walk starts at its parent.
pub fn closest(dom: &Dom, node: NodeId, tag: &str) -> Option<NodeId> {
    closest_matching(dom, node, |data| data.tag.eq_ignore_ascii_case(tag))
}

/// Like [`closest`], additionally requiring a class on the element.
pub fn closest_with_class(
    dom: &Dom,
    node: NodeId,
    tag: &str,
    class: &str,
) -> Option<NodeId> {
    closest_matching(dom, node, |data| {
        data.tag.eq_ignore_ascii_case(tag) && data.has_class(class)
    })
}

fn closest_matching(
    dom: &Dom,
    node: NodeId,
    matches: impl Fn(&crate::dom::ElementData) -> bool,
) -> Option<NodeId> {
    let start = if dom.is_text(node) {
        dom.parent(node)?
    } else {
        node
    };
    std::iter::once(start)
        .chain(dom.ancestors(start))
        .find(|&candidate| dom.element(candidate).is_some_and(&matches))
}

/// All text nodes touched by `range`, in document order. Boundary nodes
/// are included even when only partially covered.
pub fn text_nodes_in_range(
    dom: &Dom,
    range: DomRange,
) -> Result<Vec<NodeId>, DomError> {
    let DomRange { start, end } = range;
    if start.node == end.node {
        return Ok(vec![start.node]);
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
    let start_index = dom
        .index_in_parent(start.node)
        .ok_or(DomError::DetachedNode(start.node))?;
    let end_index = dom
        .index_in_parent(end.node)
        .ok_or(DomError::DetachedNode(end.node))?;
    if start_index > end_index {
        return Err(DomError::NonExtractableRange);
    }

    let mut out = Vec::new();
    for &child in &dom.children(parent)[start_index..=end_index] {
        out.extend(dom.text_descendants(child));
    }
    Ok(out)
}

/// Exact coverage check: does every text node in `range` have a matching
/// formatting ancestor?
///
/// Returns `false` for ranges whose shape is unsupported; an uncovered
/// answer keeps callers on the conservative "apply" path.
pub fn range_fully_covered(
    dom: &Dom,
    range: DomRange,
    tag: &str,
    class: Option<&str>,
) -> bool {
    let Ok(nodes) = text_nodes_in_range(dom, range) else {
        return false;
    };
    if nodes.is_empty() {
        return false;
    }
    nodes.iter().all(|&node| match class {
        Some(class) => closest_with_class(dom, node, tag, class).is_some(),
        None => closest(dom, node, tag).is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementData;
    use crate::selection::Location;

    fn bold_doc() -> (Dom, NodeId, NodeId, NodeId) {
        // <div>plain<b>bold</b></div>
        let mut dom = Dom::new();
        let root = dom.root();
        let plain = dom.create_text("plain");
        let bold = dom.create_element(ElementData::new("b"));
        let inner = dom.create_text("bold");
        dom.append_child(root, plain).expect("append");
        dom.append_child(root, bold).expect("append");
        dom.append_child(bold, inner).expect("append");
        (dom, plain, bold, inner)
    }

    #[test]
    fn closest_finds_the_wrapping_element() {
        let (dom, _, bold, inner) = bold_doc();
        assert_eq!(closest(&dom, inner, "b"), Some(bold));
        // Tag comparison ignores ASCII case, as the platform API does.
        assert_eq!(closest(&dom, inner, "B"), Some(bold));
    }

    #[test]
    fn closest_misses_outside_the_element() {
        let (dom, plain, _, _) = bold_doc();
        assert_eq!(closest(&dom, plain, "b"), None);
    }

    #[test]
    fn closest_starts_from_the_element_itself() {
        let (dom, _, bold, _) = bold_doc();
        assert_eq!(closest(&dom, bold, "b"), Some(bold));
    }

    #[test]
    fn closest_with_class_requires_both() {
        let mut dom = Dom::new();
        let root = dom.root();
        let span = dom.create_element(
            ElementData::new("span").with_class("colored-text"),
        );
        let inner = dom.create_text("x");
        let bare = dom.create_element(ElementData::new("span"));
        let bare_inner = dom.create_text("y");
        dom.append_child(root, span).expect("append");
        dom.append_child(span, inner).expect("append");
        dom.append_child(root, bare).expect("append");
        dom.append_child(bare, bare_inner).expect("append");

        assert_eq!(
            closest_with_class(&dom, inner, "span", "colored-text"),
            Some(span)
        );
        assert_eq!(
            closest_with_class(&dom, bare_inner, "span", "colored-text"),
            None
        );
    }

    #[test]
    fn fully_covered_inside_a_bold_run() {
        let (dom, _, _, inner) = bold_doc();
        let range = DomRange {
            start: Location::new(inner, 0),
            end: Location::new(inner, 4),
        };
        assert!(range_fully_covered(&dom, range, "b", None));
    }

    #[test]
    fn not_covered_when_range_touches_plain_text() {
        let (dom, plain, _, _) = bold_doc();
        let range = DomRange {
            start: Location::new(plain, 0),
            end: Location::new(plain, 5),
        };
        assert!(!range_fully_covered(&dom, range, "b", None));
    }

    #[test]
    fn unsupported_range_shape_is_conservatively_uncovered() {
        // Start inside <b>, end in a root-level text node: the endpoints
        // have different parents, so the exact check refuses to answer
        // "covered" and callers stay on the apply path.
        let mut dom = Dom::new();
        let root = dom.root();
        let bold = dom.create_element(ElementData::new("b"));
        let inner = dom.create_text("bold");
        let plain = dom.create_text("plain");
        dom.append_child(root, bold).expect("append");
        dom.append_child(bold, inner).expect("append");
        dom.append_child(root, plain).expect("append");

        let range = DomRange {
            start: Location::new(inner, 0),
            end: Location::new(plain, 3),
        };
        assert!(!range_fully_covered(&dom, range, "b", None));
    }

    #[test]
    fn sibling_range_with_a_plain_text_node_is_not_covered() {
        // aa<b>bb</b>cc selected end to end: "aa" and "cc" have no <b>
        // ancestor, so the range is only partially formatted.
        let mut dom = Dom::new();
        let root = dom.root();
        let a = dom.create_text("aa");
        let bold = dom.create_element(ElementData::new("b"));
        let t = dom.create_text("bb");
        let c = dom.create_text("cc");
        dom.append_child(root, a).expect("append");
        dom.append_child(root, bold).expect("append");
        dom.append_child(bold, t).expect("append");
        dom.append_child(root, c).expect("append");

        let range = DomRange {
            start: Location::new(a, 0),
            end: Location::new(c, 2),
        };
        assert!(!range_fully_covered(&dom, range, "b", None));
    }

    #[test]
    fn covered_across_text_siblings_inside_one_wrapper() {
        // <b>aa cc</b> where the wrapper holds two text nodes.
        let mut dom = Dom::new();
        let root = dom.root();
        let bold = dom.create_element(ElementData::new("b"));
        let a = dom.create_text("aa");
        let c = dom.create_text("cc");
        dom.append_child(root, bold).expect("append");
        dom.append_child(bold, a).expect("append");
        dom.append_child(bold, c).expect("append");

        let range = DomRange {
            start: Location::new(a, 1),
            end: Location::new(c, 1),
        };
        assert!(range_fully_covered(&dom, range, "b", None));
    }
}
