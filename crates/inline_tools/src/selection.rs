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

//! Selection management.
//!
//! A [`Selection`] is the host-side snapshot of what the user has
//! highlighted: absent, a collapsed caret, or an anchor/focus pair. The
//! model holds a single range; a multi-range platform selection is
//! reduced to its first range before it reaches the tools.

use crate::dom::range::DomRange;
use crate::dom::{Dom, NodeId};

/// A position inside a text node, in UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub node: NodeId,
    pub offset: usize,
}

impl Location {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// The current selection, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: Option<Location>,
    focus: Option<Location>,
}

impl Selection {
    /// No selection at all (e.g. focus is outside the editor).
    pub fn none() -> Self {
        Self::default()
    }

    /// A collapsed caret.
    pub fn caret(at: Location) -> Self {
        Self {
            anchor: Some(at),
            focus: Some(at),
        }
    }

    /// An anchor/focus pair; focus may precede anchor for backward
    /// selections.
    pub fn between(anchor: Location, focus: Location) -> Self {
        Self {
            anchor: Some(anchor),
            focus: Some(focus),
        }
    }

    /// Select the full text contents of a node's subtree.
    pub fn node_contents(dom: &Dom, node: NodeId) -> Self {
        let (Some(first), Some(last)) = (
            dom.first_text_descendant(node),
            dom.last_text_descendant(node),
        ) else {
            return Self::none();
        };
        let Ok(len) = dom.text_len_utf16(last) else {
            return Self::none();
        };
        Self::between(Location::new(first, 0), Location::new(last, len))
    }

    pub fn anchor(&self) -> Option<Location> {
        self.anchor
    }

    pub fn focus(&self) -> Option<Location> {
        self.focus
    }

    pub fn is_none(&self) -> bool {
        self.anchor.is_none()
    }

    /// Whether the selection is a caret (or absent entirely).
    pub fn is_collapsed(&self) -> bool {
        match (self.anchor, self.focus) {
            (Some(anchor), Some(focus)) => anchor == focus,
            (Some(_), None) => true,
            _ => true,
        }
    }

    /// The selection's single range, normalized to document order.
    ///
    /// `None` when the selection is absent or its endpoints no longer
    /// resolve against the document.
    pub fn primary_range(&self, dom: &Dom) -> Option<DomRange> {
        let anchor = self.anchor?;
        let focus = self.focus.unwrap_or(anchor);
        DomRange::between(dom, anchor, focus).ok()
    }

    pub fn clear(&mut self) {
        *self = Self::none();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_text(text: &str) -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let node = dom.create_text(text);
        dom.append_child(dom.root(), node)
            .expect("append to root");
        (dom, node)
    }

    #[test]
    fn absent_selection_is_collapsed_and_has_no_range() {
        let (dom, _) = doc_with_text("hello");
        let selection = Selection::none();
        assert!(selection.is_none());
        assert!(selection.is_collapsed());
        assert!(selection.primary_range(&dom).is_none());
        assert!(selection.anchor().is_none());
    }

    #[test]
    fn caret_is_collapsed_but_present() {
        let (dom, node) = doc_with_text("hello");
        let selection = Selection::caret(Location::new(node, 2));
        assert!(!selection.is_none());
        assert!(selection.is_collapsed());
        let range = selection.primary_range(&dom).expect("range");
        assert!(range.is_collapsed());
    }

    #[test]
    fn forward_selection_produces_ordered_range() {
        let (dom, node) = doc_with_text("hello");
        let selection = Selection::between(
            Location::new(node, 1),
            Location::new(node, 4),
        );
        assert!(!selection.is_collapsed());
        let range = selection.primary_range(&dom).expect("range");
        assert_eq!(range.start.offset, 1);
        assert_eq!(range.end.offset, 4);
    }

    #[test]
    fn backward_selection_normalizes() {
        let (dom, node) = doc_with_text("hello");
        let selection = Selection::between(
            Location::new(node, 4),
            Location::new(node, 1),
        );
        let range = selection.primary_range(&dom).expect("range");
        assert_eq!(range.start.offset, 1);
        assert_eq!(range.end.offset, 4);
        // The anchor itself is untouched by normalization.
        assert_eq!(selection.anchor(), Some(Location::new(node, 4)));
    }

    #[test]
    fn node_contents_spans_first_to_last_text() {
        let (dom, node) = doc_with_text("hello");
        let selection = Selection::node_contents(&dom, dom.root());
        let range = selection.primary_range(&dom).expect("range");
        assert_eq!(range.start, Location::new(node, 0));
        assert_eq!(range.end, Location::new(node, 5));
    }

    #[test]
    fn node_contents_of_an_empty_subtree_is_none() {
        let dom = Dom::new();
        let selection = Selection::node_contents(&dom, dom.root());
        assert!(selection.is_none());
    }
}
