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

//! The arena-backed document tree that inline tools operate on.
//!
//! Nodes are either elements (tag, classes, inline styles, attributes) or
//! text. Text offsets are UTF-16 code units throughout, matching platform
//! text APIs. Nodes are never freed from the arena; a detached node simply
//! has no parent and is unreachable from the root.

use crate::DomError;

/// Handle to a node in a [`Dom`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Payload of a single node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

/// Tag, classes, inline styles and attributes of an element node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline style declarations, in insertion order.
    pub styles: Vec<(String, String)>,
    /// Attributes other than `class` and `style`.
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_style(mut self, name: &str, value: &str) -> Self {
        self.styles.push((name.to_string(), value.to_string()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The document tree.
///
/// Cloning a `Dom` produces a full snapshot with identical [`NodeId`]s,
/// which is how callers implement restore-on-failure.
#[derive(Clone, Debug)]
pub struct Dom {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Dom {
    /// Create a document with an empty block container as root.
    pub fn new() -> Self {
        let root_data = NodeData {
            kind: NodeKind::Element(ElementData::new("div")),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root_data],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.push_node(NodeKind::Element(data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(NodeKind::Text(text.to_string()))
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Text(_))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Element(_))
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id).kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id).kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Position of `id` among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Iterate the ancestor chain of `id`, nearest first (excludes `id`).
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
    ) -> Result<(), DomError> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child)
    }

    /// Insert a detached node at `index` among `parent`'s children.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), DomError> {
        if self.element(parent).is_none() {
            return Err(DomError::NotAnElement(parent));
        }
        if self.node(child).parent.is_some() {
            // Moving requires an explicit detach first.
            return Err(DomError::AlreadyAttached(child));
        }
        if index > self.children(parent).len() {
            return Err(DomError::ChildIndexOutOfBounds {
                node: parent,
                index,
            });
        }
        self.node_mut(parent).children.insert(index, child);
        self.node_mut(child).parent = Some(parent);
        self.assert_invariants();
        Ok(())
    }

    /// Detach `id` from its parent. The node keeps its own children.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let parent = self
            .parent(id)
            .ok_or(DomError::DetachedNode(id))?;
        self.node_mut(parent).children.retain(|&c| c != id);
        self.node_mut(id).parent = None;
        self.assert_invariants();
        Ok(())
    }

    /// Replace an element with its own children, in place.
    pub fn unwrap_element(&mut self, id: NodeId) -> Result<(), DomError> {
        if self.element(id).is_none() {
            return Err(DomError::NotAnElement(id));
        }
        let parent = self
            .parent(id)
            .ok_or(DomError::DetachedNode(id))?;
        let index = self
            .index_in_parent(id)
            .ok_or(DomError::DetachedNode(id))?;
        let children: Vec<NodeId> = self.children(id).to_vec();
        self.detach(id)?;
        for (offset, child) in children.into_iter().enumerate() {
            self.node_mut(id).children.retain(|&c| c != child);
            self.node_mut(child).parent = None;
            self.insert_child(parent, index + offset, child)?;
        }
        self.assert_invariants();
        Ok(())
    }

    /// Length of a text node in UTF-16 code units.
    pub fn text_len_utf16(&self, id: NodeId) -> Result<usize, DomError> {
        let text = self.text(id).ok_or(DomError::NotAText(id))?;
        Ok(text.encode_utf16().count())
    }

    /// Concatenated text content of the subtree rooted at `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(_) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// All text nodes in the subtree rooted at `id`, in document order.
    pub fn text_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_text_nodes(id, &mut out);
        out
    }

    fn collect_text_nodes(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match &self.node(id).kind {
            NodeKind::Text(_) => out.push(id),
            NodeKind::Element(_) => {
                for &child in self.children(id) {
                    self.collect_text_nodes(child, out);
                }
            }
        }
    }

    pub fn first_text_descendant(&self, id: NodeId) -> Option<NodeId> {
        self.text_descendants(id).first().copied()
    }

    pub fn last_text_descendant(&self, id: NodeId) -> Option<NodeId> {
        self.text_descendants(id).last().copied()
    }

    /// Split a text node at a UTF-16 offset strictly inside it.
    ///
    /// The node keeps `[0, offset)`; the returned new node holds
    /// `[offset, len)` and is inserted immediately after it.
    pub fn split_text(
        &mut self,
        id: NodeId,
        offset: usize,
    ) -> Result<NodeId, DomError> {
        let text = self
            .text(id)
            .ok_or(DomError::NotAText(id))?
            .to_string();
        let len = text.encode_utf16().count();
        if offset == 0 || offset >= len {
            return Err(DomError::OffsetOutOfRange {
                node: id,
                offset,
                len,
            });
        }
        let byte_index = utf16_to_byte_index(&text, offset)
            .ok_or(DomError::OffsetInsideCharacter { node: id, offset })?;

        let parent = self
            .parent(id)
            .ok_or(DomError::DetachedNode(id))?;
        let index = self
            .index_in_parent(id)
            .ok_or(DomError::DetachedNode(id))?;

        let (head, tail) = text.split_at(byte_index);
        let tail = tail.to_string();
        if let NodeKind::Text(stored) = &mut self.node_mut(id).kind {
            *stored = head.to_string();
        }
        let new_node = self.create_text(&tail);
        self.insert_child(parent, index + 1, new_node)?;
        Ok(new_node)
    }

    /// Debug rendering of the tree, one node per line.
    pub fn to_tree(&self) -> String {
        let mut out = String::new();
        self.fmt_node(self.root, "", true, true, &mut out);
        out
    }

    fn fmt_node(
        &self,
        id: NodeId,
        prefix: &str,
        is_last: bool,
        is_root: bool,
        out: &mut String,
    ) {
        let label = match &self.node(id).kind {
            NodeKind::Text(text) => format!("\"{text}\""),
            NodeKind::Element(data) => {
                let mut label = data.tag.clone();
                for class in &data.classes {
                    label.push('.');
                    label.push_str(class);
                }
                if !data.styles.is_empty() {
                    let styles: Vec<String> = data
                        .styles
                        .iter()
                        .map(|(n, v)| format!("{n}: {v}"))
                        .collect();
                    label.push_str(&format!(" {{{}}}", styles.join("; ")));
                }
                label
            }
        };

        let child_prefix;
        if is_root {
            out.push_str(&label);
            out.push('\n');
            child_prefix = String::new();
        } else {
            let connector = if is_last { "└─ " } else { "├─ " };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&label);
            out.push('\n');
            child_prefix =
                format!("{prefix}{}", if is_last { "   " } else { "│  " });
        }

        let children = self.children(id).to_vec();
        for (i, child) in children.iter().enumerate() {
            self.fmt_node(
                *child,
                &child_prefix,
                i + 1 == children.len(),
                false,
                out,
            );
        }
    }

    /// Structural self-check, compiled in with the `assert-invariants`
    /// feature and a no-op otherwise.
    pub fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.check_invariants();
    }

    #[cfg(feature = "assert-invariants")]
    fn check_invariants(&self) {
        assert!(
            self.node(self.root).parent.is_none(),
            "root must not have a parent"
        );
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index);
            for &child in &node.children {
                assert_eq!(
                    self.node(child).parent,
                    Some(id),
                    "child {child:?} of {id:?} has a stale parent link"
                );
            }
            // Walking up must terminate well before the arena is exhausted.
            let mut hops = 0;
            let mut current = node.parent;
            while let Some(parent) = current {
                hops += 1;
                assert!(hops <= self.nodes.len(), "parent chain cycle at {id:?}");
                current = self.node(parent).parent;
            }
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a UTF-16 code-unit offset into a byte index of `text`.
///
/// Returns `None` when the offset lands inside a surrogate pair.
fn utf16_to_byte_index(text: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte_index, ch) in text.char_indices() {
        if units == offset {
            return Some(byte_index);
        }
        if units > offset {
            return None;
        }
        units += ch.len_utf16();
    }
    if units == offset {
        Some(text.len())
    } else {
        None
    }
}
