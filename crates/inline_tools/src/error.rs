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

use thiserror::Error;

use crate::dom::NodeId;

/// Failures raised by document tree operations.
///
/// Tool entry points catch and log these; they are never surfaced past the
/// tool boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("node {0:?} is not part of the document")]
    DetachedNode(NodeId),

    #[error("node {0:?} is already attached; detach it first")]
    AlreadyAttached(NodeId),

    #[error("node {0:?} is not a text node")]
    NotAText(NodeId),

    #[error("node {0:?} is not an element node")]
    NotAnElement(NodeId),

    #[error("offset {offset} is out of range for node {node:?} (len {len})")]
    OffsetOutOfRange {
        node: NodeId,
        offset: usize,
        len: usize,
    },

    #[error("offset {offset} splits a surrogate pair in node {node:?}")]
    OffsetInsideCharacter { node: NodeId, offset: usize },

    #[error("range endpoints do not share a parent; contents cannot be extracted")]
    NonExtractableRange,

    #[error("child index {index} is out of bounds for node {node:?}")]
    ChildIndexOutOfBounds { node: NodeId, index: usize },
}
