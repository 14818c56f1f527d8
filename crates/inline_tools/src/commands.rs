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

//! Inline formatting commands.
//!
//! [`toggle_inline`] is the model-side equivalent of the platform's
//! native text-formatting command: applying it to an unformatted range
//! wraps the contents in the formatting tag, applying it to a fully
//! formatted range removes the formatting.
//!
//! The apply/remove decision uses the exact coverage check. The removal
//! unwraps whole formatting elements: when a wrapper extends past the
//! selection, formatting is removed for the wrapper's full extent.

use crate::dom::query::{closest, range_fully_covered, text_nodes_in_range};
use crate::dom::range::{extract_contents, insert_at, DomRange};
use crate::dom::{Dom, ElementData, NodeId};
use crate::DomError;

/// What a [`toggle_inline`] call did to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Formatting was applied; the new wrapper element.
    Wrapped(NodeId),
    /// Formatting was removed from the covering elements.
    Unwrapped,
}

/// Toggle an inline formatting tag on a range.
pub fn toggle_inline(
    dom: &mut Dom,
    range: DomRange,
    tag: &str,
) -> Result<ToggleOutcome, DomError> {
    if range_fully_covered(dom, range, tag, None) {
        remove_formatting(dom, range, tag)?;
        Ok(ToggleOutcome::Unwrapped)
    } else {
        let wrapper = surround(dom, range, ElementData::new(tag))?;
        Ok(ToggleOutcome::Wrapped(wrapper))
    }
}

/// Wrap the contents of `range` in a new element.
///
/// The range contents are extracted, appended to the new element, and the
/// element is reinserted where the contents were removed.
pub fn surround(
    dom: &mut Dom,
    range: DomRange,
    element: ElementData,
) -> Result<NodeId, DomError> {
    let (fragment, point) = extract_contents(dom, range)?;
    let wrapper = dom.create_element(element);
    for &node in &fragment.nodes {
        dom.append_child(wrapper, node)?;
    }
    insert_at(dom, point, wrapper)?;
    Ok(wrapper)
}

/// Unwrap every `tag` element covering a text node of `range`.
fn remove_formatting(
    dom: &mut Dom,
    range: DomRange,
    tag: &str,
) -> Result<(), DomError> {
    let mut wrappers: Vec<NodeId> = Vec::new();
    for node in text_nodes_in_range(dom, range)? {
        if let Some(wrapper) = closest(dom, node, tag) {
            if !wrappers.contains(&wrapper) {
                wrappers.push(wrapper);
            }
        }
    }
    for wrapper in wrappers {
        dom.unwrap_element(wrapper)?;
    }
    Ok(())
}
