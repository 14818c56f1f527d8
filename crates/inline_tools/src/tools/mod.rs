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

//! The inline formatting tools: bold, italic and text color.
//!
//! Bold and italic are thin wrappers over a shared toggle; the color tool
//! adds a picker popover and wraps selections in a styled span.

mod bold;
mod italic;
mod text_color;

pub use bold::BoldTool;
pub use italic::ItalicTool;
pub use text_color::TextColorTool;

use tracing::{error, info};

use crate::commands::{toggle_inline, ToggleOutcome};
use crate::host::HostApi;
use crate::selection::Selection;
use crate::tool::ToolKind;
use crate::update::ToolUpdate;

/// Toggle `tag` on the host's current selection.
///
/// Absent or collapsed selections are logged and ignored. A failed
/// toggle restores the pre-operation document and reports `Keep`; the
/// error never propagates past this boundary.
pub(crate) fn apply_inline_format(
    api: &HostApi,
    tag: &'static str,
    kind: ToolKind,
) -> ToolUpdate {
    api.with_state(|state| {
        let Some(range) = state.selection.primary_range(&state.document)
        else {
            info!(tool = %kind, "no active selection; nothing to format");
            return ToolUpdate::keep();
        };
        if range.is_collapsed() {
            info!(tool = %kind, "selection is collapsed; nothing to format");
            return ToolUpdate::keep();
        }

        let snapshot = state.document.clone();
        match toggle_inline(&mut state.document, range, tag) {
            Ok(ToggleOutcome::Wrapped(wrapper)) => {
                state.selection =
                    Selection::node_contents(&state.document, wrapper);
                state.toolbar.close();
                ToolUpdate::replace_all(state.document.to_html())
            }
            Ok(ToggleOutcome::Unwrapped) => {
                // The selection's text nodes survive an unwrap untouched.
                state.toolbar.close();
                ToolUpdate::replace_all(state.document.to_html())
            }
            Err(error) => {
                error!(tool = %kind, %error, "failed to toggle formatting");
                state.document = snapshot;
                ToolUpdate::keep()
            }
        }
    })
}

/// The anchor-ancestor heuristic behind every tool's `check_state`.
pub(crate) fn anchor_has_ancestor(
    api: &HostApi,
    selection: &Selection,
    tag: &str,
    class: Option<&str>,
) -> bool {
    let Some(anchor) = selection.anchor() else {
        return false;
    };
    api.with_state(|state| match class {
        Some(class) => crate::dom::query::closest_with_class(
            &state.document,
            anchor.node,
            tag,
            class,
        )
        .is_some(),
        None => {
            crate::dom::query::closest(&state.document, anchor.node, tag)
                .is_some()
        }
    })
}
