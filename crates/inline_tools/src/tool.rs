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

//! Defines the [`InlineTool`] trait: the plugin contract between the
//! host editor and each inline formatting tool.
//!
//! The host constructs a tool with a [`HostApi`](crate::HostApi) handle,
//! calls `render` to obtain its toolbar button, reflects `check_state` in
//! the button styling, routes clicks in, and calls `destroy` on
//! teardown.

use swatches::PaletteColor;

use crate::events::ClickEvent;
use crate::sanitize::SanitizePolicy;
use crate::selection::Selection;
use crate::ui::ToolbarButton;
use crate::update::ToolUpdate;

use strum_macros::{AsRefStr, Display, EnumIter};

/// The tools this crate ships.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter,
)]
pub enum ToolKind {
    Bold,
    Italic,
    TextColor,
}

/// An inline formatting tool.
///
/// Mutating entry points return a [`ToolUpdate`]; they never panic and
/// never surface an error: failures are logged and the document is left
/// unchanged.
pub trait InlineTool {
    fn kind(&self) -> ToolKind;

    /// Marks the tool as inline-level for the host's tool registry.
    fn is_inline(&self) -> bool {
        true
    }

    /// The markup allow-list for this tool's output.
    fn sanitize(&self) -> &'static SanitizePolicy;

    /// Create the toolbar button and register its click listener.
    ///
    /// Calling this more than once per instance registers a second
    /// listener; the host contract calls it exactly once.
    fn render(&mut self) -> ToolbarButton;

    /// The rendered button, if `render` has been called.
    fn button(&self) -> Option<&ToolbarButton>;

    /// Reflect active state on the rendered button.
    fn set_active(&mut self, active: bool);

    /// A click on the tool's button. Suppresses the default action and
    /// propagation, then applies the tool's formatting.
    fn handle_click(&mut self, event: &mut ClickEvent) -> ToolUpdate;

    /// Whether the selection already carries this tool's formatting.
    ///
    /// Heuristic: only the anchor's ancestor chain is consulted, so the
    /// answer can be wrong for partially formatted multi-node
    /// selections. `false` whenever the selection has no anchor.
    fn check_state(&self, selection: &Selection) -> bool;

    /// Remove the tool's listeners. The button itself stays in the
    /// toolbar; the host tears the widget down with the toolbar slot.
    fn destroy(&mut self);

    /// A click anywhere in the document. Default: ignore.
    fn handle_document_click(&mut self, _event: &ClickEvent) {}

    /// A click on one of the tool's picker swatches. Default: ignore.
    fn handle_swatch_click(
        &mut self,
        _event: &mut ClickEvent,
        _color: PaletteColor,
    ) -> ToolUpdate {
        ToolUpdate::keep()
    }

    /// The host toolbar was closed. Default: ignore.
    fn on_toolbar_closed(&mut self) {}

    /// Whether the tool currently shows a popover. Default: it has none.
    fn picker_visible(&self) -> bool {
        false
    }
}
