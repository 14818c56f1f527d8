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

//! The editor facade: owns the registered tools and routes host input to
//! them.
//!
//! Click routing honors `stop_propagation`: a click consumed by a tool's
//! button handler does not also reach the document-level listeners, which
//! is how the original button handlers kept the picker from immediately
//! dismissing itself.

use tracing::debug;

use crate::dom::Dom;
use crate::events::{ClickEvent, UiTarget};
use crate::host::HostApi;
use crate::selection::Selection;
use crate::tool::{InlineTool, ToolKind};
use crate::ui::{ButtonId, ToolbarButton};
use crate::update::ToolUpdate;

/// Host-side wiring for a set of inline tools sharing one document.
pub struct InlineEditor {
    api: HostApi,
    tools: Vec<Box<dyn InlineTool>>,
}

impl InlineEditor {
    pub fn new() -> Self {
        Self::with_document(Dom::new())
    }

    pub fn with_document(document: Dom) -> Self {
        Self {
            api: HostApi::with_document(document),
            tools: Vec::new(),
        }
    }

    /// Handle to the shared host state; tools are constructed with clones
    /// of this.
    pub fn api(&self) -> HostApi {
        self.api.clone()
    }

    /// Render a tool into the toolbar and take ownership of it.
    pub fn register_tool(
        &mut self,
        mut tool: Box<dyn InlineTool>,
    ) -> ToolbarButton {
        let button = tool.render();
        debug!(tool = %tool.kind(), "registered inline tool");
        self.tools.push(tool);
        button
    }

    /// Route a click to whatever it landed on.
    pub fn dispatch_click(&mut self, target: UiTarget) -> ToolUpdate {
        let mut event = ClickEvent::new(target);
        let update = match target {
            UiTarget::Button(id) => match self.tool_by_button(id) {
                Some(tool) => tool.handle_click(&mut event),
                None => ToolUpdate::keep(),
            },
            UiTarget::PickerSwatch { button, color } => {
                match self.tool_by_button(button) {
                    Some(tool) => {
                        tool.handle_swatch_click(&mut event, color)
                    }
                    None => ToolUpdate::keep(),
                }
            }
            UiTarget::Picker(_) | UiTarget::Document => ToolUpdate::keep(),
        };

        // Unconsumed clicks bubble to the document-level listeners.
        if !event.propagation_stopped() {
            self.document_click(target);
        }
        self.refresh_active_states();
        update
    }

    /// Deliver a document-level click to every tool that listens for one.
    pub fn document_click(&mut self, target: UiTarget) {
        let event = ClickEvent::new(target);
        for tool in &mut self.tools {
            tool.handle_document_click(&event);
        }
    }

    /// The host selection changed; update the shared state and the button
    /// highlighting.
    pub fn selection_changed(&mut self, selection: Selection) {
        self.api.set_selection(selection);
        self.refresh_active_states();
    }

    /// The host closed its toolbar.
    pub fn toolbar_closed(&mut self) {
        self.api.with_state(|state| state.toolbar.mark_closed());
        for tool in &mut self.tools {
            tool.on_toolbar_closed();
        }
    }

    /// Recompute each tool's active flag from the current selection.
    pub fn refresh_active_states(&mut self) {
        let selection = self.api.selection();
        let states: Vec<bool> = self
            .tools
            .iter()
            .map(|tool| tool.check_state(&selection))
            .collect();
        for (tool, active) in self.tools.iter_mut().zip(states) {
            tool.set_active(active);
        }
    }

    /// Current per-tool active state, as the host reads it for button
    /// styling.
    pub fn active_states(&self) -> Vec<(ToolKind, bool)> {
        let selection = self.api.selection();
        self.tools
            .iter()
            .map(|tool| (tool.kind(), tool.check_state(&selection)))
            .collect()
    }

    pub fn tool(&self, kind: ToolKind) -> Option<&dyn InlineTool> {
        self.tools
            .iter()
            .find(|tool| tool.kind() == kind)
            .map(|tool| tool.as_ref())
    }

    pub fn html(&self) -> String {
        self.api.html()
    }

    /// Tear down every tool, removing their listeners.
    pub fn destroy_all(&mut self) {
        for tool in &mut self.tools {
            tool.destroy();
        }
    }

    fn tool_by_button(
        &mut self,
        id: ButtonId,
    ) -> Option<&mut Box<dyn InlineTool>> {
        self.tools
            .iter_mut()
            .find(|tool| tool.button().map(|b| b.id) == Some(id))
    }
}

impl Default for InlineEditor {
    fn default() -> Self {
        Self::new()
    }
}
