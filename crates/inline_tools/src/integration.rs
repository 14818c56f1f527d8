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

//! The host integration adapter.
//!
//! An [`EditorIntegration`] is owned and disposed by whoever owns the
//! editor instance. It reacts to the host framework's documented
//! lifecycle notifications while started and does nothing once stopped;
//! there are no timers, no polling loops, no global observers and no
//! style forcing anywhere in this crate.

use tracing::{debug, trace};

use crate::editor::InlineEditor;
use crate::events::UiTarget;
use crate::selection::Selection;

/// A lifecycle notification from the host framework.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    ToolbarOpened,
    ToolbarClosed,
    SelectionChanged(Selection),
    DocumentClick(UiTarget),
}

/// Event-driven replacement for ad-hoc visibility hacks: the host's own
/// notifications drive picker dismissal and button state refresh.
#[derive(Debug, Default)]
pub struct EditorIntegration {
    running: bool,
}

impl EditorIntegration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin reacting to host events. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            debug!("editor integration started");
        }
    }

    /// Stop reacting to host events. Idempotent; after this the adapter
    /// holds no live resources.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("editor integration stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one host notification to the editor.
    pub fn on_event(&mut self, editor: &mut InlineEditor, event: &HostEvent) {
        if !self.running {
            trace!(?event, "integration stopped; ignoring host event");
            return;
        }
        match event {
            HostEvent::ToolbarOpened => {
                editor.api().open_toolbar();
            }
            HostEvent::ToolbarClosed => {
                editor.toolbar_closed();
            }
            HostEvent::SelectionChanged(selection) => {
                editor.selection_changed(*selection);
            }
            HostEvent::DocumentClick(target) => {
                editor.document_click(*target);
            }
        }
    }
}
