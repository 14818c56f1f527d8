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

//! Click events and listener bookkeeping.
//!
//! The host delivers clicks to the tools as [`ClickEvent`]s; a tool
//! suppresses the platform's default action and further propagation
//! before handling one. [`ListenerRegistry`] records which listeners each
//! tool has registered so that teardown is observable: after `destroy()`
//! the document-level count must be back where it started.

use swatches::PaletteColor;

use crate::ui::ButtonId;

/// What a click landed on, from a tool's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiTarget {
    /// A tool's toolbar button.
    Button(ButtonId),
    /// The popover surface of a tool's picker.
    Picker(ButtonId),
    /// One swatch inside a tool's picker.
    PickerSwatch { button: ButtonId, color: PaletteColor },
    /// Anywhere else in the document.
    Document,
}

/// A click delivered by the host.
#[derive(Clone, Copy, Debug)]
pub struct ClickEvent {
    target: UiTarget,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: UiTarget) -> Self {
        Self {
            target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn target(&self) -> UiTarget {
        self.target
    }

    /// Suppress the platform's default action for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the click from bubbling further.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerScope {
    /// On a tool's own button.
    Button(ButtonId),
    /// On the whole document (outside-click detection).
    Document,
}

/// Handle to a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Tracks active listener registrations.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: Vec<(ListenerId, ListenerScope)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned id removes it again.
    pub fn add(&mut self, scope: ListenerScope) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push((id, scope));
        id
    }

    /// Remove a listener. Removing an unknown id is a no-op, matching
    /// the platform API.
    pub fn remove(&mut self, id: ListenerId) {
        self.active.retain(|(active_id, _)| *active_id != id);
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.active.iter().any(|(active_id, _)| *active_id == id)
    }

    /// Number of document-level listeners currently registered.
    pub fn document_count(&self) -> usize {
        self.active
            .iter()
            .filter(|(_, scope)| *scope == ListenerScope::Document)
            .count()
    }

    pub fn total(&self) -> usize {
        self.active.len()
    }
}
