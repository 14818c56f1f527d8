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

//! Toolbar button descriptors.
//!
//! A tool's `render()` produces one of these; the platform layer turns it
//! into an actual widget in the host toolbar slot. The descriptor stays
//! owned by the tool so later state changes (active highlight, swatch
//! color) are visible to the host through the tool.

/// Class carried by every inline tool button.
pub const TOOL_BUTTON_CLASS: &str = "inline-tool";

/// Identity of a rendered toolbar button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ButtonId(u64);

impl ButtonId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Declarative description of a toolbar button.
#[derive(Clone, Debug)]
pub struct ToolbarButton {
    pub id: ButtonId,
    /// CSS classes, host tool class first.
    pub classes: Vec<&'static str>,
    /// Tooltip text.
    pub title: &'static str,
    /// Markup for the button face, e.g. `<b>B</b>`.
    pub label_html: &'static str,
    /// Whether the host should style the button as active.
    pub is_active: bool,
    /// Current color of the swatch indicator, for tools that carry one.
    pub swatch: Option<String>,
}

impl ToolbarButton {
    pub fn new(
        id: ButtonId,
        tool_class: &'static str,
        title: &'static str,
        label_html: &'static str,
    ) -> Self {
        Self {
            id,
            classes: vec![TOOL_BUTTON_CLASS, tool_class],
            title,
            label_html,
            is_active: false,
            swatch: None,
        }
    }

    pub fn with_swatch(mut self, color_hex: &str) -> Self {
        self.swatch = Some(color_hex.to_string());
        self
    }
}
