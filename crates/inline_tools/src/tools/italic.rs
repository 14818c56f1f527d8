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

//! The italic tool: wraps the selection in `<i>` tags.

use crate::events::{ClickEvent, ListenerId, ListenerScope};
use crate::host::HostApi;
use crate::sanitize::{SanitizePolicy, ITALIC};
use crate::selection::Selection;
use crate::tool::{InlineTool, ToolKind};
use crate::tools::{anchor_has_ancestor, apply_inline_format};
use crate::ui::ToolbarButton;
use crate::update::ToolUpdate;

pub struct ItalicTool {
    api: HostApi,
    tag: &'static str,
    button: Option<ToolbarButton>,
    click_listener: Option<ListenerId>,
}

impl ItalicTool {
    pub const IS_INLINE: bool = true;

    pub fn new(api: HostApi) -> Self {
        Self {
            api,
            tag: "i",
            button: None,
            click_listener: None,
        }
    }

    fn apply(&mut self) -> ToolUpdate {
        apply_inline_format(&self.api, self.tag, ToolKind::Italic)
    }
}

impl InlineTool for ItalicTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Italic
    }

    fn sanitize(&self) -> &'static SanitizePolicy {
        &ITALIC
    }

    fn render(&mut self) -> ToolbarButton {
        let id = self.api.allocate_button_id();
        self.click_listener =
            Some(self.api.add_listener(ListenerScope::Button(id)));
        let button = ToolbarButton::new(
            id,
            "italic-tool-button",
            "Italic",
            "<i>I</i>",
        );
        self.button = Some(button.clone());
        button
    }

    fn button(&self) -> Option<&ToolbarButton> {
        self.button.as_ref()
    }

    fn set_active(&mut self, active: bool) {
        if let Some(button) = &mut self.button {
            button.is_active = active;
        }
    }

    fn handle_click(&mut self, event: &mut ClickEvent) -> ToolUpdate {
        event.prevent_default();
        event.stop_propagation();
        self.apply()
    }

    fn check_state(&self, selection: &Selection) -> bool {
        anchor_has_ancestor(&self.api, selection, self.tag, None)
    }

    fn destroy(&mut self) {
        if let Some(listener) = self.click_listener.take() {
            self.api.remove_listener(listener);
        }
    }
}
