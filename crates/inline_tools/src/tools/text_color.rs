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

//! The text color tool: wraps the selection in
//! `<span class="colored-text" style="color: …">`.
//!
//! The button carries a swatch indicator showing the current color and a
//! picker popover with one swatch per palette entry. Picking a color sets
//! it as current and wraps the selection; a document-level listener
//! dismisses the popover when a click lands outside both the button and
//! the popover.

use once_cell::sync::Lazy;
use swatches::{Palette, PaletteColor};
use tracing::{debug, error, info};

use crate::commands::surround;
use crate::dom::ElementData;
use crate::events::{ClickEvent, ListenerId, ListenerScope};
use crate::host::HostApi;
use crate::sanitize::{SanitizePolicy, TEXT_COLOR};
use crate::selection::Selection;
use crate::tool::{InlineTool, ToolKind};
use crate::tools::anchor_has_ancestor;
use crate::ui::{ColorPicker, ToolbarButton};
use crate::update::ToolUpdate;

static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(Palette::default);

/// Class carried by every span this tool emits.
pub const COLORED_TEXT_CLASS: &str = "colored-text";

const COLOR_ICON: &str = "<svg width=\"20\" height=\"18\" viewBox=\"0 0 20 18\"><path d=\"M10.5 1L5.5 15M8 18h5M7 11h7\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/></svg>";

pub struct TextColorTool {
    api: HostApi,
    tag: &'static str,
    class: &'static str,
    picker: ColorPicker,
    current_color: PaletteColor,
    button: Option<ToolbarButton>,
    click_listener: Option<ListenerId>,
    document_listener: Option<ListenerId>,
}

impl TextColorTool {
    pub const IS_INLINE: bool = true;

    pub fn new(api: HostApi) -> Self {
        Self::with_palette(api, DEFAULT_PALETTE.clone())
    }

    pub fn with_palette(api: HostApi, palette: Palette) -> Self {
        let current_color =
            palette.default_color().unwrap_or(PaletteColor::Black);
        Self {
            api,
            tag: "span",
            class: COLORED_TEXT_CLASS,
            picker: ColorPicker::new(palette),
            current_color,
            button: None,
            click_listener: None,
            document_listener: None,
        }
    }

    pub fn current_color(&self) -> PaletteColor {
        self.current_color
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    /// Open the picker popover and refresh the swatch indicator.
    pub fn show_color_picker(&mut self, event: &mut ClickEvent) {
        event.prevent_default();
        event.stop_propagation();
        self.picker.show();
        self.update_indicator();
    }

    pub fn hide_color_picker(&mut self) {
        self.picker.hide();
    }

    /// A swatch was picked: make it current, dismiss the popover and wrap
    /// the selection.
    pub fn handle_color_select(
        &mut self,
        event: &mut ClickEvent,
        color: PaletteColor,
    ) -> ToolUpdate {
        event.prevent_default();
        event.stop_propagation();
        self.current_color = color;
        self.update_indicator();
        self.hide_color_picker();
        self.wrap()
    }

    /// Wrap the current selection in a colored span.
    fn wrap(&mut self) -> ToolUpdate {
        let hex = self.current_color.hex();
        let tag = self.tag;
        let class = self.class;
        let update = self.api.with_state(|state| {
            let Some(range) =
                state.selection.primary_range(&state.document)
            else {
                info!(tool = %ToolKind::TextColor, "no active selection; nothing to color");
                return ToolUpdate::keep();
            };
            if range.is_collapsed() {
                info!(tool = %ToolKind::TextColor, "selection is collapsed; nothing to color");
                return ToolUpdate::keep();
            }

            let snapshot = state.document.clone();
            let element = ElementData::new(tag)
                .with_class(class)
                .with_style("color", hex);
            match surround(&mut state.document, range, element) {
                Ok(wrapper) => {
                    state.selection =
                        Selection::node_contents(&state.document, wrapper);
                    state.toolbar.close();
                    ToolUpdate::replace_all(state.document.to_html())
                }
                Err(error) => {
                    error!(tool = %ToolKind::TextColor, %error, "failed to wrap selection");
                    state.document = snapshot;
                    ToolUpdate::keep()
                }
            }
        });
        if !update.is_keep() {
            self.update_indicator();
        }
        update
    }

    fn update_indicator(&mut self) {
        if let Some(button) = &mut self.button {
            button.swatch = Some(self.current_color.hex().to_string());
        }
    }
}

impl InlineTool for TextColorTool {
    fn kind(&self) -> ToolKind {
        ToolKind::TextColor
    }

    fn sanitize(&self) -> &'static SanitizePolicy {
        &TEXT_COLOR
    }

    fn render(&mut self) -> ToolbarButton {
        let id = self.api.allocate_button_id();
        self.click_listener =
            Some(self.api.add_listener(ListenerScope::Button(id)));
        self.document_listener =
            Some(self.api.add_listener(ListenerScope::Document));
        let button = ToolbarButton::new(
            id,
            "text-color-button",
            "Text Color",
            COLOR_ICON,
        )
        .with_swatch(self.current_color.hex());
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

    /// The button click toggles the picker rather than formatting
    /// directly.
    fn handle_click(&mut self, event: &mut ClickEvent) -> ToolUpdate {
        self.show_color_picker(event);
        ToolUpdate::keep()
    }

    fn check_state(&self, selection: &Selection) -> bool {
        anchor_has_ancestor(
            &self.api,
            selection,
            self.tag,
            Some(self.class),
        )
    }

    fn destroy(&mut self) {
        if let Some(listener) = self.document_listener.take() {
            self.api.remove_listener(listener);
        }
        if let Some(listener) = self.click_listener.take() {
            self.api.remove_listener(listener);
        }
    }

    fn handle_document_click(&mut self, event: &ClickEvent) {
        if self.document_listener.is_none() || !self.picker.is_visible() {
            return;
        }
        let Some(own_button) = self.button.as_ref().map(|b| b.id) else {
            return;
        };
        if self.picker.hit_test(own_button, event.target()) {
            return;
        }
        debug!("click outside the color picker; dismissing it");
        self.hide_color_picker();
    }

    fn handle_swatch_click(
        &mut self,
        event: &mut ClickEvent,
        color: PaletteColor,
    ) -> ToolUpdate {
        self.handle_color_select(event, color)
    }

    fn on_toolbar_closed(&mut self) {
        self.hide_color_picker();
    }

    fn picker_visible(&self) -> bool {
        self.picker.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;
    use crate::events::UiTarget;
    use crate::selection::Location;

    fn api_with_text(text: &str) -> (HostApi, NodeId) {
        let api = HostApi::new();
        let node = api.with_state(|state| {
            let node = state.document.create_text(text);
            let root = state.document.root();
            state
                .document
                .append_child(root, node)
                .expect("append to root");
            node
        });
        (api, node)
    }

    fn select_all(api: &HostApi, node: NodeId, len: usize) {
        api.set_selection(Selection::between(
            Location::new(node, 0),
            Location::new(node, len),
        ));
    }

    #[test]
    fn defaults_to_the_first_palette_entry() {
        let (api, _) = api_with_text("x");
        let tool = TextColorTool::new(api);
        assert_eq!(tool.current_color(), PaletteColor::Black);
        assert_eq!(tool.picker().swatches().count(), 8);
        assert!(!tool.picker().is_visible());
    }

    #[test]
    fn render_builds_button_with_swatch_and_both_listeners() {
        let (api, _) = api_with_text("x");
        let mut tool = TextColorTool::new(api.clone());
        let button = tool.render();
        assert_eq!(button.title, "Text Color");
        assert_eq!(button.swatch.as_deref(), Some("#000000"));
        assert!(button.classes.contains(&"text-color-button"));
        assert_eq!(api.document_listener_count(), 1);
        assert_eq!(api.with_state(|state| state.listeners.total()), 2);
    }

    #[test]
    fn button_click_opens_the_picker() {
        let (api, _) = api_with_text("x");
        let mut tool = TextColorTool::new(api);
        let button = tool.render();
        let mut event = ClickEvent::new(UiTarget::Button(button.id));
        let update = tool.handle_click(&mut event);
        assert!(update.is_keep());
        assert!(tool.picker().is_visible());
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn selecting_a_color_wraps_and_updates_the_indicator() {
        let (api, node) = api_with_text("Hello");
        select_all(&api, node, 5);
        let mut tool = TextColorTool::new(api.clone());
        let button = tool.render();
        let mut event = ClickEvent::new(UiTarget::Button(button.id));
        tool.handle_click(&mut event);

        let mut event = ClickEvent::new(UiTarget::PickerSwatch {
            button: button.id,
            color: PaletteColor::Red,
        });
        let update =
            tool.handle_color_select(&mut event, PaletteColor::Red);

        assert_eq!(
            update,
            ToolUpdate::replace_all(
                "<span class=\"colored-text\" style=\"color: #FF0000\">Hello</span>"
                    .to_string()
            )
        );
        assert_eq!(tool.current_color(), PaletteColor::Red);
        assert!(!tool.picker().is_visible(), "picker hides after pick");
        assert_eq!(
            tool.button().and_then(|b| b.swatch.as_deref()),
            Some("#FF0000")
        );
    }

    #[test]
    fn wrapped_text_is_preserved_exactly() {
        let (api, node) = api_with_text("Hello");
        select_all(&api, node, 5);
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        tool.handle_color_select(&mut event, PaletteColor::Red);

        let text = api.with_state(|state| {
            let root = state.document.root();
            state.document.text_content(root)
        });
        assert_eq!(text, "Hello");
    }

    #[test]
    fn wrap_with_collapsed_selection_is_a_no_op() {
        let (api, node) = api_with_text("Hello");
        api.set_selection(Selection::caret(Location::new(node, 1)));
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        let update =
            tool.handle_color_select(&mut event, PaletteColor::Blue);
        assert!(update.is_keep());
        assert_eq!(api.html(), "Hello");
        // The chosen color still becomes current for the next wrap.
        assert_eq!(tool.current_color(), PaletteColor::Blue);
    }

    #[test]
    fn wrap_with_absent_selection_is_a_no_op() {
        let (api, _) = api_with_text("Hello");
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        let update =
            tool.handle_color_select(&mut event, PaletteColor::Green);
        assert!(update.is_keep());
        assert_eq!(api.html(), "Hello");
    }

    #[test]
    fn failed_wrap_restores_the_document() {
        // Selection spans from inside a bold wrapper into plain text:
        // a non-extractable boundary.
        let api = HostApi::new();
        let (inner, plain) = api.with_state(|state| {
            let root = state.document.root();
            let bold = state.document.create_element(ElementData::new("b"));
            let inner = state.document.create_text("bold");
            let plain = state.document.create_text("plain");
            state.document.append_child(root, bold).expect("append");
            state.document.append_child(bold, inner).expect("append");
            state.document.append_child(root, plain).expect("append");
            (inner, plain)
        });
        api.set_selection(Selection::between(
            Location::new(inner, 1),
            Location::new(plain, 2),
        ));

        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        let update =
            tool.handle_color_select(&mut event, PaletteColor::Purple);
        assert!(update.is_keep());
        assert_eq!(api.html(), "<b>bold</b>plain");
        assert_eq!(api.toolbar_close_requests(), 0);
    }

    #[test]
    fn nested_wraps_are_not_merged() {
        let (api, node) = api_with_text("Hello");
        select_all(&api, node, 5);
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        tool.handle_color_select(&mut event, PaletteColor::Red);
        let mut event = ClickEvent::new(UiTarget::Document);
        tool.handle_color_select(&mut event, PaletteColor::Blue);

        // The second wrap nests inside the first; nothing is merged or
        // deduplicated.
        assert_eq!(
            api.html(),
            "<span class=\"colored-text\" style=\"color: #FF0000\">\
             <span class=\"colored-text\" style=\"color: #0000FF\">Hello</span>\
             </span>"
        );
    }

    #[test]
    fn check_state_requires_tag_and_class() {
        let (api, node) = api_with_text("Hello");
        select_all(&api, node, 5);
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        let mut event = ClickEvent::new(UiTarget::Document);
        tool.handle_color_select(&mut event, PaletteColor::Red);
        assert!(tool.check_state(&api.selection()));

        // A bare span without the class does not count.
        let api2 = HostApi::new();
        let inner = api2.with_state(|state| {
            let root = state.document.root();
            let span =
                state.document.create_element(ElementData::new("span"));
            let inner = state.document.create_text("x");
            state.document.append_child(root, span).expect("append");
            state.document.append_child(span, inner).expect("append");
            inner
        });
        let tool2 = TextColorTool::new(api2.clone());
        let selection = Selection::caret(Location::new(inner, 0));
        assert!(!tool2.check_state(&selection));
    }

    #[test]
    fn check_state_false_without_an_anchor() {
        let (api, _) = api_with_text("Hello");
        let tool = TextColorTool::new(api);
        assert!(!tool.check_state(&Selection::none()));
    }

    #[test]
    fn outside_click_dismisses_the_picker() {
        let (api, _) = api_with_text("Hello");
        let mut tool = TextColorTool::new(api);
        let button = tool.render();
        let mut event = ClickEvent::new(UiTarget::Button(button.id));
        tool.handle_click(&mut event);
        assert!(tool.picker().is_visible());

        tool.handle_document_click(&ClickEvent::new(UiTarget::Document));
        assert!(!tool.picker().is_visible());
    }

    #[test]
    fn clicks_inside_button_or_picker_keep_it_open() {
        let (api, _) = api_with_text("Hello");
        let mut tool = TextColorTool::new(api);
        let button = tool.render();
        let mut event = ClickEvent::new(UiTarget::Button(button.id));
        tool.handle_click(&mut event);

        tool.handle_document_click(&ClickEvent::new(UiTarget::Picker(
            button.id,
        )));
        assert!(tool.picker().is_visible());

        tool.handle_document_click(&ClickEvent::new(UiTarget::Button(
            button.id,
        )));
        assert!(tool.picker().is_visible());
    }

    #[test]
    fn destroy_removes_both_listeners() {
        let (api, _) = api_with_text("Hello");
        let before = api.document_listener_count();
        let mut tool = TextColorTool::new(api.clone());
        tool.render();
        assert_eq!(api.document_listener_count(), before + 1);

        tool.destroy();
        assert_eq!(api.document_listener_count(), before);
        assert_eq!(api.with_state(|state| state.listeners.total()), 0);

        // After destroy the dismiss handler is inert.
        tool.handle_document_click(&ClickEvent::new(UiTarget::Document));
    }

    #[test]
    fn toolbar_close_hides_the_picker() {
        let (api, _) = api_with_text("Hello");
        let mut tool = TextColorTool::new(api);
        let button = tool.render();
        let mut event = ClickEvent::new(UiTarget::Button(button.id));
        tool.handle_click(&mut event);
        assert!(tool.picker().is_visible());

        tool.on_toolbar_closed();
        assert!(!tool.picker().is_visible());
    }
}
