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

//! The color picker popover attached to the text color button.
//!
//! Built hidden at render time with one swatch per palette entry;
//! shown/hidden by the tool. Outside-click dismissal is decided with
//! [`ColorPicker::hit_test`] against the owning button's id.

use swatches::{Palette, PaletteColor};

use crate::events::UiTarget;
use crate::ui::ButtonId;

/// Popover state for one text color tool instance.
#[derive(Clone, Debug)]
pub struct ColorPicker {
    palette: Palette,
    visible: bool,
}

impl ColorPicker {
    /// A hidden picker over the given palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The swatches, in palette order.
    pub fn swatches(&self) -> impl Iterator<Item = PaletteColor> + '_ {
        self.palette.iter()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether a click target is inside this picker or its owning button.
    pub fn hit_test(&self, own_button: ButtonId, target: UiTarget) -> bool {
        match target {
            UiTarget::Button(button)
            | UiTarget::Picker(button)
            | UiTarget::PickerSwatch { button, .. } => button == own_button,
            UiTarget::Document => false,
        }
    }
}
