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

//! Model code to power inline formatting tools for a block editor.
//!
//! The crate is headless: it owns a document tree ([`dom::Dom`]), a
//! [`Selection`] over it, and three inline tools (bold, italic and text
//! color) that implement the host plugin contract ([`InlineTool`]).
//! Platform layers render the declarative button/picker descriptors and
//! feed clicks and selection snapshots back in; every mutating call
//! returns a [`ToolUpdate`] describing what the host should re-read.
//!
//! Tool operations are single-shot transforms of the live selection with
//! no internal state machine. Failures are caught at the tool boundary,
//! logged, and rolled back: a formatting action either lands fully or
//! leaves the document untouched.

pub mod commands;
pub mod dom;
pub mod editor;
mod error;
pub mod events;
pub mod host;
pub mod integration;
pub mod sanitize;
pub mod selection;
pub mod tool;
pub mod tools;
pub mod ui;
pub mod update;

pub use dom::{Dom, ElementData, NodeId, NodeKind};
pub use editor::InlineEditor;
pub use error::DomError;
pub use events::{ClickEvent, ListenerId, ListenerScope, UiTarget};
pub use host::{HostApi, HostState, InlineToolbar};
pub use integration::{EditorIntegration, HostEvent};
pub use sanitize::SanitizePolicy;
pub use selection::{Location, Selection};
pub use tool::{InlineTool, ToolKind};
pub use tools::{BoldTool, ItalicTool, TextColorTool};
pub use ui::{ButtonId, ColorPicker, ToolbarButton, TOOL_BUTTON_CLASS};
pub use update::ToolUpdate;
