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

//! Sanitize policies declared by the inline tools.
//!
//! A policy is a purely declarative allow-list consumed by the host
//! editor's sanitizer; enforcement happens on the host side. The one
//! consistency rule across tools is that a tool's policy must allow the
//! markup the tool emits; otherwise the host strips the formatting right
//! back out.

/// The markup a single tool's output may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SanitizePolicy {
    /// The one tag this tool is allowed to leave behind.
    pub tag: &'static str,
    /// Attributes permitted on that tag.
    pub attributes: &'static [&'static str],
}

impl SanitizePolicy {
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn allows_attribute(&self, attribute: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(attribute))
    }
}

/// Bold output: bare `<b>`.
pub static BOLD: SanitizePolicy = SanitizePolicy {
    tag: "b",
    attributes: &[],
};

/// Italic output: bare `<i>`.
pub static ITALIC: SanitizePolicy = SanitizePolicy {
    tag: "i",
    attributes: &[],
};

/// Text color output: `<span>` with `class` and `style`.
pub static TEXT_COLOR: SanitizePolicy = SanitizePolicy {
    tag: "span",
    attributes: &["class", "style"],
};
