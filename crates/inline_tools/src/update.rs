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

//! What a tool operation tells the host about the document.

/// Outcome of a mutating tool entry point.
///
/// `Keep` covers both "nothing to do" (absent/collapsed selection) and
/// "operation failed and was rolled back": in either case the host's
/// view of the document is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolUpdate {
    /// The document is unchanged.
    Keep,
    /// The document changed; re-read this markup.
    ReplaceAll { html: String },
}

impl ToolUpdate {
    pub fn keep() -> Self {
        Self::Keep
    }

    pub fn replace_all(html: String) -> Self {
        Self::ReplaceAll { html }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}
