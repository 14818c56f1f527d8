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

//! The host-side state each tool is constructed with.
//!
//! There is one document and one selection, shared by every tool and
//! mutated directly; serialization comes from the host's event loop, not
//! from locks, so the handle is a single-threaded `Rc<RefCell<…>>`. Tools
//! keep a clone of [`HostApi`] the way the original plugin contract hands
//! every tool the same `api` object.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::dom::Dom;
use crate::events::{ListenerId, ListenerRegistry, ListenerScope};
use crate::selection::Selection;
use crate::ui::ButtonId;

/// The host's floating toolbar.
#[derive(Debug, Default)]
pub struct InlineToolbar {
    open: bool,
    close_requests: usize,
}

impl InlineToolbar {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Request the toolbar to close. Counted so tests can observe that a
    /// tool asked for it.
    pub fn close(&mut self) {
        self.open = false;
        self.close_requests += 1;
        debug!("inline toolbar close requested");
    }

    /// Sync the open flag from a host notification. Unlike [`close`],
    /// this does not count as a tool-initiated close request.
    ///
    /// [`close`]: InlineToolbar::close
    pub fn mark_closed(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close_requests(&self) -> usize {
        self.close_requests
    }
}

/// Everything the host owns on behalf of the tools.
#[derive(Debug)]
pub struct HostState {
    pub document: Dom,
    pub selection: Selection,
    pub toolbar: InlineToolbar,
    pub listeners: ListenerRegistry,
    next_button_id: u64,
}

impl HostState {
    fn new(document: Dom) -> Self {
        Self {
            document,
            selection: Selection::none(),
            toolbar: InlineToolbar::default(),
            listeners: ListenerRegistry::new(),
            next_button_id: 0,
        }
    }
}

/// Cloneable handle to the shared [`HostState`].
#[derive(Clone)]
pub struct HostApi {
    inner: Rc<RefCell<HostState>>,
}

impl HostApi {
    /// A host with an empty document.
    pub fn new() -> Self {
        Self::with_document(Dom::new())
    }

    pub fn with_document(document: Dom) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HostState::new(document))),
        }
    }

    /// Run a closure against the shared state.
    ///
    /// Callers must not re-enter the api from inside the closure.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut HostState) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn selection(&self) -> Selection {
        self.inner.borrow().selection
    }

    pub fn set_selection(&self, selection: Selection) {
        self.inner.borrow_mut().selection = selection;
    }

    pub fn html(&self) -> String {
        self.inner.borrow().document.to_html()
    }

    pub fn allocate_button_id(&self) -> ButtonId {
        let mut state = self.inner.borrow_mut();
        let id = ButtonId::new(state.next_button_id);
        state.next_button_id += 1;
        id
    }

    pub fn add_listener(&self, scope: ListenerScope) -> ListenerId {
        self.inner.borrow_mut().listeners.add(scope)
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(id);
    }

    pub fn document_listener_count(&self) -> usize {
        self.inner.borrow().listeners.document_count()
    }

    pub fn open_toolbar(&self) {
        self.inner.borrow_mut().toolbar.open();
    }

    pub fn close_toolbar(&self) {
        self.inner.borrow_mut().toolbar.close();
    }

    pub fn is_toolbar_open(&self) -> bool {
        self.inner.borrow().toolbar.is_open()
    }

    pub fn toolbar_close_requests(&self) -> usize {
        self.inner.borrow().toolbar.close_requests()
    }
}

impl Default for HostApi {
    fn default() -> Self {
        Self::new()
    }
}
