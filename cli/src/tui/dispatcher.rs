// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

/// Fans user input actions out to registered form stores.
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

/// Input actions carry the full new field value.
#[derive(Debug, Clone)]
pub enum Action {
    UpdateIdentifier(String),
    UpdatePassword(String),
    UpdateName(String),
    UpdateDescription(String),
    SubmitChanges,
}
