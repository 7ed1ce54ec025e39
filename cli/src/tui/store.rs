// SPDX-FileCopyrightText: 2026 evman contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::controller::EditCursor;
use crate::tui::dispatcher::{Action, Dispatcher};

/// Input buffer for the login page.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,

    /// Whether the user asked to submit the credentials.
    pub submit: bool,
}

impl LoginForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateIdentifier(v) => {
                that.borrow_mut().identifier = v.clone();
            }
            Action::UpdatePassword(v) => {
                that.borrow_mut().password = v.clone();
            }
            Action::SubmitChanges => {
                that.borrow_mut().submit = true;
            }
            _ => (),
        }));
        dispatcher.register(callback);
    }
}

/// Input buffer for the event name/description form.
#[derive(Debug, Default)]
pub struct EventForm {
    pub name: String,
    pub description: String,

    /// Whether the user asked to submit the drafts.
    pub submit: bool,
}

impl EventForm {
    /// Loads the controller's staged fields, e.g. when an edit begins.
    pub fn load(&mut self, cursor: &EditCursor) {
        self.name = cursor.name.clone();
        self.description = cursor.description.clone();
        self.submit = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateName(v) => {
                that.borrow_mut().name = v.clone();
            }
            Action::UpdateDescription(v) => {
                that.borrow_mut().description = v.clone();
            }
            Action::SubmitChanges => {
                that.borrow_mut().submit = true;
            }
            _ => (),
        }));
        dispatcher.register(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_track_dispatched_actions() {
        let mut dispatcher = Dispatcher::new();
        let login = Rc::new(RefCell::new(LoginForm::default()));
        let form = Rc::new(RefCell::new(EventForm::default()));
        LoginForm::register_to(login.clone(), &mut dispatcher);
        EventForm::register_to(form.clone(), &mut dispatcher);

        dispatcher.dispatch(&Action::UpdateIdentifier("alice".to_string()));
        dispatcher.dispatch(&Action::UpdateName("Launch".to_string()));
        dispatcher.dispatch(&Action::SubmitChanges);

        assert_eq!(login.borrow().identifier, "alice");
        assert!(login.borrow().submit);
        assert_eq!(form.borrow().name, "Launch");
        assert!(form.borrow().submit);
    }
}
