//! Host-side [`Router`] and [`Alerting`] implementations.
//!
//! Both are cheap cloneable handles: the [`App`](super::App) keeps one clone
//! and hands another to the expense form, then applies whatever the form
//! queued after each key press.

use std::cell::RefCell;
use std::rc::Rc;

use crate::form::{Alerting, Router};

/// A navigation command issued by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteCommand {
    /// Replace the current screen title.
    SetTitle(String),
    /// Dismiss the current screen.
    GoBack,
}

/// Queue of pending [`RouteCommand`]s shared between the app and a screen.
#[derive(Debug, Clone, Default)]
pub struct RouteQueue {
    commands: Rc<RefCell<Vec<RouteCommand>>>,
}

impl RouteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending commands in issue order.
    pub fn drain(&self) -> Vec<RouteCommand> {
        self.commands.borrow_mut().drain(..).collect()
    }

    /// Returns `true` if no command is pending.
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

impl Router for RouteQueue {
    fn set_title(&mut self, title: &str) {
        self.commands
            .borrow_mut()
            .push(RouteCommand::SetTitle(title.to_string()));
    }

    fn go_back(&mut self) {
        self.commands.borrow_mut().push(RouteCommand::GoBack);
    }
}

/// A notification waiting for the user to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Holds at most one pending [`Alert`]; a newer report replaces an older one.
#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    pending: Rc<RefCell<Option<Alert>>>,
}

impl AlertSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending alert, if any.
    pub fn current(&self) -> Option<Alert> {
        self.pending.borrow().clone()
    }

    /// Returns `true` while an alert awaits acknowledgement.
    pub fn is_showing(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Acknowledges the pending alert.
    pub fn dismiss(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Alerting for AlertSlot {
    fn report(&mut self, title: &str, message: &str) {
        *self.pending.borrow_mut() = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
