//! Actions returned by screen event handlers.

use crate::model::ExpenseId;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens. Plain back-navigation from the expense form travels through the
/// [`RouteQueue`](super::navigation::RouteQueue) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Open the expense form: editing the given expense, or adding when `None`.
    OpenForm(Option<ExpenseId>),
    /// Close the expense form after a non-validation failure, showing the message.
    FormFailed(String),
    /// Quit the application.
    Quit,
}
