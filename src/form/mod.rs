//! The expense form controller and the collaborator contracts it talks to.
//!
//! A [`FormController`] is created per screen visit. It owns the [`Draft`](crate::model::Draft),
//! derives add/edit mode from the optional expense ID it was opened with, and
//! on submit either writes to the [`ExpenseStore`](crate::storage::ExpenseStore)
//! and asks the [`Router`] to go back, or reports the first validation failure
//! through [`Alerting`].

mod collaborators;
mod controller;
mod error;

pub use collaborators::{Alerting, Router};
pub use controller::{ADD_TITLE, EDIT_TITLE, FormController, FormState};
pub use error::FormError;
