use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};

use super::collaborators::{Alerting, Router};
use super::error::FormError;
use crate::model::{
    Draft, ExpenseData, ExpenseId, ValidationError, parse_amount, parse_date, validate_required,
};
use crate::storage::ExpenseStore;

/// Screen title in add mode.
pub const ADD_TITLE: &str = "Add Expense";
/// Screen title in edit mode.
pub const EDIT_TITLE: &str = "Edit Expense";

/// Lifecycle of a single form instance.
///
/// `Editing` is the only non-terminal state. A failed validation leaves the
/// form in `Editing` with the draft untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// The user is editing the draft.
    Editing,
    /// The form was dismissed without saving.
    Cancelled,
    /// The edited expense was deleted.
    Deleted,
    /// The draft was validated and written to the store.
    Committed,
}

impl FormState {
    /// Returns `true` once the form has been dismissed.
    pub fn is_terminal(self) -> bool {
        self != Self::Editing
    }
}

/// Controller for the add/edit expense form.
///
/// Mode is fixed at construction: editing if an expense ID was supplied,
/// adding otherwise.
pub struct FormController<S, R, A> {
    store: Rc<RefCell<S>>,
    router: R,
    alerts: A,
    edited_id: Option<ExpenseId>,
    draft: Draft,
    synced_revision: u64,
    state: FormState,
}

impl<S: ExpenseStore, R: Router, A: Alerting> FormController<S, R, A> {
    /// Opens the form.
    ///
    /// In edit mode the draft is populated from the stored expense; returns
    /// [`FormError::RecordNotFound`] if `edited_id` does not resolve, in which
    /// case no router command has been issued.
    pub fn new(
        store: Rc<RefCell<S>>,
        router: R,
        alerts: A,
        edited_id: Option<ExpenseId>,
    ) -> Result<Self, FormError> {
        let synced_revision = store.borrow().revision();
        let mut controller = Self {
            store,
            router,
            alerts,
            edited_id,
            draft: Draft::default(),
            synced_revision,
            state: FormState::Editing,
        };
        controller.on_store_changed()?;
        let title = controller.title();
        controller.router.set_title(title);
        tracing::debug!(edited_id = ?controller.edited_id, "expense form opened");
        Ok(controller)
    }

    /// Returns `true` if the form edits an existing expense.
    pub fn is_editing(&self) -> bool {
        self.edited_id.is_some()
    }

    /// Returns the ID of the expense being edited, if any.
    pub fn edited_id(&self) -> Option<ExpenseId> {
        self.edited_id
    }

    /// Returns the title matching the form's mode.
    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            EDIT_TITLE
        } else {
            ADD_TITLE
        }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Returns the router this form navigates with.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Returns the alert surface this form reports to.
    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    /// Replaces the draft description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replaces the draft amount text.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.draft.amount = amount.into();
    }

    /// Replaces the draft date text.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    /// Re-derives the draft if the store changed since the last derivation.
    ///
    /// Hosts call this whenever the store may have been mutated while the form
    /// is open. Never touches the draft in add mode.
    pub fn sync_with_store(&mut self) -> Result<(), FormError> {
        if !self.is_editing() || self.state.is_terminal() {
            return Ok(());
        }
        if self.store.borrow().revision() == self.synced_revision {
            return Ok(());
        }
        self.on_store_changed()
    }

    /// Re-derives the draft from the stored expense, discarding unsaved edits.
    ///
    /// No-op in add mode or after the form has been dismissed.
    pub fn on_store_changed(&mut self) -> Result<(), FormError> {
        let Some(id) = self.edited_id else {
            return Ok(());
        };
        if self.state.is_terminal() {
            return Ok(());
        }
        let store = self.store.borrow();
        let expense = store.lookup(id).ok_or(FormError::RecordNotFound(id))?;
        self.draft = Draft::from_expense(expense);
        self.synced_revision = store.revision();
        Ok(())
    }

    /// Dismisses the form without validating or saving.
    pub fn cancel_handler(&mut self) -> FormState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.router.go_back();
        self.state = FormState::Cancelled;
        tracing::debug!("expense form cancelled");
        self.state
    }

    /// Deletes the edited expense and dismisses the form.
    ///
    /// Does nothing in add mode.
    pub fn delete_expense_handler(&mut self) -> Result<FormState, FormError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let Some(id) = self.edited_id else {
            tracing::warn!("delete requested while adding an expense");
            return Ok(self.state);
        };
        self.store.borrow_mut().delete_expense(id)?;
        self.router.go_back();
        self.state = FormState::Deleted;
        tracing::info!(%id, "expense deleted");
        Ok(self.state)
    }

    /// Validates the draft against today's local date and saves it.
    pub fn confirm_handler(&mut self) -> Result<FormState, FormError> {
        self.confirm_at(Local::now().date_naive())
    }

    /// Validates the draft against `today` and saves it.
    ///
    /// The first failing rule is reported through [`Alerting`] and the form
    /// stays open with the draft unchanged. On success the expense is added
    /// (or updated in edit mode) and the router is asked to go back.
    pub fn confirm_at(&mut self, today: NaiveDate) -> Result<FormState, FormError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let data = match self.validate(today) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "expense form rejected");
                self.alerts.report(e.alert_title(), e.alert_message());
                return Ok(self.state);
            }
        };

        match self.edited_id {
            Some(id) => {
                self.store.borrow_mut().update_expense(id, data)?;
                tracing::info!(%id, "expense updated");
            }
            None => {
                let id = self.store.borrow_mut().add_expense(data);
                tracing::info!(%id, "expense added");
            }
        }

        self.router.go_back();
        self.state = FormState::Committed;
        Ok(self.state)
    }

    /// Runs the validation pipeline, stopping at the first failure.
    fn validate(&self, today: NaiveDate) -> Result<ExpenseData, ValidationError> {
        validate_required(&self.draft.description, &self.draft.amount)?;
        let amount = parse_amount(&self.draft.amount)?;
        let date = parse_date(&self.draft.date, today)?;
        ExpenseData::new(self.draft.description.clone(), amount, date, today)
    }
}
