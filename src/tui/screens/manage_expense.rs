//! Manage expense screen: add, edit, or delete a single expense.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{FormController, FormError};
use crate::model::ExpenseId;
use crate::storage::MemoryStore;
use crate::tui::action::Action;
use crate::tui::navigation::{AlertSlot, RouteQueue};
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the description.
const DESCRIPTION: usize = 0;
/// Field index for the amount.
const AMOUNT: usize = 1;
/// Field index for the `YYYY-MM-DD` date.
const DATE: usize = 2;

/// The expense form wired to the TUI's store, router, and alert surface.
pub type ExpenseForm = FormController<MemoryStore, RouteQueue, AlertSlot>;

/// State for the manage expense screen.
pub struct ManageExpenseState {
    controller: ExpenseForm,
    form: Form,
}

impl ManageExpenseState {
    /// Opens the screen, editing `edited_id` or adding when `None`.
    pub fn open(
        store: Rc<RefCell<MemoryStore>>,
        routes: RouteQueue,
        alerts: AlertSlot,
        edited_id: Option<ExpenseId>,
    ) -> Result<Self, FormError> {
        let controller = FormController::new(store, routes, alerts, edited_id)?;
        Ok(Self {
            controller,
            form: Form::new(vec![
                FormField::new("Description", "Description"),
                FormField::new("Amount", "Amount"),
                FormField::new("Date", "Date (YYYY-MM-DD)"),
            ]),
        })
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let result = self.controller.delete_expense_handler();
                self.failure_action(result)
            }
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.edit_focused(|value| value.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Esc => {
                self.controller.cancel_handler();
                Action::None
            }
            KeyCode::Enter => {
                let result = self.controller.confirm_handler();
                self.failure_action(result)
            }
            _ => Action::None,
        }
    }

    /// Re-derives the draft if the store changed underneath the form.
    pub fn sync(&mut self) -> Result<(), FormError> {
        self.controller.sync_with_store()
    }

    /// Returns the underlying controller.
    pub fn controller(&self) -> &ExpenseForm {
        &self.controller
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Applies `edit` to a copy of the focused field and stores the result.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let draft = self.controller.draft();
        let mut value = match self.form.focus() {
            DESCRIPTION => draft.description.clone(),
            AMOUNT => draft.amount.clone(),
            DATE => draft.date.clone(),
            _ => return,
        };
        edit(&mut value);
        match self.form.focus() {
            DESCRIPTION => self.controller.set_description(value),
            AMOUNT => self.controller.set_amount(value),
            _ => self.controller.set_date(value),
        }
    }

    fn failure_action<T>(&self, result: Result<T, FormError>) -> Action {
        match result {
            Ok(_) => Action::None,
            Err(e) => {
                tracing::warn!(
                    edited_id = ?self.controller.edited_id(),
                    error = %e,
                    "expense form failed"
                );
                Action::FormFailed(e.to_string())
            }
        }
    }
}

/// Renders the manage expense screen under the router-supplied `title`.
#[mutants::skip]
pub fn draw_manage_expense(state: &ManageExpenseState, title: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let draft = state.controller().draft();
    let values = [
        draft.description.as_str(),
        draft.amount.as_str(),
        draft.date.as_str(),
    ];
    draw_form(state.form(), &values, frame, form_area);

    let keys = if state.controller().is_editing() {
        "Tab/Shift+Tab: next/prev  Enter: update  Ctrl+D: delete  Esc: cancel"
    } else {
        "Tab/Shift+Tab: next/prev  Enter: add  Esc: cancel"
    };
    let footer = Paragraph::new(Line::from(keys)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
