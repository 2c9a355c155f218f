use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::model::ExpenseId;
use crate::storage::MemoryStore;

use super::action::Action;
use super::error::AppError;
use super::navigation::{AlertSlot, RouteCommand, RouteQueue};
use super::screens::{
    ExpenseListState, ManageExpenseState, draw_expense_list, draw_manage_expense,
};
use super::widgets::draw_alert;

/// Title shown while the expense list is active.
const LIST_TITLE: &str = "Expenses";

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Browse stored expenses.
    ExpenseList,
    /// Add, edit, or delete a single expense.
    ManageExpense,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    store: Rc<RefCell<MemoryStore>>,
    list: ExpenseListState,
    manage: Option<ManageExpenseState>,
    routes: RouteQueue,
    alerts: AlertSlot,
    title: String,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::ExpenseList`] screen.
    pub fn new(store: MemoryStore) -> Self {
        let mut list = ExpenseListState::new();
        list.load(&store);
        Self {
            screen: Screen::ExpenseList,
            store: Rc::new(RefCell::new(store)),
            list,
            manage: None,
            routes: RouteQueue::new(),
            alerts: AlertSlot::new(),
            title: LIST_TITLE.to_string(),
            status: None,
            should_quit: false,
        }
    }

    /// Main event loop: sync → draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.sync_form();
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the active screen, with any pending alert on top.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match (self.screen, &self.manage) {
            (Screen::ManageExpense, Some(manage)) => {
                draw_manage_expense(manage, &self.title, frame, area);
            }
            _ => draw_expense_list(&self.list, self.status.as_deref(), frame, area),
        }
        if let Some(alert) = self.alerts.current() {
            draw_alert(&alert, frame, area);
        }
    }

    /// Handles a key event.
    ///
    /// A pending alert is modal: the next key press only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.alerts.is_showing() {
            self.alerts.dismiss();
            return;
        }

        let action = match self.screen {
            Screen::ExpenseList => self.list.handle_key(key),
            Screen::ManageExpense => self
                .manage
                .as_mut()
                .map_or(Action::None, |manage| manage.handle_key(key)),
        };
        self.apply(action);
        self.apply_routes();
    }

    /// Re-derives the open form's draft if the store changed.
    ///
    /// Closes the form if the expense it edits no longer exists.
    pub fn sync_form(&mut self) {
        let Some(manage) = self.manage.as_mut() else {
            return;
        };
        if let Err(e) = manage.sync() {
            tracing::warn!(error = %e, "closing expense form");
            self.close_form(Some(e.to_string()));
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the current screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status message shown on the list screen, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the shared expense store.
    pub fn store(&self) -> &Rc<RefCell<MemoryStore>> {
        &self.store
    }

    /// Returns the alert surface.
    pub fn alerts(&self) -> &AlertSlot {
        &self.alerts
    }

    /// Returns the expense list state.
    pub fn list(&self) -> &ExpenseListState {
        &self.list
    }

    /// Returns the open expense form, if any.
    pub fn manage(&self) -> Option<&ManageExpenseState> {
        self.manage.as_ref()
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::OpenForm(id) => self.open_form(id),
            Action::FormFailed(msg) => self.close_form(Some(msg)),
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_form(&mut self, edited_id: Option<ExpenseId>) {
        match ManageExpenseState::open(
            Rc::clone(&self.store),
            self.routes.clone(),
            self.alerts.clone(),
            edited_id,
        ) {
            Ok(manage) => {
                self.manage = Some(manage);
                self.screen = Screen::ManageExpense;
                self.status = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not open expense form");
                self.status = Some(e.to_string());
            }
        }
    }

    fn close_form(&mut self, status: Option<String>) {
        self.manage = None;
        self.screen = Screen::ExpenseList;
        self.title = LIST_TITLE.to_string();
        self.status = status;
        self.list.load(&*self.store.borrow());
    }

    /// Applies navigation commands queued by the open screen.
    fn apply_routes(&mut self) {
        for command in self.routes.drain() {
            match command {
                RouteCommand::SetTitle(title) => self.title = title,
                RouteCommand::GoBack => self.close_form(None),
            }
        }
    }
}
