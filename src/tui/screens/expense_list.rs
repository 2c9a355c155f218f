//! Expense list screen: the entry point for adding and editing expenses.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{Expense, ExpenseId};
use crate::storage::ExpenseStore;
use crate::tui::action::Action;
use crate::tui::widgets::{StatusBarContext, draw_status_bar};

/// State for the expense list screen.
#[derive(Debug, Clone, Default)]
pub struct ExpenseListState {
    /// Snapshot of the store, newest date first.
    expenses: Vec<Expense>,
    /// Index of the highlighted row, or `None` if the list is empty.
    selected: Option<usize>,
    /// Sum of all amounts at the last load.
    total: f64,
}

impl ExpenseListState {
    /// Creates an empty state. Call [`load`](Self::load) to populate from a store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads the snapshot, keeping the selection in range.
    pub fn load(&mut self, store: &impl ExpenseStore) {
        self.expenses = store.expenses().to_vec();
        self.total = store.total();
        self.expenses
            .sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        self.selected = match (self.expenses.len(), self.selected) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self
                .selected_id()
                .map_or(Action::None, |id| Action::OpenForm(Some(id))),
            KeyCode::Char('n') | KeyCode::Char('a') => Action::OpenForm(None),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the cached expenses in display order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns the sum of all amounts at the last load.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the ID of the highlighted expense.
    pub fn selected_id(&self) -> Option<ExpenseId> {
        self.selected
            .and_then(|i| self.expenses.get(i))
            .map(|e| e.id)
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.expenses.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the expense list screen.
#[mutants::skip]
pub fn draw_expense_list(
    state: &ExpenseListState,
    status: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let ctx = StatusBarContext {
        count: state.expenses().len(),
        total: state.total(),
        message: status.map(str::to_string),
    };
    draw_status_bar(&ctx, frame, status_area);

    if state.expenses().is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No expenses yet."),
            Line::from("Press 'n' to add one."),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            table_area,
        );
    } else {
        let header = Row::new(vec!["Date", "Amount", "Description"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = state
            .expenses()
            .iter()
            .enumerate()
            .map(|(i, expense)| {
                let style = if state.selected() == Some(i) {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    expense.date.format("%Y-%m-%d").to_string(),
                    format!("{:.2}", expense.amount),
                    expense.description.clone(),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(10),
        ];
        frame.render_widget(Table::new(rows, widths).header(header), table_area);
    }

    let footer = Paragraph::new("n: add  Enter: edit  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
