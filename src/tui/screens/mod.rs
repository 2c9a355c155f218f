//! TUI screen implementations.

pub mod expense_list;
pub mod manage_expense;

pub use expense_list::{ExpenseListState, draw_expense_list};
pub use manage_expense::{ExpenseForm, ManageExpenseState, draw_manage_expense};
