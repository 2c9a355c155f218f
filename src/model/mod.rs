mod draft;
mod expense;
mod validation;

pub use draft::Draft;
pub use expense::{Expense, ExpenseData, ExpenseId};
pub use validation::{ValidationError, parse_amount, parse_date, validate_required};
