use super::expense::Expense;

/// Raw, unvalidated text for the three editable expense fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl Draft {
    /// Pre-populates a draft from a stored expense.
    ///
    /// The amount uses the shortest decimal form that round-trips (`12.5`, `3`),
    /// the date uses `YYYY-MM-DD`.
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
        }
    }
}
