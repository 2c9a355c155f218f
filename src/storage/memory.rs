use super::error::StorageError;
use crate::model::{Expense, ExpenseData, ExpenseId};

/// The collection of persisted expenses that screens read from and write to.
///
/// Mutations are atomic from the caller's point of view. Every successful
/// mutation bumps [`revision`](Self::revision), which lets readers detect that
/// their view of the collection is stale.
pub trait ExpenseStore {
    /// Returns the current snapshot of all expenses.
    fn expenses(&self) -> &[Expense];

    /// Returns a counter that changes on every successful mutation.
    fn revision(&self) -> u64;

    /// Adds a new expense and returns its freshly assigned ID.
    fn add_expense(&mut self, data: ExpenseData) -> ExpenseId;

    /// Replaces the fields of an existing expense, keeping its ID.
    fn update_expense(&mut self, id: ExpenseId, data: ExpenseData) -> Result<(), StorageError>;

    /// Removes an expense.
    fn delete_expense(&mut self, id: ExpenseId) -> Result<(), StorageError>;

    /// Finds an expense by ID.
    fn lookup(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses().iter().find(|e| e.id == id)
    }

    /// Returns the sum of all stored amounts.
    fn total(&self) -> f64 {
        self.expenses().iter().map(|e| e.amount).sum()
    }
}

/// An [`ExpenseStore`] held entirely in memory.
///
/// IDs are assigned from a monotonically increasing counter and never reused,
/// even after deletion.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
    next_id: u64,
    revision: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records, in order.
    pub fn with_expenses(records: impl IntoIterator<Item = ExpenseData>) -> Self {
        let mut store = Self::new();
        for data in records {
            store.add_expense(data);
        }
        store
    }

    /// Returns the number of stored expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns `true` if the store holds no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, id: ExpenseId) -> Result<usize, StorageError> {
        self.expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(StorageError::NotFound(id))
    }
}

impl ExpenseStore for MemoryStore {
    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn add_expense(&mut self, data: ExpenseData) -> ExpenseId {
        self.next_id += 1;
        let id = ExpenseId(self.next_id);
        self.expenses.push(Expense::from_data(id, data));
        self.revision += 1;
        tracing::debug!(%id, "expense added");
        id
    }

    fn update_expense(&mut self, id: ExpenseId, data: ExpenseData) -> Result<(), StorageError> {
        let index = self.position(id)?;
        self.expenses[index] = Expense::from_data(id, data);
        self.revision += 1;
        tracing::debug!(%id, "expense updated");
        Ok(())
    }

    fn delete_expense(&mut self, id: ExpenseId) -> Result<(), StorageError> {
        let index = self.position(id)?;
        self.expenses.remove(index);
        self.revision += 1;
        tracing::debug!(%id, "expense deleted");
        Ok(())
    }
}
