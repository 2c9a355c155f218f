//! Expense storage: the [`ExpenseStore`] contract, an in-memory store, and
//! seed-file import.
//!
//! Expenses live only for the lifetime of the process. A seed file can
//! pre-populate the store at startup, but nothing is written back.

mod error;
mod memory;
mod seed;

pub use error::StorageError;
pub use memory::{ExpenseStore, MemoryStore};
pub use seed::load_seed;
