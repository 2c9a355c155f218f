use crate::model::ExpenseId;
use crate::storage::StorageError;

/// Failures of the form that are not user-input validation errors.
///
/// Validation errors never surface here: they are reported through
/// [`Alerting`](super::Alerting) and the form stays open.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The expense being edited does not exist in the store.
    #[error("expense {0} not found")]
    RecordNotFound(ExpenseId),

    /// The store rejected a write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
