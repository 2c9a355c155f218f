use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Opaque identifier assigned to an [`Expense`] by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// The validated fields of an expense, without an identity.
///
/// This is the candidate record handed to the store on add and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseData {
    /// Creates a candidate record, enforcing the stored-expense invariant:
    /// non-blank description, finite non-negative amount, date not after `today`.
    pub fn new(
        description: String,
        amount: f64,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyField);
        }
        if !amount.is_finite() {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        if date > today {
            return Err(ValidationError::InvalidDate(date.format("%Y-%m-%d").to_string()));
        }
        Ok(Self {
            description,
            amount,
            date,
        })
    }
}

/// A persisted expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    /// Attaches an identity to validated data.
    pub fn from_data(id: ExpenseId, data: ExpenseData) -> Self {
        Self {
            id,
            description: data.description,
            amount: data.amount,
            date: data.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15)
    }

    #[test]
    fn valid_data() {
        let data = ExpenseData::new("Coffee".into(), 3.5, date(2023, 5, 1), today()).unwrap();
        assert_eq!(data.description, "Coffee");
        assert_eq!(data.amount, 3.5);
        assert_eq!(data.date, date(2023, 5, 1));
    }

    #[test]
    fn blank_description_rejected() {
        let result = ExpenseData::new("  ".into(), 3.5, date(2023, 5, 1), today());
        assert_eq!(result, Err(ValidationError::EmptyField));
    }

    #[test]
    fn negative_amount_rejected() {
        let result = ExpenseData::new("Coffee".into(), -0.5, date(2023, 5, 1), today());
        assert_eq!(result, Err(ValidationError::NegativeAmount(-0.5)));
    }

    #[test]
    fn nan_amount_rejected() {
        let result = ExpenseData::new("Coffee".into(), f64::NAN, date(2023, 5, 1), today());
        assert!(matches!(result, Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn future_date_rejected() {
        let result = ExpenseData::new("Coffee".into(), 1.0, date(2099, 1, 1), today());
        assert_eq!(
            result,
            Err(ValidationError::InvalidDate("2099-01-01".to_string()))
        );
    }

    #[test]
    fn from_data_attaches_id() {
        let data = ExpenseData::new("Rent".into(), 900.0, date(2024, 6, 1), today()).unwrap();
        let expense = Expense::from_data(ExpenseId(7), data);
        assert_eq!(expense.id, ExpenseId(7));
        assert_eq!(expense.description, "Rent");
        assert_eq!(expense.amount, 900.0);
        assert_eq!(expense.date, date(2024, 6, 1));
    }

    #[test]
    fn id_display() {
        assert_eq!(ExpenseId(42).to_string(), "e42");
    }

    #[test]
    fn data_deserializes_iso_date() {
        let json = r#"{"description":"Bus","amount":2.75,"date":"2024-03-09"}"#;
        let data: ExpenseData = serde_json::from_str(json).unwrap();
        assert_eq!(data.date, date(2024, 3, 9));
        assert_eq!(data.amount, 2.75);
    }
}
