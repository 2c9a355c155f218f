use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Validation errors for expense form input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("description and amount cannot be empty")]
    EmptyField,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(f64),
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl ValidationError {
    /// Title shown on the alert that reports this error.
    pub fn alert_title(&self) -> &'static str {
        match self {
            Self::EmptyField | Self::InvalidAmount(_) => "Invalid Input",
            Self::NegativeAmount(_) => "Invalid Amount",
            Self::InvalidDate(_) => "Invalid Date",
        }
    }

    /// Body text shown on the alert that reports this error.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::EmptyField => "Description and amount cannot be empty.",
            Self::InvalidAmount(_) => "Amount must be a valid number.",
            Self::NegativeAmount(_) => "Amount must not be negative.",
            Self::InvalidDate(_) => {
                "Please enter a valid date in the format YYYY-MM-DD and not in the future."
            }
        }
    }
}

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid hardcoded regex"));

/// Checks that the description and amount are non-empty once surrounding
/// whitespace is removed.
pub fn validate_required(description: &str, amount: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() || amount.trim().is_empty() {
        Err(ValidationError::EmptyField)
    } else {
        Ok(())
    }
}

/// Parses an amount, rejecting non-numeric, non-finite and negative values.
pub fn parse_amount(amount: &str) -> Result<f64, ValidationError> {
    let trimmed = amount.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount(value));
    }
    // `-0` parses to negative zero; store it as plain zero.
    Ok(value + 0.0)
}

/// Parses a `YYYY-MM-DD` date that is not after `today`.
///
/// The literal shape is checked first so that `chrono`'s more lenient parser
/// never sees inputs like `2023-1-1` or `+2023-01-01`.
pub fn parse_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(date.to_string());
    if date.is_empty() || !DATE_RE.is_match(date) {
        return Err(invalid());
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed > today {
        return Err(invalid());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    // --- validate_required ---

    #[test]
    fn required_both_present() {
        assert_eq!(validate_required("Coffee", "3.50"), Ok(()));
    }

    #[test]
    fn required_empty_description() {
        assert_eq!(
            validate_required("", "3.50"),
            Err(ValidationError::EmptyField)
        );
    }

    #[test]
    fn required_whitespace_amount() {
        assert_eq!(
            validate_required("Coffee", "   "),
            Err(ValidationError::EmptyField)
        );
    }

    #[test]
    fn required_whitespace_description() {
        assert_eq!(
            validate_required(" \t ", "5"),
            Err(ValidationError::EmptyField)
        );
    }

    // --- parse_amount ---

    #[test]
    fn amount_decimal() {
        assert_eq!(parse_amount("3.50"), Ok(3.5));
    }

    #[test]
    fn amount_zero_is_allowed() {
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn amount_negative_zero_is_plain_zero() {
        let value = parse_amount("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn amount_surrounding_whitespace() {
        assert_eq!(parse_amount("  12.5 "), Ok(12.5));
    }

    #[test]
    fn amount_negative() {
        assert_eq!(
            parse_amount("-1"),
            Err(ValidationError::NegativeAmount(-1.0))
        );
    }

    #[test]
    fn amount_non_numeric() {
        assert_eq!(
            parse_amount("abc"),
            Err(ValidationError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn amount_trailing_garbage() {
        assert_eq!(
            parse_amount("3.50abc"),
            Err(ValidationError::InvalidAmount("3.50abc".to_string()))
        );
    }

    #[test]
    fn amount_nan_and_infinity_rejected() {
        assert!(matches!(
            parse_amount("NaN"),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("inf"),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[quickcheck]
    fn amount_non_negative_finite_always_accepted(value: f64) -> bool {
        if !value.is_finite() {
            return true;
        }
        let value = value.abs();
        parse_amount(&value.to_string()) == Ok(value)
    }

    #[quickcheck]
    fn amount_negative_always_rejected(value: f64) -> bool {
        if !value.is_finite() || value >= 0.0 {
            return true;
        }
        matches!(
            parse_amount(&value.to_string()),
            Err(ValidationError::NegativeAmount(_))
        )
    }

    // --- parse_date ---

    #[test]
    fn date_in_past() {
        assert_eq!(
            parse_date("2023-01-01", today()),
            Ok(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        );
    }

    #[test]
    fn date_today_is_allowed() {
        assert_eq!(parse_date("2024-06-15", today()), Ok(today()));
    }

    #[test]
    fn date_tomorrow_rejected() {
        assert_eq!(
            parse_date("2024-06-16", today()),
            Err(ValidationError::InvalidDate("2024-06-16".to_string()))
        );
    }

    #[test]
    fn date_empty() {
        assert_eq!(
            parse_date("", today()),
            Err(ValidationError::InvalidDate(String::new()))
        );
    }

    #[test]
    fn date_missing_zero_padding() {
        assert_eq!(
            parse_date("2023-1-1", today()),
            Err(ValidationError::InvalidDate("2023-1-1".to_string()))
        );
    }

    #[test]
    fn date_wrong_separator() {
        assert_eq!(
            parse_date("2023/01/01", today()),
            Err(ValidationError::InvalidDate("2023/01/01".to_string()))
        );
    }

    #[test]
    fn date_with_time_rejected() {
        assert_eq!(
            parse_date("2023-01-01T10:00", today()),
            Err(ValidationError::InvalidDate("2023-01-01T10:00".to_string()))
        );
    }

    #[test]
    fn date_impossible_calendar_day() {
        assert_eq!(
            parse_date("2023-02-30", today()),
            Err(ValidationError::InvalidDate("2023-02-30".to_string()))
        );
    }

    #[test]
    fn date_surrounding_whitespace_rejected() {
        assert_eq!(
            parse_date(" 2023-01-01", today()),
            Err(ValidationError::InvalidDate(" 2023-01-01".to_string()))
        );
    }

    #[quickcheck]
    fn date_any_past_day_accepted(days_back: u16) -> bool {
        let date = today() - chrono::Days::new(u64::from(days_back));
        parse_date(&date.format("%Y-%m-%d").to_string(), today()) == Ok(date)
    }

    // --- alert text ---

    #[test]
    fn alert_text_per_variant() {
        let cases = [
            (
                ValidationError::EmptyField,
                "Invalid Input",
                "Description and amount cannot be empty.",
            ),
            (
                ValidationError::InvalidAmount("x".into()),
                "Invalid Input",
                "Amount must be a valid number.",
            ),
            (
                ValidationError::NegativeAmount(-2.0),
                "Invalid Amount",
                "Amount must not be negative.",
            ),
            (
                ValidationError::InvalidDate("x".into()),
                "Invalid Date",
                "Please enter a valid date in the format YYYY-MM-DD and not in the future.",
            ),
        ];
        for (err, title, message) in cases {
            assert_eq!(err.alert_title(), title, "{err:?} title mismatch");
            assert_eq!(err.alert_message(), message, "{err:?} message mismatch");
        }
    }
}
