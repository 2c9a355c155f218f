use std::fs;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;

use super::error::StorageError;
use crate::model::ExpenseData;

/// Reads a JSON array of `{description, amount, date}` records.
///
/// Every entry is checked against the same invariant the expense form
/// enforces; the first failing entry aborts the whole import.
pub fn load_seed(path: &Path, today: NaiveDate) -> Result<Vec<ExpenseData>, StorageError> {
    let file = fs::File::open(path)?;
    let raw: Vec<ExpenseData> = serde_json::from_reader(BufReader::new(file))?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            ExpenseData::new(entry.description, entry.amount, entry.date, today).map_err(
                |source| StorageError::InvalidSeed {
                    path: path.to_path_buf(),
                    index,
                    source,
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = records.len(), path = %path.display(), "seed loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::model::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_records() {
        let file = seed_file(
            r#"[
                {"description": "Coffee", "amount": 3.5, "date": "2024-05-01"},
                {"description": "Rent", "amount": 900, "date": "2024-06-01"}
            ]"#,
        );
        let records = load_seed(file.path(), today()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "Coffee");
        assert_eq!(records[1].amount, 900.0);
    }

    #[test]
    fn empty_array_is_ok() {
        let file = seed_file("[]");
        assert!(load_seed(file.path(), today()).unwrap().is_empty());
    }

    #[test]
    fn future_entry_rejected_with_index() {
        let file = seed_file(
            r#"[
                {"description": "Coffee", "amount": 3.5, "date": "2024-05-01"},
                {"description": "Later", "amount": 1, "date": "2099-01-01"}
            ]"#,
        );
        let err = load_seed(file.path(), today()).unwrap_err();
        match err {
            StorageError::InvalidSeed { index, source, .. } => {
                assert_eq!(index, 1);
                assert!(matches!(source, ValidationError::InvalidDate(_)));
            }
            other => panic!("expected InvalidSeed, got {other:?}"),
        }
    }

    #[test]
    fn negative_entry_rejected() {
        let file = seed_file(r#"[{"description": "Refund", "amount": -4, "date": "2024-05-01"}]"#);
        let err = load_seed(file.path(), today()).unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidSeed {
                source: ValidationError::NegativeAmount(_),
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let file = seed_file("{not json");
        assert!(matches!(
            load_seed(file.path(), today()),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            load_seed(&path, today()),
            Err(StorageError::Io(_))
        ));
    }
}
