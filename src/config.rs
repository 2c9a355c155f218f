//! Runtime configuration read from environment variables.

use std::path::PathBuf;

use crate::storage::StorageError;

/// Overrides the data directory (log file location).
pub const DATA_DIR_VAR: &str = "SPENDLOG_DATA_DIR";
/// `tracing` filter directive, e.g. `spendlog=debug`.
pub const LOG_VAR: &str = "SPENDLOG_LOG";
/// Optional JSON file of expenses loaded at startup.
pub const SEED_VAR: &str = "SPENDLOG_SEED";

/// Filter used when [`LOG_VAR`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "spendlog=info";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the log file.
    pub data_dir: PathBuf,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Seed file to import at startup, if any.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// Without [`DATA_DIR_VAR`], falls back to `~/.local/share/spendlog/`
    /// (or the platform equivalent).
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|name| std::env::var(name).ok(), dirs::data_dir)
    }

    /// Builds settings from a variable lookup and a default data directory.
    ///
    /// Empty variables are treated as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        default_data_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, StorageError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let data_dir = match var(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()
                .ok_or(StorageError::NoDataDir)?
                .join("spendlog"),
        };

        Ok(Self {
            data_dir,
            log_filter: var(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            seed_path: var(SEED_VAR).map(PathBuf::from),
        })
    }

    /// Path of the log file inside the data directory.
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("spendlog.log")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn home_data() -> Option<PathBuf> {
        Some(PathBuf::from("/home/u/.local/share"))
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[]), home_data).unwrap();
        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/u/.local/share/spendlog")
        );
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn overrides() {
        let vars = lookup(&[
            (DATA_DIR_VAR, "/tmp/spend"),
            (LOG_VAR, "spendlog=debug"),
            (SEED_VAR, "/tmp/seed.json"),
        ]);
        let config = Config::from_lookup(vars, home_data).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/spend"));
        assert_eq!(config.log_filter, "spendlog=debug");
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn empty_vars_are_unset() {
        let vars = lookup(&[(LOG_VAR, ""), (SEED_VAR, "  ")]);
        let config = Config::from_lookup(vars, home_data).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn no_data_dir_is_error() {
        let result = Config::from_lookup(lookup(&[]), || None);
        assert!(matches!(result, Err(StorageError::NoDataDir)));
    }

    #[test]
    fn explicit_data_dir_skips_default() {
        let vars = lookup(&[(DATA_DIR_VAR, "/srv/spend")]);
        let config = Config::from_lookup(vars, || None).unwrap();
        assert_eq!(config.log_file(), PathBuf::from("/srv/spend/spendlog.log"));
    }
}
