use std::path::PathBuf;

use crate::error::ConfigError;

pub const CSV_FILE_PATH_VAR: &str = "CSV_FILE_PATH";
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Where to read rows from and which table to write them to.
///
/// Both values are required and must be non-blank. They are otherwise used
/// verbatim: the path is handed to the file system as given, and the table
/// name is sent to DynamoDB as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub csv_file_path: PathBuf,
    pub table_name: String,
}

impl ImportConfig {
    pub fn new(
        csv_file_path: impl Into<PathBuf>,
        table_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let csv_file_path = csv_file_path.into();
        let table_name = table_name.into();

        if csv_file_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::Empty(CSV_FILE_PATH_VAR));
        }
        if table_name.trim().is_empty() {
            return Err(ConfigError::Empty(TABLE_NAME_VAR));
        }

        Ok(Self {
            csv_file_path,
            table_name,
        })
    }

    /// Reads `CSV_FILE_PATH` and `TABLE_NAME` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Lets callers (and tests) supply values without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let csv_file_path =
            lookup(CSV_FILE_PATH_VAR).ok_or(ConfigError::Missing(CSV_FILE_PATH_VAR))?;
        let table_name = lookup(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        Self::new(csv_file_path, table_name)
    }
}
