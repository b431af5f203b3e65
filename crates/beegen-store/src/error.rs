//! Store-level error types.

use std::path::PathBuf;
use thiserror::Error;

/// Row store errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The container file could not be opened.
    #[error("cannot open container at {path}: {source}")]
    Open {
        /// Location the open was attempted against.
        path: PathBuf,
        /// Underlying SQLite failure.
        source: rusqlite::Error,
    },

    /// Any other SQLite-level failure (I/O, malformed query).
    #[error("store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A requested column is not present in the row.
    #[error("column `{column}` missing from table `{table}`")]
    MissingColumn {
        /// Table the row came from.
        table: &'static str,
        /// Requested column name.
        column: &'static str,
    },

    /// A column holds a value of an unexpected type.
    #[error("column `{column}` in table `{table}` has an unexpected type")]
    ColumnType {
        /// Table the row came from.
        table: &'static str,
        /// Offending column name.
        column: &'static str,
    },
}
