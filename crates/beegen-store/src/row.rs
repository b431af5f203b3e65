//! Materialized rows and scalar values.

use serde::Serialize;

use crate::error::Error;

/// A scalar read from the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit integer.
    Integer(i64),
    /// UTF-8 text.
    Text(String),
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{Null, ToSqlOutput};
        match self {
            Value::Null => Ok(ToSqlOutput::from(Null)),
            Value::Integer(v) => Ok(ToSqlOutput::from(*v)),
            Value::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
        }
    }
}

/// One row fetched from a container table.
///
/// Values are kept in select order as `(column, Value)` pairs; accessors
/// resolve columns by name and enforce the storage class declared in the
/// table schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    table: &'static str,
    values: Vec<(&'static str, Value)>,
}

impl Row {
    /// Assemble a row from decoded column values.
    pub(crate) fn new(table: &'static str, values: Vec<(&'static str, Value)>) -> Self {
        Self { table, values }
    }

    /// Name of the table this row was selected from.
    pub fn table(&self) -> &'static str {
        self.table
    }

    fn lookup(&self, column: &'static str) -> Result<&Value, Error> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
            .ok_or(Error::MissingColumn {
                table: self.table,
                column,
            })
    }

    /// Read a non-null integer column.
    pub fn get_integer(&self, column: &'static str) -> Result<i64, Error> {
        match self.lookup(column)? {
            Value::Integer(v) => Ok(*v),
            _ => Err(Error::ColumnType {
                table: self.table,
                column,
            }),
        }
    }

    /// Read a non-null text column.
    pub fn get_text(&self, column: &'static str) -> Result<String, Error> {
        match self.lookup(column)? {
            Value::Text(v) => Ok(v.clone()),
            _ => Err(Error::ColumnType {
                table: self.table,
                column,
            }),
        }
    }

    /// Read a nullable text column.
    pub fn get_text_opt(&self, column: &'static str) -> Result<Option<String>, Error> {
        match self.lookup(column)? {
            Value::Text(v) => Ok(Some(v.clone())),
            Value::Null => Ok(None),
            Value::Integer(_) => Err(Error::ColumnType {
                table: self.table,
                column,
            }),
        }
    }
}
