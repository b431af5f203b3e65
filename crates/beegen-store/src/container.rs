//! The model container.
//!
//! The Bee Gen Model Framework stores metadata describing an application
//! design, as imported from a CA Gen local model, in a SQLite database.
//! `Container` connects to that database read-only and answers row queries
//! against its tables.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::error::Error;
use crate::predicate::Predicate;
use crate::row::{Row, Value};
use crate::schema::{ColumnKind, TableSchema};

/// An open model container.
pub struct Container {
    conn: Connection,
    location: PathBuf,
}

impl Container {
    /// Open the container at the given location.
    ///
    /// The database is opened read-only; a missing or unreadable file is an
    /// open error, never an implicit empty container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "opened model container");
        Ok(Self {
            conn,
            location: path.to_path_buf(),
        })
    }

    /// Location this container was opened from.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Select all rows of `table` matching `predicate`, in store order.
    pub fn query(&self, table: &TableSchema, predicate: &Predicate) -> Result<Vec<Row>, Error> {
        let (sql, params) = match predicate.where_clause() {
            Some((clause, params)) => (
                format!(
                    "SELECT {} FROM {} WHERE {}",
                    table.select_list(),
                    table.name,
                    clause
                ),
                params,
            ),
            None => (
                format!("SELECT {} FROM {}", table.select_list(), table.name),
                Vec::new(),
            ),
        };
        debug!(table = table.name, "container query");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(decode_row(table, row)?);
        }
        Ok(out)
    }

    /// Count rows of `table` matching `predicate`.
    pub fn count(&self, table: &TableSchema, predicate: &Predicate) -> Result<u64, Error> {
        let (sql, params) = match predicate.where_clause() {
            Some((clause, params)) => (
                format!("SELECT COUNT(*) FROM {} WHERE {}", table.name, clause),
                params,
            ),
            None => (format!("SELECT COUNT(*) FROM {}", table.name), Vec::new()),
        };
        debug!(table = table.name, "container count");

        let count: i64 =
            self.conn
                .query_row(&sql, rusqlite::params_from_iter(params), |r| r.get(0))?;
        Ok(count as u64)
    }

    /// In-memory read-write container for seeding test fixtures.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn,
            location: PathBuf::from(":memory:"),
        })
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &Connection {
        &self.conn
    }
}

/// Decode one SQLite row against the table descriptor.
fn decode_row(table: &TableSchema, row: &rusqlite::Row<'_>) -> Result<Row, Error> {
    let mut values = Vec::with_capacity(table.columns.len());
    for (index, column) in table.columns.iter().enumerate() {
        let value = match column.kind {
            ColumnKind::Integer => row
                .get::<_, Option<i64>>(index)
                .map(|v| v.map_or(Value::Null, Value::Integer)),
            ColumnKind::Text => row
                .get::<_, Option<String>>(index)
                .map(|v| v.map_or(Value::Null, Value::Text)),
        };
        let value = value.map_err(|err| match err {
            rusqlite::Error::InvalidColumnType(..) => Error::ColumnType {
                table: table.name,
                column: column.name,
            },
            other => Error::Sqlite(other),
        })?;
        values.push((column.name, value));
    }
    Ok(Row::new(table.name, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn seeded_container() -> Container {
        let container = Container::open_in_memory().unwrap();
        container
            .raw()
            .execute_batch(
                r#"
            CREATE TABLE GenObjects (
                id INTEGER PRIMARY KEY,
                objType INTEGER NOT NULL,
                objMnemonic TEXT NOT NULL,
                name TEXT NOT NULL
            );
            INSERT INTO GenObjects VALUES (1, 21, 'ACBLKBSD', 'PERSON_CREATE');
            INSERT INTO GenObjects VALUES (2, 21, 'ACBLKBSD', 'PERSON_DELETE');
            INSERT INTO GenObjects VALUES (3, 9, 'HLENT', 'PERSON');

            CREATE TABLE GenAssociations (
                fromObjid INTEGER NOT NULL,
                ascType INTEGER NOT NULL,
                toObjid INTEGER NOT NULL,
                inverseAscType INTEGER NOT NULL,
                ascMnemonic TEXT NOT NULL,
                card TEXT,
                direction TEXT,
                seqno TEXT
            );
            INSERT INTO GenAssociations VALUES (1, 50, 3, 51, 'USESEXST', 'M', 'F', NULL);
            "#,
            )
            .unwrap();
        container
    }

    #[test]
    fn test_query_all() {
        let container = seeded_container();
        let rows = container.query(&schema::OBJECTS, &Predicate::all()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get_integer("id").unwrap(), 1);
    }

    #[test]
    fn test_query_filtered() {
        let container = seeded_container();
        let pred = Predicate::integer_eq("objType", 21)
            .and(Predicate::text_eq("name", "PERSON_DELETE"));
        let rows = container.query(&schema::OBJECTS, &pred).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_text("objMnemonic").unwrap(), "ACBLKBSD");
    }

    #[test]
    fn test_query_no_match() {
        let container = seeded_container();
        let rows = container
            .query(&schema::OBJECTS, &Predicate::integer_eq("id", 999))
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_nullable_column_decodes_to_none() {
        let container = seeded_container();
        let rows = container
            .query(&schema::ASSOCIATIONS, &Predicate::all())
            .unwrap();
        assert_eq!(rows[0].get_text_opt("card").unwrap().as_deref(), Some("M"));
        assert_eq!(rows[0].get_text_opt("seqno").unwrap(), None);
    }

    #[test]
    fn test_count() {
        let container = seeded_container();
        let total = container.count(&schema::OBJECTS, &Predicate::all()).unwrap();
        assert_eq!(total, 3);
        let typed = container
            .count(&schema::OBJECTS, &Predicate::integer_eq("objType", 21))
            .unwrap();
        assert_eq!(typed, 2);
    }

    #[test]
    fn test_missing_table_is_store_error() {
        let container = Container::open_in_memory().unwrap();
        let result = container.query(&schema::OBJECTS, &Predicate::all());
        assert!(matches!(result, Err(Error::Sqlite(_))));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Container::open(dir.path().join("absent.db"));
        assert!(matches!(result, Err(Error::Open { .. })));
    }
}
