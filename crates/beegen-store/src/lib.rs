//! Bee Gen row store adapter.
//!
//! A Bee Gen container is a SQLite database exported from a CA Gen local
//! model. This crate wraps the container behind a minimal row-query
//! interface: select rows from a named table matching a predicate, and
//! count rows matching a predicate. Everything above it (object graph
//! navigation, property coercion, schema introspection) lives in
//! `beegen-core`.
//!
//! The container is opened read-only; this crate exposes no write surface.

pub mod container;
pub mod error;
pub mod predicate;
pub mod row;
pub mod schema;

pub use container::Container;
pub use error::Error;
pub use predicate::Predicate;
pub use row::{Row, Value};
pub use schema::{ColumnDef, ColumnKind, TableSchema};
