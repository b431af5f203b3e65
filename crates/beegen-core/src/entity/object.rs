//! Model objects.

use beegen_store::Row;
use serde::Serialize;

use crate::error::Error;

/// A single element of the model.
///
/// A model owns any number of objects of many different types. Each object
/// may carry properties and associations to other objects; following
/// associations discovers further objects, so any selected object can be a
/// starting point for navigating the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenObject {
    /// Unique object identifier (primary key).
    pub id: i64,
    /// Object type code.
    pub obj_type: i64,
    /// Type mnemonic as exported.
    pub obj_mnemonic: String,
    /// Object name given in the modeling tool.
    pub name: String,
}

impl GenObject {
    /// Decode from a `GenObjects` row.
    pub(crate) fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            id: row.get_integer("id")?,
            obj_type: row.get_integer("objType")?,
            obj_mnemonic: row.get_text("objMnemonic")?,
            name: row.get_text("name")?,
        })
    }
}
