//! Schema-level records.

use beegen_store::Row;
use serde::Serialize;

use crate::error::Error;

/// Declares, per object type, a legal association type and its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaAssociation {
    /// Source object type code.
    pub from_obj_type: i64,
    /// Association type code.
    pub asc_type: i64,
    /// Association mnemonic.
    pub mnemonic: String,
    /// Direction tag ("F" marks forward).
    pub direction: String,
    /// Type code of the inverse association.
    pub inverse_asc_type: i64,
    /// Optionality tag ("Y" marks optional).
    pub optionality: String,
    /// Cardinality tag ("1" marks one-to-one).
    pub card: String,
    /// Ordering tag ("Y" marks ordered).
    pub ordered: String,
}

impl MetaAssociation {
    /// Decode from a `GenMetaAssociations` row.
    pub(crate) fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            from_obj_type: row.get_integer("fromObjType")?,
            asc_type: row.get_integer("ascType")?,
            mnemonic: row.get_text("ascMnemonic")?,
            direction: row.get_text("direction")?,
            inverse_asc_type: row.get_integer("inverseAscType")?,
            optionality: row.get_text("optionality")?,
            card: row.get_text("card")?,
            ordered: row.get_text("ordered")?,
        })
    }
}

/// Declares, per object type, a legal property type and its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaProperty {
    /// Object type code.
    pub obj_type: i64,
    /// Property type code.
    pub prp_type: i64,
    /// Property mnemonic.
    pub mnemonic: String,
    /// Declared value format tag.
    pub format: String,
    /// Declared value length.
    pub length: i64,
    /// Default for numeric formats.
    pub default_number: i64,
    /// Default for textual formats.
    pub default_text: String,
    /// Default for the character format.
    pub default_char: String,
}

impl MetaProperty {
    /// Decode from a `GenMetaProperties` row.
    pub(crate) fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            obj_type: row.get_integer("objType")?,
            prp_type: row.get_integer("prpType")?,
            mnemonic: row.get_text("prpMnemonic")?,
            format: row.get_text("format")?,
            length: row.get_integer("length")?,
            default_number: row.get_integer("defaultInt")?,
            default_text: row.get_text("defaultText")?,
            default_char: row.get_text("defaultChar")?,
        })
    }
}
