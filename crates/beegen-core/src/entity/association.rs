//! Association edges.

use std::fmt;

use beegen_store::Row;
use serde::Serialize;

use crate::error::Error;

/// Declared cardinality of an association instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    /// Exactly one target.
    One,
    /// A collection of targets.
    Many,
}

impl Cardinality {
    /// The tag the exporter stores in the `card` column.
    pub fn tag(&self) -> &'static str {
        match self {
            Cardinality::One => "1",
            Cardinality::Many => "M",
        }
    }

    /// Parse a stored tag. Unknown tags are `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Cardinality::One),
            "M" => Some(Cardinality::Many),
            _ => None,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::One => write!(f, "ONE"),
            Cardinality::Many => write!(f, "MANY"),
        }
    }
}

/// A directed, typed edge between two objects.
///
/// Carries the literal stored row, cardinality tag included. The tag is a
/// declared-at-the-edge-instance property: traversal validates it per row
/// rather than trusting the schema-level contract, catching miscategorized
/// import data at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenAssociation {
    /// Source object id.
    pub from_objid: i64,
    /// Association type code.
    pub asc_type: i64,
    /// Target object id.
    pub to_objid: i64,
    /// Type code of the inverse association.
    pub inverse_asc_type: i64,
    /// Association mnemonic as exported.
    pub mnemonic: String,
    /// Stored cardinality tag, if any.
    pub card: Option<String>,
    /// Stored direction tag, if any.
    pub direction: Option<String>,
    /// Ordering sequence number, if any.
    pub seqno: Option<String>,
}

impl GenAssociation {
    /// Decode from a `GenAssociations` row.
    pub(crate) fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            from_objid: row.get_integer("fromObjid")?,
            asc_type: row.get_integer("ascType")?,
            to_objid: row.get_integer("toObjid")?,
            inverse_asc_type: row.get_integer("inverseAscType")?,
            mnemonic: row.get_text("ascMnemonic")?,
            card: row.get_text_opt("card")?,
            direction: row.get_text_opt("direction")?,
            seqno: row.get_text_opt("seqno")?,
        })
    }

    /// Parsed cardinality tag. Absent or unknown tags are `None`.
    pub fn cardinality(&self) -> Option<Cardinality> {
        self.card.as_deref().and_then(Cardinality::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_tags() {
        assert_eq!(Cardinality::parse("1"), Some(Cardinality::One));
        assert_eq!(Cardinality::parse("M"), Some(Cardinality::Many));
        assert_eq!(Cardinality::parse("X"), None);
        assert_eq!(Cardinality::parse(""), None);
        assert_eq!(Cardinality::One.tag(), "1");
        assert_eq!(Cardinality::Many.tag(), "M");
    }

    #[test]
    fn test_cardinality_display() {
        assert_eq!(Cardinality::One.to_string(), "ONE");
        assert_eq!(Cardinality::Many.to_string(), "MANY");
    }

    #[test]
    fn test_edge_cardinality() {
        let edge = GenAssociation {
            from_objid: 1,
            asc_type: 50,
            to_objid: 2,
            inverse_asc_type: 51,
            mnemonic: "USESEXST".into(),
            card: Some("M".into()),
            direction: Some("F".into()),
            seqno: None,
        };
        assert_eq!(edge.cardinality(), Some(Cardinality::Many));

        let untagged = GenAssociation { card: None, ..edge };
        assert_eq!(untagged.cardinality(), None);
    }
}
