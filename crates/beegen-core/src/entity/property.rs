//! Object properties.

use beegen_store::Row;
use serde::Serialize;

use crate::error::Error;

/// Format tag of a stored property value.
///
/// The stored value is always text; the format tag says how to read it.
/// Tags the exporter writes that this API has no special handling for
/// decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyFormat {
    /// Single character.
    Char,
    /// Free text.
    Text,
    /// Object name.
    Name,
    /// Load module name.
    LoadName,
    /// Unsigned integer.
    Int,
    /// Signed integer.
    SInt,
    /// Any other format tag.
    Other,
}

impl PropertyFormat {
    /// Parse a stored format tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "CHAR" => PropertyFormat::Char,
            "TEXT" => PropertyFormat::Text,
            "NAME" => PropertyFormat::Name,
            "LOADNAME" => PropertyFormat::LoadName,
            "INT" => PropertyFormat::Int,
            "SINT" => PropertyFormat::SInt,
            _ => PropertyFormat::Other,
        }
    }

    /// Whether values of this format decode as integers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, PropertyFormat::Int | PropertyFormat::SInt)
    }

    /// Whether values of this format decode as text.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            PropertyFormat::Text | PropertyFormat::Name | PropertyFormat::LoadName
        )
    }
}

/// A typed attribute attached to an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenProperty {
    /// Owning object id.
    pub objid: i64,
    /// Property type code.
    pub prp_type: i64,
    /// Property mnemonic as exported.
    pub mnemonic: String,
    /// Stored format tag.
    pub format: String,
    /// Stored textual value.
    pub value: String,
}

impl GenProperty {
    /// Decode from a `GenProperties` row.
    pub(crate) fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            objid: row.get_integer("objid")?,
            prp_type: row.get_integer("prpType")?,
            mnemonic: row.get_text("mnemonic")?,
            format: row.get_text("format")?,
            value: row.get_text("value")?,
        })
    }

    /// Parsed format tag.
    pub fn kind(&self) -> PropertyFormat {
        PropertyFormat::parse(&self.format)
    }

    /// The stored value as text. Always available regardless of format.
    pub fn text_value(&self) -> &str {
        &self.value
    }

    /// The stored value as an integer.
    ///
    /// Fails with [`Error::PropertyNotNumeric`] when the format is not a
    /// numeric one, or when the format claims numeric but the stored text
    /// does not parse — the latter means the container itself is
    /// inconsistent.
    pub fn number_value(&self) -> Result<i64, Error> {
        if !self.kind().is_numeric() {
            return Err(Error::PropertyNotNumeric {
                objid: self.objid,
                prp_type: self.prp_type,
            });
        }
        self.value
            .parse::<i64>()
            .map_err(|_| Error::PropertyNotNumeric {
                objid: self.objid,
                prp_type: self.prp_type,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(format: &str, value: &str) -> GenProperty {
        GenProperty {
            objid: 7,
            prp_type: 143,
            mnemonic: "OPCODE".into(),
            format: format.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(PropertyFormat::parse("CHAR"), PropertyFormat::Char);
        assert_eq!(PropertyFormat::parse("LOADNAME"), PropertyFormat::LoadName);
        assert_eq!(PropertyFormat::parse("SINT"), PropertyFormat::SInt);
        assert_eq!(PropertyFormat::parse("BLOB"), PropertyFormat::Other);
    }

    #[test]
    fn test_number_value() {
        assert_eq!(property("INT", "21").number_value().unwrap(), 21);
        assert_eq!(property("SINT", "-3").number_value().unwrap(), -3);
    }

    #[test]
    fn test_number_value_wrong_format() {
        let err = property("TEXT", "21").number_value().unwrap_err();
        assert!(matches!(
            err,
            Error::PropertyNotNumeric {
                objid: 7,
                prp_type: 143,
            }
        ));
    }

    #[test]
    fn test_number_value_unparsable() {
        let err = property("INT", "twenty-one").number_value().unwrap_err();
        assert!(matches!(err, Error::PropertyNotNumeric { .. }));
    }

    #[test]
    fn test_text_value_is_raw() {
        assert_eq!(property("INT", "21").text_value(), "21");
    }
}
