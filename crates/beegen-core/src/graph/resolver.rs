//! Property fetch and format-gated coercion.

use beegen_store::{schema, Container, Predicate};

use crate::entity::{GenProperty, PropertyFormat};
use crate::error::Error;

/// Fetches property rows and decodes them by format tag.
///
/// The `find_*` accessors are the sentinel tier: a property that is absent
/// or carries a non-matching format yields the format's sentinel value
/// instead of an error, so navigating an unfamiliar schema never fails on a
/// missing attribute. [`GenProperty::number_value`] is the raising tier
/// underneath.
pub struct PropertyResolver<'a> {
    container: &'a Container,
}

impl<'a> PropertyResolver<'a> {
    /// Create a resolver view over the container.
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// All properties of an object, unordered.
    pub fn fetch_all(&self, objid: i64) -> Result<Vec<GenProperty>, Error> {
        let rows = self
            .container
            .query(&schema::PROPERTIES, &Predicate::integer_eq("objid", objid))?;
        rows.iter().map(GenProperty::from_row).collect()
    }

    /// First property of an object with the given type.
    pub fn fetch_by_type(&self, objid: i64, prp_type: i64) -> Result<Option<GenProperty>, Error> {
        Ok(self.fetch_typed(objid, prp_type)?.into_iter().next())
    }

    /// Character property value, or `"?"` when absent or not CHAR format.
    pub fn find_character_property(&self, objid: i64, prp_type: i64) -> Result<String, Error> {
        for property in self.fetch_typed(objid, prp_type)? {
            if property.kind() == PropertyFormat::Char {
                return Ok(property.value);
            }
        }
        Ok("?".to_string())
    }

    /// Text property value, or `""` when absent or not a textual format
    /// (TEXT, NAME, LOADNAME).
    pub fn find_text_property(&self, objid: i64, prp_type: i64) -> Result<String, Error> {
        for property in self.fetch_typed(objid, prp_type)? {
            if property.kind().is_textual() {
                return Ok(property.value);
            }
        }
        Ok(String::new())
    }

    /// Numeric property value, or `0` when absent or not a numeric format
    /// (INT, SINT).
    ///
    /// A property whose format claims numeric but whose stored text does
    /// not parse is an inconsistency in the container itself and propagates
    /// [`Error::PropertyNotNumeric`].
    pub fn find_number_property(&self, objid: i64, prp_type: i64) -> Result<i64, Error> {
        for property in self.fetch_typed(objid, prp_type)? {
            if property.kind().is_numeric() {
                return property.number_value();
            }
        }
        Ok(0)
    }

    fn fetch_typed(&self, objid: i64, prp_type: i64) -> Result<Vec<GenProperty>, Error> {
        let pred =
            Predicate::integer_eq("objid", objid).and(Predicate::integer_eq("prpType", prp_type));
        let rows = self.container.query(&schema::PROPERTIES, &pred)?;
        rows.iter().map(GenProperty::from_row).collect()
    }
}
