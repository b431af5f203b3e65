//! Schema introspection queries.

use beegen_store::{schema, Container, Predicate};

use crate::error::Error;
use crate::meta::{MetaAssociation, MetaProperty};

/// Answers schema-level questions from the meta tables.
///
/// Missing schema metadata is expected for sparse legacy exports, so every
/// query degrades to a sentinel (`""`, `-1`, `false`) when no meta row
/// matches. Store-level failures still propagate.
pub struct MetaResolver<'a> {
    container: &'a Container,
}

impl<'a> MetaResolver<'a> {
    /// Create a resolver view over the container.
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Full schema record for an association type, if declared.
    pub fn meta_association(
        &self,
        obj_type: i64,
        asc_type: i64,
    ) -> Result<Option<MetaAssociation>, Error> {
        let pred = Predicate::integer_eq("fromObjType", obj_type)
            .and(Predicate::integer_eq("ascType", asc_type));
        let rows = self.container.query(&schema::META_ASSOCIATIONS, &pred)?;
        rows.first().map(MetaAssociation::from_row).transpose()
    }

    /// Full schema record for a property type, if declared.
    pub fn meta_property(
        &self,
        obj_type: i64,
        prp_type: i64,
    ) -> Result<Option<MetaProperty>, Error> {
        let pred = Predicate::integer_eq("objType", obj_type)
            .and(Predicate::integer_eq("prpType", prp_type));
        let rows = self.container.query(&schema::META_PROPERTIES, &pred)?;
        rows.first().map(MetaProperty::from_row).transpose()
    }

    /// Declared default for a character property, or `""` when undeclared.
    pub fn default_char_property(&self, obj_type: i64, prp_type: i64) -> Result<String, Error> {
        Ok(self
            .meta_property(obj_type, prp_type)?
            .map(|m| m.default_char)
            .unwrap_or_default())
    }

    /// Declared default for a text property, or `""` when undeclared.
    pub fn default_text_property(&self, obj_type: i64, prp_type: i64) -> Result<String, Error> {
        Ok(self
            .meta_property(obj_type, prp_type)?
            .map(|m| m.default_text)
            .unwrap_or_default())
    }

    /// Declared default for a numeric property, or `-1` when undeclared.
    pub fn default_number_property(&self, obj_type: i64, prp_type: i64) -> Result<i64, Error> {
        Ok(self
            .meta_property(obj_type, prp_type)?
            .map(|m| m.default_number)
            .unwrap_or(-1))
    }

    /// Association type codes legal for an object type.
    pub fn association_codes(&self, obj_type: i64) -> Result<Vec<i64>, Error> {
        let pred = Predicate::integer_eq("fromObjType", obj_type);
        let rows = self.container.query(&schema::META_ASSOCIATIONS, &pred)?;
        rows.iter()
            .map(|row| row.get_integer("ascType").map_err(Error::from))
            .collect()
    }

    /// Property type codes legal for an object type.
    pub fn property_codes(&self, obj_type: i64) -> Result<Vec<i64>, Error> {
        let pred = Predicate::integer_eq("objType", obj_type);
        let rows = self.container.query(&schema::META_PROPERTIES, &pred)?;
        rows.iter()
            .map(|row| row.get_integer("prpType").map_err(Error::from))
            .collect()
    }

    /// Whether the declared cardinality is one-to-one (`card == "1"`).
    /// Undeclared associations are `false`.
    pub fn is_one_to_one(&self, obj_type: i64, asc_type: i64) -> Result<bool, Error> {
        Ok(self
            .meta_association(obj_type, asc_type)?
            .is_some_and(|m| m.card == "1"))
    }

    /// Whether the declared direction is forward (`direction == "F"`).
    /// Undeclared associations are `false`.
    pub fn is_forward(&self, obj_type: i64, asc_type: i64) -> Result<bool, Error> {
        Ok(self
            .meta_association(obj_type, asc_type)?
            .is_some_and(|m| m.direction == "F"))
    }

    /// Whether the association is declared optional (`optionality == "Y"`).
    /// Undeclared associations are `false`.
    pub fn is_optional(&self, obj_type: i64, asc_type: i64) -> Result<bool, Error> {
        Ok(self
            .meta_association(obj_type, asc_type)?
            .is_some_and(|m| m.optionality == "Y"))
    }

    /// Whether the association is declared ordered (`ordered == "Y"`).
    /// Undeclared associations are `false`.
    pub fn is_ordered(&self, obj_type: i64, asc_type: i64) -> Result<bool, Error> {
        Ok(self
            .meta_association(obj_type, asc_type)?
            .is_some_and(|m| m.ordered == "Y"))
    }
}
