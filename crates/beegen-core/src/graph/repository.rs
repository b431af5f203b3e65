//! Object lookup.

use beegen_store::{schema, Container, Predicate};

use crate::entity::GenObject;
use crate::error::Error;

/// Read-only object lookup over a container.
///
/// Maps `GenObjects` rows to [`GenObject`] records. Lookups hit the store
/// every time; nothing is cached between calls.
pub struct ObjectRepository<'a> {
    container: &'a Container,
}

impl<'a> ObjectRepository<'a> {
    /// Create a repository view over the container.
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Find the object with the given id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<GenObject>, Error> {
        let rows = self
            .container
            .query(&schema::OBJECTS, &Predicate::integer_eq("id", id))?;
        rows.first().map(GenObject::from_row).transpose()
    }

    /// All objects of the given type, in store iteration order.
    pub fn find_by_type(&self, obj_type: i64) -> Result<Vec<GenObject>, Error> {
        let rows = self
            .container
            .query(&schema::OBJECTS, &Predicate::integer_eq("objType", obj_type))?;
        rows.iter().map(GenObject::from_row).collect()
    }

    /// Every object matching the (type, name) key.
    pub fn find_named(&self, obj_type: i64, name: &str) -> Result<Vec<GenObject>, Error> {
        let pred =
            Predicate::integer_eq("objType", obj_type).and(Predicate::text_eq("name", name));
        let rows = self.container.query(&schema::OBJECTS, &pred)?;
        rows.iter().map(GenObject::from_row).collect()
    }

    /// First object matching the (type, name) key.
    ///
    /// The container schema treats the key as unique but legacy exports do
    /// not enforce it; duplicates are tolerated and the first row wins. Use
    /// [`find_by_type_and_name_strict`](Self::find_by_type_and_name_strict)
    /// to surface duplicates instead.
    pub fn find_by_type_and_name(
        &self,
        obj_type: i64,
        name: &str,
    ) -> Result<Option<GenObject>, Error> {
        Ok(self.find_named(obj_type, name)?.into_iter().next())
    }

    /// Like [`find_by_type_and_name`](Self::find_by_type_and_name) but
    /// fails with [`Error::DuplicateName`] when the key is ambiguous.
    pub fn find_by_type_and_name_strict(
        &self,
        obj_type: i64,
        name: &str,
    ) -> Result<Option<GenObject>, Error> {
        let mut matches = self.find_named(obj_type, name)?;
        if matches.len() > 1 {
            return Err(Error::DuplicateName {
                obj_type,
                name: name.to_string(),
            });
        }
        Ok(matches.pop())
    }
}
