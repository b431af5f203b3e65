//! The model session.

use beegen_store::{schema, Container, Predicate};
use tracing::info;

use crate::error::Error;
use crate::graph::{AssociationNavigator, ObjectRepository, PropertyResolver};
use crate::meta::{CodeRegistry, MetaResolver};

/// A model stored in a container.
///
/// Session-level entry point: opening a model loads its identity from the
/// container's key/value table, and the accessors hand out borrowing views
/// for lookup, traversal, property resolution, and schema introspection.
pub struct GenModel {
    container: Container,
    name: String,
    version: String,
    schema_level: String,
}

impl GenModel {
    /// Open a model session over a container.
    ///
    /// Reads the model identity rows (`name`, `version`, `schema`); keys
    /// absent from the table leave the matching field empty. Store-level
    /// failures propagate.
    pub fn open(container: Container) -> Result<Self, Error> {
        let mut name = String::new();
        let mut version = String::new();
        let mut schema_level = String::new();

        for row in container.query(&schema::MODEL, &Predicate::all())? {
            let key = row.get_text("key")?;
            let value = row.get_text("value")?;
            match key.as_str() {
                "name" => name = value,
                "version" => version = value,
                "schema" => schema_level = value,
                _ => {}
            }
        }

        info!(model = %name, schema = %schema_level, "opened model session");
        Ok(Self {
            container,
            name,
            version,
            schema_level,
        })
    }

    /// Model name as given during model creation in CA Gen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the utility that created the container.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Schema level of the CA Gen model the metadata came from.
    pub fn schema_level(&self) -> &str {
        &self.schema_level
    }

    /// The underlying container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Count all objects in the model.
    pub fn count_objects(&self) -> Result<u64, Error> {
        Ok(self.container.count(&schema::OBJECTS, &Predicate::all())?)
    }

    /// Count objects of the given type.
    pub fn count_objects_of_type(&self, obj_type: i64) -> Result<u64, Error> {
        Ok(self
            .container
            .count(&schema::OBJECTS, &Predicate::integer_eq("objType", obj_type))?)
    }

    /// Object lookup view.
    pub fn objects(&self) -> ObjectRepository<'_> {
        ObjectRepository::new(&self.container)
    }

    /// Association traversal view.
    pub fn navigator(&self) -> AssociationNavigator<'_> {
        AssociationNavigator::new(&self.container)
    }

    /// Property resolution view.
    pub fn properties(&self) -> PropertyResolver<'_> {
        PropertyResolver::new(&self.container)
    }

    /// Schema introspection view.
    pub fn meta(&self) -> MetaResolver<'_> {
        MetaResolver::new(&self.container)
    }

    /// Load the code registry from the container's meta tables.
    pub fn code_registry(&self) -> Result<CodeRegistry, Error> {
        CodeRegistry::load(&self.container)
    }
}
