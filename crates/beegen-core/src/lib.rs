//! Bee Gen model navigation.
//!
//! A typed, read-only API over the object graph a CA Gen local model
//! exports into a Bee Gen container: objects, typed associations between
//! them, format-tagged properties, and the meta tables describing which
//! associations and properties are legal per object type.
//!
//! Open a [`GenModel`] over a [`Container`](beegen_store::Container) and
//! navigate from there:
//!
//! ```no_run
//! use beegen_core::GenModel;
//! use beegen_store::Container;
//!
//! # fn main() -> Result<(), beegen_core::Error> {
//! let model = GenModel::open(Container::open("model/BEEGEN01.db")?)?;
//! let registry = model.code_registry()?;
//!
//! if let Some(object) = model.objects().find_by_id(22020096)? {
//!     let asc_type = registry.association_code("USESEXST").unwrap();
//!     for target in model.navigator().follow_many(object.id, asc_type)? {
//!         println!("{} -> {}", object.name, target.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod graph;
pub mod meta;
pub mod model;

pub use entity::{Cardinality, GenAssociation, GenObject, GenProperty, PropertyFormat};
pub use error::Error;
pub use graph::{AssociationNavigator, ObjectRepository, PropertyResolver};
pub use meta::{CodeRegistry, MetaAssociation, MetaProperty, MetaResolver};
pub use model::GenModel;

/// Re-export the row store adapter.
pub use beegen_store as store;
