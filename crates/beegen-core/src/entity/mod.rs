//! Value records projected from container rows.
//!
//! Every record here is an immutable snapshot constructed per query and
//! owned by the caller. Nothing is cached: a repeated lookup re-fetches and
//! re-constructs.

mod association;
mod object;
mod property;

pub use association::{Cardinality, GenAssociation};
pub use object::GenObject;
pub use property::{GenProperty, PropertyFormat};
