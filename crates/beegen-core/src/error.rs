//! Navigation error types.

use thiserror::Error;

use crate::entity::Cardinality;

/// Errors surfaced while navigating a model.
///
/// Lookup misses are not errors: absent objects and properties come back as
/// `Ok(None)` or empty collections. Errors mark store-level failures and
/// contract violations in the imported data.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying row store failure.
    #[error("store error: {0}")]
    Store(#[from] beegen_store::Error),

    /// A traversed edge's stored cardinality tag disagrees with the
    /// requested traversal kind.
    #[error("association type {asc_type} from object {objid} is not cardinality {expected}")]
    CardinalityMismatch {
        /// Source object of the traversal.
        objid: i64,
        /// Requested association type code.
        asc_type: i64,
        /// Cardinality the caller asked for.
        expected: Cardinality,
    },

    /// A property was coerced to a number but is not numeric.
    #[error("property type {prp_type} of object {objid} is not a number")]
    PropertyNotNumeric {
        /// Owning object id.
        objid: i64,
        /// Property type code.
        prp_type: i64,
    },

    /// Strict lookup found more than one object for a (type, name) key.
    #[error("duplicate objects of type {obj_type} named `{name}`")]
    DuplicateName {
        /// Object type code.
        obj_type: i64,
        /// The ambiguous name.
        name: String,
    },
}
