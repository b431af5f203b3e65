//! Numeric code registry.
//!
//! CA Gen identifies object, association, and property types by numeric
//! codes with symbolic mnemonics. The codes are schema data that varies
//! with the exporter's schema level, so they are loaded from the meta
//! tables at session time rather than compiled in as enumerations.

use std::collections::HashMap;

use beegen_store::{schema, Container, Predicate};
use tracing::debug;

use crate::error::Error;

/// Bidirectional mapping between numeric type codes and mnemonics.
///
/// Loaded once by scanning the meta tables; lookups never touch the store.
/// A miss is `None`, never an error — the registry only knows what the
/// container declares.
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    asc_by_code: HashMap<i64, String>,
    asc_by_mnemonic: HashMap<String, i64>,
    prp_by_code: HashMap<i64, String>,
    prp_by_mnemonic: HashMap<String, i64>,
}

impl CodeRegistry {
    /// Load the registry from a container's meta tables.
    pub fn load(container: &Container) -> Result<Self, Error> {
        let mut registry = CodeRegistry::default();

        for row in container.query(&schema::META_ASSOCIATIONS, &Predicate::all())? {
            let code = row.get_integer("ascType")?;
            let mnemonic = row.get_text("ascMnemonic")?;
            registry.asc_by_mnemonic.insert(mnemonic.clone(), code);
            registry.asc_by_code.insert(code, mnemonic);
        }
        for row in container.query(&schema::META_PROPERTIES, &Predicate::all())? {
            let code = row.get_integer("prpType")?;
            let mnemonic = row.get_text("prpMnemonic")?;
            registry.prp_by_mnemonic.insert(mnemonic.clone(), code);
            registry.prp_by_code.insert(code, mnemonic);
        }

        debug!(
            associations = registry.asc_by_code.len(),
            properties = registry.prp_by_code.len(),
            "loaded code registry"
        );
        Ok(registry)
    }

    /// Mnemonic for an association type code.
    pub fn association_mnemonic(&self, code: i64) -> Option<&str> {
        self.asc_by_code.get(&code).map(String::as_str)
    }

    /// Association type code for a mnemonic.
    pub fn association_code(&self, mnemonic: &str) -> Option<i64> {
        self.asc_by_mnemonic.get(mnemonic).copied()
    }

    /// Mnemonic for a property type code.
    pub fn property_mnemonic(&self, code: i64) -> Option<&str> {
        self.prp_by_code.get(&code).map(String::as_str)
    }

    /// Property type code for a mnemonic.
    pub fn property_code(&self, mnemonic: &str) -> Option<i64> {
        self.prp_by_mnemonic.get(mnemonic).copied()
    }

    /// Number of distinct association codes known.
    pub fn association_count(&self) -> usize {
        self.asc_by_code.len()
    }

    /// Number of distinct property codes known.
    pub fn property_count(&self) -> usize {
        self.prp_by_code.len()
    }
}
