//! Association traversal.

use beegen_store::{schema, Container, Predicate};
use tracing::debug;

use crate::entity::{Cardinality, GenAssociation, GenObject};
use crate::error::Error;
use crate::graph::ObjectRepository;

/// Follows typed association edges between objects.
///
/// Cardinality is validated against the literal per-row tag at traversal
/// time, not against the schema-level contract: the tag travels with the
/// edge instance, so malformed import data fails at the point of use.
pub struct AssociationNavigator<'a> {
    container: &'a Container,
}

impl<'a> AssociationNavigator<'a> {
    /// Create a navigator view over the container.
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Raw edge rows leaving `objid` with the given association type.
    pub fn edges_from(&self, objid: i64, asc_type: i64) -> Result<Vec<GenAssociation>, Error> {
        let pred =
            Predicate::integer_eq("fromObjid", objid).and(Predicate::integer_eq("ascType", asc_type));
        let rows = self.container.query(&schema::ASSOCIATIONS, &pred)?;
        rows.iter().map(GenAssociation::from_row).collect()
    }

    /// Every object reachable from `objid` over a MANY association.
    ///
    /// An edge row whose cardinality tag is not MANY fails the whole call
    /// with [`Error::CardinalityMismatch`]. A dangling edge (target row
    /// absent) contributes nothing, silently.
    pub fn follow_many(&self, objid: i64, asc_type: i64) -> Result<Vec<GenObject>, Error> {
        let edges = self.edges_from(objid, asc_type)?;
        let repository = ObjectRepository::new(self.container);
        let mut targets = Vec::with_capacity(edges.len());
        for edge in &edges {
            if edge.cardinality() != Some(Cardinality::Many) {
                return Err(Error::CardinalityMismatch {
                    objid,
                    asc_type,
                    expected: Cardinality::Many,
                });
            }
            if let Some(target) = repository.find_by_id(edge.to_objid)? {
                targets.push(target);
            }
        }
        debug!(
            objid,
            asc_type,
            edges = edges.len(),
            resolved = targets.len(),
            "followed MANY association"
        );
        Ok(targets)
    }

    /// The object reachable from `objid` over a ONE association.
    ///
    /// No matching edge is `Ok(None)`. An edge whose cardinality tag is not
    /// ONE fails with [`Error::CardinalityMismatch`]; see
    /// [`follow_one_opt`](Self::follow_one_opt) for the non-failing policy.
    pub fn follow_one(&self, objid: i64, asc_type: i64) -> Result<Option<GenObject>, Error> {
        match self.first_one_edge(objid, asc_type)? {
            FirstEdge::None => Ok(None),
            FirstEdge::Mismatch => Err(Error::CardinalityMismatch {
                objid,
                asc_type,
                expected: Cardinality::One,
            }),
            FirstEdge::Target(to_objid) => {
                ObjectRepository::new(self.container).find_by_id(to_objid)
            }
        }
    }

    /// Like [`follow_one`](Self::follow_one), but a mismatched cardinality
    /// tag degrades to `Ok(None)` instead of failing.
    pub fn follow_one_opt(&self, objid: i64, asc_type: i64) -> Result<Option<GenObject>, Error> {
        match self.first_one_edge(objid, asc_type)? {
            FirstEdge::None | FirstEdge::Mismatch => Ok(None),
            FirstEdge::Target(to_objid) => {
                ObjectRepository::new(self.container).find_by_id(to_objid)
            }
        }
    }

    fn first_one_edge(&self, objid: i64, asc_type: i64) -> Result<FirstEdge, Error> {
        let edges = self.edges_from(objid, asc_type)?;
        Ok(match edges.first() {
            None => FirstEdge::None,
            Some(edge) if edge.cardinality() != Some(Cardinality::One) => FirstEdge::Mismatch,
            Some(edge) => FirstEdge::Target(edge.to_objid),
        })
    }
}

enum FirstEdge {
    None,
    Mismatch,
    Target(i64),
}
