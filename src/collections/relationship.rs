//! Relationship model collection
//!
//! Specialized collection for relationship rows. The selections here feed
//! the validator (duplicate lookup) and the subgraph builder (parents,
//! children, spouses of a root). Selections are ordered by row id so that
//! downstream position assignment is deterministic.

use crate::collections::{GenericCollection, ModelCollection};
use crate::models::relationship::{Relationship, RelationshipCandidate};
use crate::models::types::RelationshipKind;
use std::sync::Arc;

/// Specialized collection for Relationship models
#[derive(Debug, Default)]
pub struct RelationshipCollection {
    /// Base generic collection implementation
    inner: GenericCollection<Relationship>,
}

impl RelationshipCollection {
    /// Create a new empty relationship collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a collection from a vector of relationships
    #[must_use]
    pub fn from_relationships(relationships: Vec<Relationship>) -> Self {
        Self {
            inner: GenericCollection::from_models(relationships),
        }
    }

    /// Create a collection from already-shared relationships
    #[must_use]
    pub fn from_shared(relationships: Vec<Arc<Relationship>>) -> Self {
        Self {
            inner: GenericCollection::from_shared(relationships),
        }
    }

    /// Add a relationship to the collection
    pub fn add(&mut self, relationship: Relationship) {
        self.inner.add(relationship);
    }

    /// Look up a relationship by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<Arc<Relationship>> {
        self.inner.get(&id)
    }

    /// Remove a relationship by id
    pub fn remove(&mut self, id: i64) -> Option<Arc<Relationship>> {
        self.inner.remove(&id)
    }

    /// All relationships, ordered by id
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Relationship>> {
        self.sorted(self.inner.all())
    }

    /// Number of relationships in the collection
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Parent relationships where the given individual is the child
    #[must_use]
    pub fn parents_of(&self, individual_id: i64) -> Vec<Arc<Relationship>> {
        self.sorted(self.inner.filter(|rel| {
            rel.kind == RelationshipKind::Parent && rel.person2_id == individual_id
        }))
    }

    /// Parent relationships where the given individual is the parent
    #[must_use]
    pub fn children_of(&self, individual_id: i64) -> Vec<Arc<Relationship>> {
        self.sorted(self.inner.filter(|rel| {
            rel.kind == RelationshipKind::Parent && rel.person1_id == individual_id
        }))
    }

    /// Spouse relationships touching the given individual
    #[must_use]
    pub fn spouses_of(&self, individual_id: i64) -> Vec<Arc<Relationship>> {
        self.sorted(self.inner.filter(|rel| {
            rel.kind == RelationshipKind::Spouse && rel.involves(individual_id)
        }))
    }

    /// All relationships touching the given individual, ordered by id
    #[must_use]
    pub fn involving(&self, individual_id: i64) -> Vec<Arc<Relationship>> {
        self.sorted(self.inner.filter(|rel| rel.involves(individual_id)))
    }

    /// Find an existing row equivalent to the candidate
    ///
    /// The pair is ordered for directed kinds and unordered for symmetric
    /// ones, so a reversed `parent` row is not a duplicate while a reversed
    /// `spouse` row is.
    #[must_use]
    pub fn duplicate_of(&self, candidate: &RelationshipCandidate) -> Option<Arc<Relationship>> {
        self.inner
            .filter(|rel| {
                if rel.kind != candidate.kind {
                    return false;
                }
                let same_order = rel.person1_id == candidate.person1_id
                    && rel.person2_id == candidate.person2_id;
                let reversed = rel.person1_id == candidate.person2_id
                    && rel.person2_id == candidate.person1_id;
                if candidate.kind.is_symmetric() {
                    same_order || reversed
                } else {
                    same_order
                }
            })
            .into_iter()
            .next()
    }

    /// Get the raw collection
    #[must_use]
    pub const fn raw(&self) -> &GenericCollection<Relationship> {
        &self.inner
    }

    fn sorted(&self, mut rows: Vec<Arc<Relationship>>) -> Vec<Arc<Relationship>> {
        rows.sort_by_key(|rel| rel.id);
        rows
    }
}
