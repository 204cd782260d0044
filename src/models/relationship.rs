//! Relationship entity model
//!
//! A relationship is an ordered pair of individual ids plus a kind. For
//! `parent` the order carries meaning (person1 is the parent); for `spouse`
//! and unrecognized kinds the pair is symmetric. Rows are immutable once
//! created; the only defined operations are creation and deletion.

use crate::models::EntityModel;
use crate::models::types::RelationshipKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted relationship row between two individuals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Opaque numeric identifier assigned by the store
    pub id: i64,
    /// First party of the ordered pair
    pub person1_id: i64,
    /// Second party of the ordered pair
    pub person2_id: i64,
    /// Kind of the relationship
    pub kind: RelationshipKind,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Relationship {
    /// Create a new relationship row
    #[must_use]
    pub fn new(id: i64, person1_id: i64, person2_id: i64, kind: RelationshipKind) -> Self {
        Self {
            id,
            person1_id,
            person2_id,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Set the record creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the given individual is one of the two parties
    #[must_use]
    pub const fn involves(&self, individual_id: i64) -> bool {
        self.person1_id == individual_id || self.person2_id == individual_id
    }

    /// Resolve the party opposite the given individual
    ///
    /// Returns `None` when the individual is not part of this relationship.
    #[must_use]
    pub const fn other_party(&self, individual_id: i64) -> Option<i64> {
        if self.person1_id == individual_id {
            Some(self.person2_id)
        } else if self.person2_id == individual_id {
            Some(self.person1_id)
        } else {
            None
        }
    }
}

impl EntityModel for Relationship {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// A proposed relationship, not yet validated or persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipCandidate {
    /// First party of the ordered pair
    pub person1_id: i64,
    /// Second party of the ordered pair
    pub person2_id: i64,
    /// Kind of the relationship
    pub kind: RelationshipKind,
}

impl RelationshipCandidate {
    /// Create a new candidate
    #[must_use]
    pub const fn new(person1_id: i64, person2_id: i64, kind: RelationshipKind) -> Self {
        Self {
            person1_id,
            person2_id,
            kind,
        }
    }

    /// Shorthand for a parent candidate (person1 is the parent)
    #[must_use]
    pub const fn parent(parent_id: i64, child_id: i64) -> Self {
        Self::new(parent_id, child_id, RelationshipKind::Parent)
    }

    /// Shorthand for a spouse candidate
    #[must_use]
    pub const fn spouse(person1_id: i64, person2_id: i64) -> Self {
        Self::new(person1_id, person2_id, RelationshipKind::Spouse)
    }
}
