//! Relationship validation
//!
//! Checks a proposed relationship against the domain rules before it is
//! persisted. Rules are applied in a fixed order and the first failure
//! wins; a candidate that passes every rule has no side effects here,
//! persistence is a separate step.

use crate::collections::{IndividualCollection, RelationshipCollection};
use crate::error::ValidationError;
use crate::models::relationship::RelationshipCandidate;
use crate::models::types::RelationshipKind;

/// Validate a relationship candidate against the current snapshot
///
/// Rule order:
/// 1. the two parties must be distinct
/// 2. for `parent`, both parties must resolve and the parent must be born
///    strictly before the child (equal birth dates are a violation)
/// 3. an equivalent existing row (ordered pair for `parent`, unordered for
///    symmetric kinds) is a duplicate
pub fn validate_relationship(
    candidate: &RelationshipCandidate,
    individuals: &IndividualCollection,
    relationships: &RelationshipCollection,
) -> Result<(), ValidationError> {
    if candidate.person1_id == candidate.person2_id {
        return Err(ValidationError::SelfRelationship);
    }

    if candidate.kind == RelationshipKind::Parent {
        let parent = individuals
            .get(candidate.person1_id)
            .ok_or(ValidationError::UnknownIndividual(candidate.person1_id))?;
        let child = individuals
            .get(candidate.person2_id)
            .ok_or(ValidationError::UnknownIndividual(candidate.person2_id))?;

        if parent.birth_date >= child.birth_date {
            return Err(ValidationError::ChronologyViolation {
                parent: parent.birth_date,
                child: child.birth_date,
            });
        }
    }

    if relationships.duplicate_of(candidate).is_some() {
        return Err(ValidationError::DuplicateRelationship);
    }

    Ok(())
}
