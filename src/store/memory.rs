//! In-memory reference store
//!
//! Backs the full `FamilyStore` contract with the domain collections and
//! monotonically assigned ids. Useful as the test double and for demos;
//! data lives only as long as the process.

use crate::collections::{EventCollection, IndividualCollection, RelationshipCollection};
use crate::error::{KinGraphError, Result};
use crate::models::event::{EventDraft, FamilyEvent};
use crate::models::individual::{Individual, IndividualDraft};
use crate::models::relationship::{Relationship, RelationshipCandidate};
use crate::store::{FamilyStore, check_event_draft, check_individual_draft};
use log::debug;
use std::sync::Arc;

/// In-memory implementation of `FamilyStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    individuals: IndividualCollection,
    relationships: RelationshipCollection,
    events: EventCollection,
    next_individual_id: i64,
    next_relationship_id: i64,
    next_event_id: i64,
}

impl MemoryStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            individuals: IndividualCollection::new(),
            relationships: RelationshipCollection::new(),
            events: EventCollection::new(),
            next_individual_id: 0,
            next_relationship_id: 0,
            next_event_id: 0,
        }
    }

    fn next_individual_id(&mut self) -> i64 {
        self.next_individual_id += 1;
        self.next_individual_id
    }

    fn next_relationship_id(&mut self) -> i64 {
        self.next_relationship_id += 1;
        self.next_relationship_id
    }

    fn next_event_id(&mut self) -> i64 {
        self.next_event_id += 1;
        self.next_event_id
    }
}

impl FamilyStore for MemoryStore {
    fn list_individuals(&self) -> Result<Vec<Arc<Individual>>> {
        Ok(self.individuals.all())
    }

    fn list_relationships(&self) -> Result<Vec<Arc<Relationship>>> {
        Ok(self.relationships.all())
    }

    fn list_events(&self) -> Result<Vec<Arc<FamilyEvent>>> {
        Ok(self.events.all())
    }

    fn insert_individual(&mut self, draft: IndividualDraft) -> Result<Arc<Individual>> {
        check_individual_draft(&draft)?;
        let id = self.next_individual_id();
        self.individuals.add(draft.into_individual(id));
        debug!("inserted individual {id}");
        Ok(self.individuals.get(id).expect("row was just inserted"))
    }

    fn update_individual(&mut self, id: i64, draft: IndividualDraft) -> Result<Arc<Individual>> {
        check_individual_draft(&draft)?;
        let existing = self
            .individuals
            .get(id)
            .ok_or(KinGraphError::UnknownIndividual(id))?;

        // Identity and creation time survive edits
        let updated = draft.into_individual(id).with_created_at(existing.created_at);
        self.individuals.add(updated);
        Ok(self.individuals.get(id).expect("row was just updated"))
    }

    fn delete_individual(&mut self, id: i64) -> Result<usize> {
        if self.individuals.remove(id).is_none() {
            return Err(KinGraphError::UnknownIndividual(id));
        }
        let stale = self.relationships.involving(id);
        for rel in &stale {
            self.relationships.remove(rel.id);
        }
        debug!(
            "deleted individual {id} and {} referencing relationships",
            stale.len()
        );
        Ok(stale.len())
    }

    fn insert_relationship(
        &mut self,
        candidate: &RelationshipCandidate,
    ) -> Result<Arc<Relationship>> {
        let id = self.next_relationship_id();
        self.relationships.add(Relationship::new(
            id,
            candidate.person1_id,
            candidate.person2_id,
            candidate.kind.clone(),
        ));
        debug!("inserted relationship {id}");
        Ok(self.relationships.get(id).expect("row was just inserted"))
    }

    fn delete_relationship(&mut self, id: i64) -> Result<()> {
        self.relationships
            .remove(id)
            .map(|_| ())
            .ok_or(KinGraphError::UnknownRelationship(id))
    }

    fn insert_event(&mut self, draft: EventDraft) -> Result<Arc<FamilyEvent>> {
        check_event_draft(&draft)?;
        let id = self.next_event_id();
        self.events.add(draft.into_event(id));
        Ok(self.events.get(id).expect("row was just inserted"))
    }

    fn delete_event(&mut self, id: i64) -> Result<()> {
        self.events
            .remove(id)
            .map(|_| ())
            .ok_or(KinGraphError::MalformedInput(format!("unknown event: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Gender;
    use chrono::NaiveDate;

    fn draft(name: &str, year: i32) -> IndividualDraft {
        IndividualDraft::new(
            name,
            Gender::Male,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        )
    }

    #[test]
    fn ids_are_assigned_monotonically() {
        let mut store = MemoryStore::new();
        let first = store.insert_individual(draft("Wang Lei", 1950)).unwrap();
        let second = store.insert_individual(draft("Li Na", 1952)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut store = MemoryStore::new();
        let result = store.insert_individual(draft("   ", 1950));
        assert!(matches!(result, Err(KinGraphError::MalformedInput(_))));
    }

    #[test]
    fn update_preserves_identity_and_creation_time() {
        let mut store = MemoryStore::new();
        let original = store.insert_individual(draft("Wang Lei", 1950)).unwrap();
        let updated = store
            .update_individual(original.id, draft("Wang Lei", 1951).with_birth_place("Beijing"))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.birth_place, "Beijing");
    }

    #[test]
    fn deleting_an_individual_cascades_relationships() {
        let mut store = MemoryStore::new();
        let a = store.insert_individual(draft("Wang Lei", 1950)).unwrap();
        let b = store.insert_individual(draft("Li Na", 1952)).unwrap();
        let c = store.insert_individual(draft("Wang Fang", 1975)).unwrap();
        store
            .insert_relationship(&RelationshipCandidate::parent(a.id, c.id))
            .unwrap();
        store
            .insert_relationship(&RelationshipCandidate::spouse(a.id, b.id))
            .unwrap();
        store
            .insert_relationship(&RelationshipCandidate::parent(b.id, c.id))
            .unwrap();

        let cascaded = store.delete_individual(a.id).unwrap();
        assert_eq!(cascaded, 2);
        let remaining = store.list_relationships().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].person1_id, b.id);
    }

    #[test]
    fn deleting_unknown_rows_is_an_error() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete_individual(9),
            Err(KinGraphError::UnknownIndividual(9))
        ));
        assert!(matches!(
            store.delete_relationship(9),
            Err(KinGraphError::UnknownRelationship(9))
        ));
    }
}
