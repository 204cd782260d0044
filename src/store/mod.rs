//! Storage adapter seam
//!
//! The engine never talks to a database directly: it consumes full row
//! listings and hands validated writes to a `FamilyStore` implementation.
//! The in-memory store in this module is the reference implementation;
//! hosted backends implement the same trait outside the crate and report
//! failures as `anyhow` errors wrapped into the crate error.

use crate::error::{KinGraphError, Result};
use crate::models::event::{EventDraft, FamilyEvent};
use crate::models::individual::{Individual, IndividualDraft};
use crate::models::relationship::{Relationship, RelationshipCandidate};
use std::sync::Arc;

pub mod memory;

pub use memory::MemoryStore;

/// Persistence interface for the family register
///
/// Listings return the full row set; the engine assumes no pagination.
/// Stores do not re-check domain rules on insert; relationship candidates
/// are expected to have passed validation first. Shape rules (non-empty
/// required text fields) are enforced here, since they hold for any caller.
pub trait FamilyStore: Send + Sync + std::fmt::Debug {
    /// List all individuals, ordered by id
    fn list_individuals(&self) -> Result<Vec<Arc<Individual>>>;

    /// List all relationships, ordered by id
    fn list_relationships(&self) -> Result<Vec<Arc<Relationship>>>;

    /// List all events, ordered by date then id
    fn list_events(&self) -> Result<Vec<Arc<FamilyEvent>>>;

    /// Persist a new individual, assigning its id
    fn insert_individual(&mut self, draft: IndividualDraft) -> Result<Arc<Individual>>;

    /// Rewrite the mutable fields of an existing individual
    fn update_individual(&mut self, id: i64, draft: IndividualDraft) -> Result<Arc<Individual>>;

    /// Delete an individual and every relationship referencing it
    ///
    /// Returns the number of cascaded relationship rows.
    fn delete_individual(&mut self, id: i64) -> Result<usize>;

    /// Persist a validated relationship candidate, assigning its id
    fn insert_relationship(&mut self, candidate: &RelationshipCandidate)
    -> Result<Arc<Relationship>>;

    /// Delete a relationship row
    fn delete_relationship(&mut self, id: i64) -> Result<()>;

    /// Persist a new event, assigning its id
    fn insert_event(&mut self, draft: EventDraft) -> Result<Arc<FamilyEvent>>;

    /// Delete an event row
    fn delete_event(&mut self, id: i64) -> Result<()>;
}

/// Check the shape of an individual draft
pub fn check_individual_draft(draft: &IndividualDraft) -> Result<()> {
    if draft.full_name.trim().is_empty() {
        return Err(KinGraphError::MalformedInput(
            "individual full name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Check the shape of an event draft
pub fn check_event_draft(draft: &EventDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(KinGraphError::MalformedInput(
            "event title must not be empty".to_string(),
        ));
    }
    if draft.description.trim().is_empty() {
        return Err(KinGraphError::MalformedInput(
            "event description must not be empty".to_string(),
        ));
    }
    Ok(())
}
