//! Register facade
//!
//! `FamilyRegistry` ties the engine together: it owns a store adapter and
//! an audit sink, keeps materialized snapshots of the row sets, and runs
//! every mutation through the validate, persist, audit sequence. The pure
//! algorithms read the snapshots; the registry refreshes them after each
//! mutation so callers always see store truth.

use crate::algorithm::describe::describe_relationship;
use crate::algorithm::statistics::{FamilyStatistics, PopulationStats};
use crate::algorithm::subgraph::{Subgraph, build_family_tree};
use crate::algorithm::validate::validate_relationship;
use crate::audit::{AuditAction, AuditSink, LogSink};
use crate::collections::{EventCollection, IndividualCollection, RelationshipCollection};
use crate::config::TreeConfig;
use crate::error::{KinGraphError, Result};
use crate::models::event::{EventDraft, FamilyEvent};
use crate::models::individual::{Individual, IndividualDraft};
use crate::models::relationship::{Relationship, RelationshipCandidate};
use crate::store::FamilyStore;
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

/// Facade over store, validation, description, and subgraph building
#[derive(Debug)]
pub struct FamilyRegistry {
    store: Box<dyn FamilyStore>,
    audit: Arc<dyn AuditSink>,
    layout: TreeConfig,
    individuals: IndividualCollection,
    relationships: RelationshipCollection,
    events: EventCollection,
}

impl FamilyRegistry {
    /// Create a registry over a store, materializing the initial snapshot
    ///
    /// Audit records go to the `log` facade unless replaced with
    /// [`with_audit`](Self::with_audit).
    pub fn new(store: Box<dyn FamilyStore>) -> Result<Self> {
        let mut registry = Self {
            store,
            audit: Arc::new(LogSink),
            layout: TreeConfig::default(),
            individuals: IndividualCollection::new(),
            relationships: RelationshipCollection::new(),
            events: EventCollection::new(),
        };
        registry.refresh()?;
        Ok(registry)
    }

    /// Replace the audit sink
    #[must_use]
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// Replace the tree layout configuration
    #[must_use]
    pub fn with_layout(mut self, layout: TreeConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Re-materialize the snapshots from the store
    pub fn refresh(&mut self) -> Result<()> {
        self.individuals = IndividualCollection::from_shared(self.store.list_individuals()?);
        self.relationships =
            RelationshipCollection::from_shared(self.store.list_relationships()?);
        self.events = EventCollection::from_shared(self.store.list_events()?);
        Ok(())
    }

    /// Current individual snapshot
    #[must_use]
    pub const fn individuals(&self) -> &IndividualCollection {
        &self.individuals
    }

    /// Current relationship snapshot
    #[must_use]
    pub const fn relationships(&self) -> &RelationshipCollection {
        &self.relationships
    }

    /// Current event snapshot
    #[must_use]
    pub const fn events(&self) -> &EventCollection {
        &self.events
    }

    /// Register a new individual
    pub fn add_individual(&mut self, draft: IndividualDraft) -> Result<Arc<Individual>> {
        let row = self.store.insert_individual(draft)?;
        info!("registered individual {} ({})", row.id, row.full_name);
        self.audit(
            AuditAction::CreateIndividual,
            json!({ "id": row.id, "full_name": row.full_name }),
        );
        self.refresh()?;
        Ok(row)
    }

    /// Rewrite the mutable fields of an individual
    pub fn update_individual(&mut self, id: i64, draft: IndividualDraft) -> Result<Arc<Individual>> {
        let row = self.store.update_individual(id, draft)?;
        self.audit(AuditAction::UpdateIndividual, json!({ "id": id }));
        self.refresh()?;
        Ok(row)
    }

    /// Delete an individual, cascading the relationships that reference it
    ///
    /// Returns the number of cascaded relationship rows.
    pub fn remove_individual(&mut self, id: i64) -> Result<usize> {
        let cascaded = self.store.delete_individual(id)?;
        info!("deleted individual {id} ({cascaded} relationships cascaded)");
        self.audit(
            AuditAction::DeleteIndividual,
            json!({ "id": id, "cascaded_relationships": cascaded }),
        );
        self.refresh()?;
        Ok(cascaded)
    }

    /// Validate and record a new relationship
    ///
    /// The candidate is checked against the current snapshot; persistence
    /// happens only when every rule passes.
    pub fn add_relationship(
        &mut self,
        candidate: RelationshipCandidate,
    ) -> Result<Arc<Relationship>> {
        validate_relationship(&candidate, &self.individuals, &self.relationships)
            .map_err(KinGraphError::from)?;

        let row = self.store.insert_relationship(&candidate)?;
        info!(
            "recorded {} relationship {} between {} and {}",
            row.kind, row.id, row.person1_id, row.person2_id
        );
        self.audit(
            AuditAction::CreateRelationship,
            json!({
                "person1_id": candidate.person1_id,
                "person2_id": candidate.person2_id,
                "type": candidate.kind.label(),
            }),
        );
        self.refresh()?;
        Ok(row)
    }

    /// Delete a relationship row
    pub fn remove_relationship(&mut self, id: i64) -> Result<()> {
        self.store.delete_relationship(id)?;
        self.audit(AuditAction::DeleteRelationship, json!({ "id": id }));
        self.refresh()
    }

    /// Record a new family event
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Arc<FamilyEvent>> {
        let row = self.store.insert_event(draft)?;
        self.audit(
            AuditAction::CreateEvent,
            json!({ "id": row.id, "title": row.title }),
        );
        self.refresh()?;
        Ok(row)
    }

    /// Delete a family event
    pub fn remove_event(&mut self, id: i64) -> Result<()> {
        self.store.delete_event(id)?;
        self.audit(AuditAction::DeleteEvent, json!({ "id": id }));
        self.refresh()
    }

    /// Build the one-hop family subgraph around an individual
    pub fn family_tree(&self, root_id: i64) -> Result<Subgraph> {
        build_family_tree(root_id, &self.individuals, &self.relationships, &self.layout)
    }

    /// Register statistics over the current snapshot
    #[must_use]
    pub fn statistics(&self) -> PopulationStats {
        FamilyStatistics::calculate(&self.individuals)
    }

    /// Human-readable register summary
    #[must_use]
    pub fn statistics_summary(&self) -> String {
        FamilyStatistics::generate_summary(&self.statistics())
    }

    /// Natural-language descriptions of every relationship, ordered by id
    ///
    /// Rows whose parties no longer resolve are stale; they are logged and
    /// omitted, matching the orphaned-reference policy of the tree builder.
    #[must_use]
    pub fn described_relationships(&self) -> Vec<String> {
        let mut described = Vec::with_capacity(self.relationships.count());
        for rel in self.relationships.all() {
            let person1 = self.individuals.get(rel.person1_id);
            let person2 = self.individuals.get(rel.person2_id);
            match (person1, person2) {
                (Some(person1), Some(person2)) => {
                    described.push(describe_relationship(&rel, &person1, &person2));
                }
                _ => warn!("skipping relationship {}: unresolved party", rel.id),
            }
        }
        described
    }

    /// Case-insensitive name search over the current snapshot
    #[must_use]
    pub fn search_individuals(&self, term: &str) -> Vec<Arc<Individual>> {
        self.individuals.search_name(term)
    }

    /// Case-insensitive event search over the current snapshot
    #[must_use]
    pub fn search_events(&self, term: &str) -> Vec<Arc<FamilyEvent>> {
        self.events.search(term)
    }

    // Sinks may fail; the mutation that triggered the record must not.
    fn audit(&self, action: AuditAction, details: serde_json::Value) {
        if let Err(e) = self.audit.record(action, Some(details)) {
            warn!("audit sink failed for {action}: {e}");
        }
    }
}
