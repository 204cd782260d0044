use chrono::NaiveDate;
use kin_graph::registry::FamilyRegistry;
use kin_graph::{
    EventDraft, Gender, IndividualDraft, KinGraphError, MemoryStore, RelationshipCandidate, Result,
};
use log::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let audit = Arc::new(kin_graph::MemorySink::new());
    let mut registry =
        FamilyRegistry::new(Box::new(MemoryStore::new()))?.with_audit(audit.clone());

    // Example 1: Register a small family
    info!("Registering a three-person family...");
    let father = registry.add_individual(
        IndividualDraft::new(
            "Anders Holm",
            Gender::Male,
            NaiveDate::from_ymd_opt(1948, 3, 11).unwrap(),
        )
        .with_birth_place("Aarhus"),
    )?;
    let mother = registry.add_individual(
        IndividualDraft::new(
            "Birthe Holm",
            Gender::Female,
            NaiveDate::from_ymd_opt(1951, 7, 2).unwrap(),
        )
        .with_birth_place("Odense")
        .with_death_date(NaiveDate::from_ymd_opt(2019, 12, 24).unwrap()),
    )?;
    let child = registry.add_individual(
        IndividualDraft::new(
            "Clara Holm",
            Gender::Female,
            NaiveDate::from_ymd_opt(1979, 5, 30).unwrap(),
        )
        .with_residence("Copenhagen"),
    )?;

    registry.add_relationship(RelationshipCandidate::parent(father.id, child.id))?;
    registry.add_relationship(RelationshipCandidate::parent(mother.id, child.id))?;
    registry.add_relationship(RelationshipCandidate::spouse(father.id, mother.id))?;
    info!(
        "Registered {} individuals and {} relationships",
        registry.individuals().count(),
        registry.relationships().count()
    );

    // Example 2: Rejected relationships never reach the store
    info!("Attempting a self-referential relationship...");
    match registry.add_relationship(RelationshipCandidate::spouse(child.id, child.id)) {
        Ok(_) => warn!("self-relationship was unexpectedly accepted"),
        Err(KinGraphError::Validation(e)) => info!("Rejected as expected: {e}"),
        Err(e) => return Err(e),
    }
    match registry.add_relationship(RelationshipCandidate::parent(child.id, father.id)) {
        Ok(_) => warn!("reversed-chronology parent was unexpectedly accepted"),
        Err(KinGraphError::Validation(e)) => info!("Rejected as expected: {e}"),
        Err(e) => return Err(e),
    }

    // Example 3: Describe every stored relationship
    info!("Relationships on record:");
    for line in registry.described_relationships() {
        info!("  {line}");
    }

    // Example 4: Record a family event and find it again
    let event = registry.add_event(EventDraft::new(
        "Golden wedding anniversary",
        NaiveDate::from_ymd_opt(2023, 6, 14).unwrap(),
        "Fifty years since Anders and Birthe married in Odense.",
    ))?;
    let matches = registry.search_events("odense");
    info!(
        "Recorded event #{} ; search for 'odense' found {} event(s)",
        event.id,
        matches.len()
    );

    // Example 5: Register statistics
    let summary = registry.statistics_summary();
    for line in summary.lines() {
        info!("{line}");
    }

    // Example 6: Build the renderable subgraph around the child
    let tree = registry.family_tree(child.id)?;
    info!(
        "Subgraph for {}: {} nodes, {} edges",
        child.full_name,
        tree.nodes.len(),
        tree.edges.len()
    );
    println!("{}", serde_json::to_string_pretty(&tree)?);

    info!("Recorded {} audit entries", audit.records().len());
    Ok(())
}
