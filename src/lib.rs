//! A Rust library for validating family relationships and building bounded,
//! renderable family tree subgraphs from genealogical records.
//!
//! The engine has three pure cores: a relationship validator (chronology,
//! uniqueness, symmetry), a role describer (father/mother/husband/wife with
//! explicit fallbacks for unrecognized genders), and a one-hop subgraph
//! builder emitting positioned, styled node/edge lists for a rendering
//! layer. Around them sit the domain collections, a storage adapter seam
//! with an in-memory reference store, register statistics, an audit trail,
//! and the `FamilyRegistry` facade that wires it all together.

pub mod algorithm;
pub mod audit;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::TreeConfig;
pub use error::{KinGraphError, Result, ValidationError};
pub use registry::FamilyRegistry;

// Domain models
pub use models::{
    EntityModel, EventDraft, FamilyEvent, Gender, Individual, IndividualDraft, Relationship,
    RelationshipCandidate, RelationshipKind,
};

// Collections
pub use collections::{
    EventCollection, GenericCollection, IndividualCollection, ModelCollection,
    RelationshipCollection,
};

// Pure engine operations
pub use algorithm::describe::describe_relationship;
pub use algorithm::statistics::{FamilyStatistics, PopulationStats};
pub use algorithm::subgraph::{
    LineStyle, Position, Subgraph, TreeEdge, TreeNode, build_family_tree,
};
pub use algorithm::validate::validate_relationship;

// Storage and audit seams
pub use audit::{AuditAction, AuditRecord, AuditSink, LogSink, MemorySink};
pub use store::{FamilyStore, MemoryStore};
