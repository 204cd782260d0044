//! Domain models for the family register
//!
//! This module contains the core entity models used throughout the crate:
//! individuals, the typed relationships between them, and dated family
//! events, plus the identity trait their collections are built on.

use std::hash::Hash;

pub mod event;
pub mod individual;
pub mod relationship;
pub mod types;

// Re-export commonly used types
pub use event::{EventDraft, FamilyEvent};
pub use individual::{Individual, IndividualDraft};
pub use relationship::{Relationship, RelationshipCandidate};
pub use types::{Gender, RelationshipKind};

/// Core trait for domain entities with a unique identifier
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}
