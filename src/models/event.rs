//! Family event entity model

use crate::models::EntityModel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dated event in the family history (wedding, migration, reunion)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyEvent {
    /// Opaque numeric identifier assigned by the store
    pub id: i64,
    /// Event title, non-empty
    pub title: String,
    /// Date the event took place
    pub date: NaiveDate,
    /// Event description, non-empty
    pub description: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl FamilyEvent {
    /// Create a new event row
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Set the record creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl EntityModel for FamilyEvent {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Field set for recording a new family event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title, non-empty
    pub title: String,
    /// Date the event took place
    pub date: NaiveDate,
    /// Event description, non-empty
    pub description: String,
}

impl EventDraft {
    /// Create a new event draft
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date,
            description: description.into(),
        }
    }

    /// Materialize the draft into a persisted row
    #[must_use]
    pub fn into_event(self, id: i64) -> FamilyEvent {
        FamilyEvent {
            id,
            title: self.title,
            date: self.date,
            description: self.description,
            created_at: Utc::now(),
        }
    }
}
