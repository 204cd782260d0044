//! Individual entity model
//!
//! This module contains the core Individual entity structure. An Individual
//! represents one person in the family register and is the unit every
//! relationship, subgraph node, and statistic is derived from.

use crate::models::EntityModel;
use crate::models::types::Gender;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Core Individual entity representing a person in the family register
///
/// Identity is immutable; every other field may be rewritten by an edit.
/// A missing death date means the person is recorded as living.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Opaque numeric identifier assigned by the store
    pub id: i64,
    /// Full name, non-empty
    pub full_name: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// Place of birth
    pub birth_place: String,
    /// Current residence, if known
    pub residence: Option<String>,
    /// Free-text biography
    pub biography: Option<String>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Individual {
    /// Create a new Individual with minimal required information
    #[must_use]
    pub fn new(id: i64, full_name: impl Into<String>, gender: Gender, birth_date: NaiveDate) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            gender,
            birth_date,
            death_date: None,
            birth_place: String::new(),
            residence: None,
            biography: None,
            created_at: Utc::now(),
        }
    }

    /// Set the death date
    #[must_use]
    pub const fn with_death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    /// Set the birth place
    #[must_use]
    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = place.into();
        self
    }

    /// Set the residence
    #[must_use]
    pub fn with_residence(mut self, residence: impl Into<String>) -> Self {
        self.residence = Some(residence.into());
        self
    }

    /// Set the biography
    #[must_use]
    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = Some(biography.into());
        self
    }

    /// Set the record creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the individual is recorded as living
    #[must_use]
    pub const fn is_living(&self) -> bool {
        self.death_date.is_none()
    }

    /// Calendar year of birth
    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }
}

impl EntityModel for Individual {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Field set for registering or editing an individual
///
/// Drafts carry no identity; the store assigns an id on insert and keeps
/// the existing one on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualDraft {
    /// Full name, non-empty
    pub full_name: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// Place of birth
    pub birth_place: String,
    /// Current residence, if known
    pub residence: Option<String>,
    /// Free-text biography
    pub biography: Option<String>,
}

impl IndividualDraft {
    /// Create a draft with the required fields
    #[must_use]
    pub fn new(full_name: impl Into<String>, gender: Gender, birth_date: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            gender,
            birth_date,
            death_date: None,
            birth_place: String::new(),
            residence: None,
            biography: None,
        }
    }

    /// Set the death date
    #[must_use]
    pub const fn with_death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    /// Set the birth place
    #[must_use]
    pub fn with_birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = place.into();
        self
    }

    /// Set the residence
    #[must_use]
    pub fn with_residence(mut self, residence: impl Into<String>) -> Self {
        self.residence = Some(residence.into());
        self
    }

    /// Set the biography
    #[must_use]
    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = Some(biography.into());
        self
    }

    /// Materialize the draft into a persisted row
    #[must_use]
    pub fn into_individual(self, id: i64) -> Individual {
        Individual {
            id,
            full_name: self.full_name,
            gender: self.gender,
            birth_date: self.birth_date,
            death_date: self.death_date,
            birth_place: self.birth_place,
            residence: self.residence,
            biography: self.biography,
            created_at: Utc::now(),
        }
    }
}
