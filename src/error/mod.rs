//! Error handling for the family graph engine.

use chrono::NaiveDate;
use std::fmt;

/// Domain rule violations detected when validating a relationship candidate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The candidate links an individual to themselves
    #[error("a person cannot be in a relationship with themselves")]
    SelfRelationship,

    /// A referenced individual id does not resolve
    #[error("unknown individual: {0}")]
    UnknownIndividual(i64),

    /// A parent must be born strictly before the child
    #[error("parent birth date {parent} is not earlier than child birth date {child}")]
    ChronologyViolation {
        /// Birth date of the proposed parent
        parent: NaiveDate,
        /// Birth date of the proposed child
        child: NaiveDate,
    },

    /// An equivalent relationship already exists
    #[error("this relationship already exists")]
    DuplicateRelationship,
}

/// Specialized error type for family graph operations
#[derive(Debug)]
pub enum KinGraphError {
    /// A relationship candidate failed domain validation
    Validation(ValidationError),
    /// A referenced individual does not exist
    UnknownIndividual(i64),
    /// A referenced relationship does not exist
    UnknownRelationship(i64),
    /// Input outside the expected shape (empty required field, etc.)
    MalformedInput(String),
    /// Error serializing engine output
    Serialization(serde_json::Error),
    /// Error reported by a storage adapter
    Store(anyhow::Error),
}

impl From<ValidationError> for KinGraphError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<serde_json::Error> for KinGraphError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl From<anyhow::Error> for KinGraphError {
    fn from(error: anyhow::Error) -> Self {
        Self::Store(error)
    }
}

impl fmt::Display for KinGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation failed: {e}"),
            Self::UnknownIndividual(id) => write!(f, "unknown individual: {id}"),
            Self::UnknownRelationship(id) => write!(f, "unknown relationship: {id}"),
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            Self::Serialization(e) => write!(f, "serialization error: {e}"),
            Self::Store(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for KinGraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Store(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Result type for family graph operations
pub type Result<T> = std::result::Result<T, KinGraphError>;
