//! Common domain type definitions
//!
//! This module contains the enum types shared across domain models. Both
//! gender and relationship kind arrive as free text from the data layer,
//! so each type keeps an explicit fallback branch for values outside the
//! recognized set instead of rejecting them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of an individual
///
/// The data layer stores gender as open-ended text; only two values carry
/// role semantics. Anything else maps to `Unknown`, which the describer
/// and styling treat as a valid input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    Unknown,
}

impl Gender {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "男" | "1" => Self::Male,
            "f" | "female" | "女" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

/// Kind of a pairwise relationship between two individuals
///
/// `Parent` is directed (person1 is the parent of person2); `Spouse` is
/// symmetric. Kinds outside the recognized set are preserved verbatim in
/// the `Other` branch so future relationship kinds degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    /// person1 is a parent of person2
    Parent,
    /// Symmetric marriage relation
    Spouse,
    /// Unrecognized kind, kept verbatim
    Other(String),
}

impl RelationshipKind {
    /// Wire label for this kind
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Parent => "parent",
            Self::Spouse => "spouse",
            Self::Other(kind) => kind,
        }
    }

    /// Whether the relation has no direction semantics
    ///
    /// Only `parent` is directed. Unrecognized kinds are treated as
    /// symmetric, the safer default for duplicate detection.
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        !matches!(self, Self::Parent)
    }
}

impl From<&str> for RelationshipKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "parent" => Self::Parent,
            "spouse" => Self::Spouse,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for RelationshipKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
