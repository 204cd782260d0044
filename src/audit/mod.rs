//! Audit trail for register mutations
//!
//! Every mutation records an action name plus an optional JSON payload.
//! Recording is fire-and-forget: a failing sink is logged and swallowed so
//! audit problems never block the mutation that triggered them.

use crate::error::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// Catalog of auditable register actions
///
/// Wire names are stable SCREAMING_SNAKE_CASE strings shared with external
/// audit backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// An individual was registered
    CreateIndividual,
    /// An individual's fields were rewritten
    UpdateIndividual,
    /// An individual was deleted (with cascading relationships)
    DeleteIndividual,
    /// A relationship was recorded
    CreateRelationship,
    /// A relationship was deleted
    DeleteRelationship,
    /// A family event was recorded
    CreateEvent,
    /// A family event was rewritten
    UpdateEvent,
    /// A family event was deleted
    DeleteEvent,
}

impl AuditAction {
    /// Stable wire name of the action
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateIndividual => "CREATE_INDIVIDUAL",
            Self::UpdateIndividual => "UPDATE_INDIVIDUAL",
            Self::DeleteIndividual => "DELETE_INDIVIDUAL",
            Self::CreateRelationship => "CREATE_RELATIONSHIP",
            Self::DeleteRelationship => "DELETE_RELATIONSHIP",
            Self::CreateEvent => "CREATE_EVENT",
            Self::UpdateEvent => "UPDATE_EVENT",
            Self::DeleteEvent => "DELETE_EVENT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded audit entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    /// The action that took place
    pub action: AuditAction,
    /// Optional structured payload describing the mutation
    pub details: Option<serde_json::Value>,
    /// When the record was captured
    pub at: DateTime<Utc>,
}

/// Destination for audit records
///
/// Implementations may fail; callers treat recording as fire-and-forget
/// and must not let a sink error abort the audited mutation.
pub trait AuditSink: Send + Sync + std::fmt::Debug {
    /// Record one action with its optional payload
    fn record(&self, action: AuditAction, details: Option<serde_json::Value>) -> Result<()>;
}

/// Sink writing records to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn record(&self, action: AuditAction, details: Option<serde_json::Value>) -> Result<()> {
        match details {
            Some(details) => info!("audit: {action} {details}"),
            None => info!("audit: {action}"),
        }
        Ok(())
    }
}

/// Sink keeping records in memory, for tests and demos
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemorySink {
    /// Create a new empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records
    #[must_use]
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }

    /// Actions captured so far, in order
    #[must_use]
    pub fn actions(&self) -> Vec<AuditAction> {
        self.records().into_iter().map(|record| record.action).collect()
    }
}

impl AuditSink for MemorySink {
    fn record(&self, action: AuditAction, details: Option<serde_json::Value>) -> Result<()> {
        if let Ok(mut records) = self.records.lock() {
            records.push(AuditRecord {
                action,
                details,
                at: Utc::now(),
            });
        }
        Ok(())
    }
}
