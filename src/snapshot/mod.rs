//! Rule-set snapshots.
//!
//! A snapshot is a versioned, serializable copy of a machine's transition
//! rules. It never contains entity state (the engine holds none) nor the
//! handler, which is code.

use crate::core::{Label, Transition, TransitionTable};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of an ordered rule set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleSetSnapshot<S, E, A> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// Rules in insertion order
    pub transitions: Vec<Transition<S, E, A>>,
}

impl<S, E, A> RuleSetSnapshot<S, E, A>
where
    S: Label + Serialize + DeserializeOwned,
    E: Label + Serialize + DeserializeOwned,
    A: Label + Serialize + DeserializeOwned,
{
    /// Take a snapshot of a table.
    pub fn capture(table: &TransitionTable<S, E, A>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            transitions: table.transitions().to_vec(),
        }
    }

    /// Rebuild the table, preserving rule order.
    pub fn into_table(self) -> TransitionTable<S, E, A> {
        TransitionTable::new(self.transitions)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
