use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::InputRecord;

pub const SNAPSHOT_VERSION: u32 = 1;

/// A saved input record. The record is stored verbatim so that reloading
/// and re-scoring gives the same evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub record: InputRecord,
}

impl Snapshot {
    pub fn new(record: InputRecord) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            record,
        }
    }
}
