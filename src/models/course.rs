use serde::{Deserialize, Serialize};

/// Snapshot of a Canvas course, reduced to the fields the gateway exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
}
