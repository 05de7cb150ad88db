use serde::{Deserialize, Serialize};

/// Snapshot of a Canvas assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
}
