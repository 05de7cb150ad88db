use serde::{Deserialize, Serialize};

/// Snapshot of a Canvas discussion topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    pub id: i64,
    pub title: String,
}

/// Caller-supplied payload for posting a reply to a discussion topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub message: String,
}
