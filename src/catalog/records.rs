//! Agent and category records.
//!
//! Wire names are camelCase so catalog files remain interchangeable with
//! the JSON shape the directory has always used.

use serde::{Deserialize, Serialize};

/// One prompt template and its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique stable identifier, also the remote prompt file stem.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Foreign key into the category set.
    pub category: String,
    /// Order irrelevant for matching, relevant for display truncation.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Primary sort key: featured agents list before all others.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub rating: f64,
    /// Inline prompt text; absent means fetch on demand by `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Grouping classification for agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}
