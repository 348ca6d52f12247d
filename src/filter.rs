//! Filter Engine
//!
//! Pure functions computing derived views of the agent catalog. Nothing
//! here mutates its input; every operation returns a new vector.

use crate::catalog::Agent;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Combined search/category/tag constraint for deriving a filtered view.
///
/// Absent fields mean "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Build criteria from raw selection state, normalizing empties to
    /// absent: an empty query and an empty tag selection impose no
    /// constraint. The category passes through unchanged.
    pub fn new(search_query: &str, category: Option<&str>, tags: &[String]) -> Self {
        Self {
            search_query: if search_query.is_empty() {
                None
            } else {
                Some(search_query.to_string())
            },
            category: category.map(|c| c.to_string()),
            tags: if tags.is_empty() {
                None
            } else {
                Some(tags.to_vec())
            },
        }
    }

    /// True when any of query/category/tags is present.
    pub fn has_active_filters(&self) -> bool {
        self.search_query.as_deref().map_or(false, |q| !q.is_empty())
            || self.category.is_some()
            || self.tags.as_ref().map_or(false, |t| !t.is_empty())
    }
}

/// Apply search, category, and tag filters in order, composed as AND.
///
/// Search keeps an agent when its name, description, or any tag contains
/// the query case-insensitively. Category is exact equality. Tags require
/// the agent to carry every selected tag (case-sensitive exact match).
pub fn filter_agents(agents: &[Agent], criteria: &FilterCriteria) -> Vec<Agent> {
    let mut filtered: Vec<Agent> = agents.to_vec();

    if let Some(query) = criteria.search_query.as_deref().filter(|q| !q.is_empty()) {
        let query = query.to_lowercase();
        filtered.retain(|agent| {
            agent.name.to_lowercase().contains(&query)
                || agent.description.to_lowercase().contains(&query)
                || agent
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
        });
    }

    if let Some(category) = criteria.category.as_deref() {
        filtered.retain(|agent| agent.category == category);
    }

    if let Some(tags) = criteria.tags.as_ref().filter(|t| !t.is_empty()) {
        filtered.retain(|agent| tags.iter().all(|tag| agent.tags.iter().any(|t| t == tag)));
    }

    filtered
}

/// Order featured agents before the rest, rating descending within each
/// group. Copy-then-sort: the input is never reordered, and the stable
/// sort keeps equal-rating pairs in their relative input order.
pub fn sort_agents(agents: &[Agent]) -> Vec<Agent> {
    let mut sorted = agents.to_vec();
    sorted.sort_by(|a, b| match (a.featured, b.featured) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
    });
    sorted
}

/// Union of all tags across agents, deduplicated, lexicographic ascending.
pub fn extract_unique_tags(agents: &[Agent]) -> Vec<String> {
    let tags: BTreeSet<String> = agents
        .iter()
        .flat_map(|a| a.tags.iter().cloned())
        .collect();
    tags.into_iter().collect()
}
