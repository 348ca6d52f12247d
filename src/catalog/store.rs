//! Catalog store: the embedded seed directory and user-supplied catalog files.

use crate::catalog::records::{Agent, AgentCategory};
use crate::error::DirectoryError;
use crate::prompt::agent_category;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("data/catalog.json");

/// In-memory agent directory: agent records plus category reference data.
///
/// The catalog is read-only once loaded; filtering and sorting always
/// produce derived vectors and never touch the stored records.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentCatalog {
    agents: Vec<Agent>,
    categories: Vec<AgentCategory>,
}

impl AgentCatalog {
    /// Load the catalog bundled into the binary.
    pub fn embedded() -> Result<Self, DirectoryError> {
        serde_json::from_str(EMBEDDED_CATALOG)
            .map_err(|e| DirectoryError::CatalogError(format!("Embedded catalog invalid: {}", e)))
    }

    /// Load a catalog file of the same JSON shape as the embedded seed.
    pub fn load_from_file(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DirectoryError::CatalogError(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DirectoryError::CatalogError(format!(
                "Failed to parse catalog file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn categories(&self) -> &[AgentCategory] {
        &self.categories
    }

    /// Look up one agent by identifier.
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Look up one category record by identifier.
    pub fn get_category(&self, id: &str) -> Option<&AgentCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All agent identifiers in catalog order.
    pub fn agent_ids(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Check catalog integrity: unique identifiers, resolvable category
    /// references, and closed-mapping coverage for every agent.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for agent in &self.agents {
            if !seen.insert(agent.id.as_str()) {
                duplicates.push(agent.id.clone());
            }
        }
        if duplicates.is_empty() {
            result.add_check("Agent identifiers are unique", true);
        } else {
            for id in duplicates {
                result.add_error(format!("Duplicate agent ID: {}", id));
            }
        }

        let mut unresolved = 0usize;
        for agent in &self.agents {
            if self.get_category(&agent.category).is_none() {
                unresolved += 1;
                result.add_error(format!(
                    "Agent '{}' references unknown category '{}'",
                    agent.id, agent.category
                ));
            }
        }
        if unresolved == 0 {
            result.add_check("Every agent category resolves", true);
        }

        let mut unmapped = 0usize;
        for agent in &self.agents {
            if agent_category(&agent.id).is_none() {
                unmapped += 1;
                result.add_error(format!(
                    "Agent '{}' is missing from the prompt category mapping",
                    agent.id
                ));
            }
        }
        if unmapped == 0 {
            result.add_check("Every agent is covered by the prompt mapping", true);
        }

        result
    }
}

/// Validation result for catalog integrity checks.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub checks: Vec<(String, bool)>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_check(&mut self, description: &str, passed: bool) {
        self.checks.push((description.to_string(), passed));
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.checks.iter().all(|(_, passed)| *passed)
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }

    pub fn passed_checks(&self) -> usize {
        self.checks.iter().filter(|(_, passed)| *passed).count()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = AgentCatalog::embedded().unwrap();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.categories().len(), 5);
    }

    #[test]
    fn embedded_catalog_lookup() {
        let catalog = AgentCatalog::embedded().unwrap();
        let agent = catalog.get("ai-engineer").unwrap();
        assert_eq!(agent.category, "engineering");
        assert!(catalog.get("no-such-agent").is_none());
        assert!(catalog.get_category("design").is_some());
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = AgentCatalog::embedded().unwrap();
        let result = catalog.validate();
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert_eq!(result.total_checks(), 3);
        assert_eq!(result.passed_checks(), 3);
    }

    #[test]
    fn load_from_file_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, EMBEDDED_CATALOG).unwrap();

        let catalog = AgentCatalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 25);
    }

    #[test]
    fn load_from_file_reports_parse_failure() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AgentCatalog::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }

    #[test]
    fn validate_flags_unknown_category_and_unmapped_id() {
        let catalog = AgentCatalog {
            agents: vec![
                Agent {
                    id: "mystery-agent".to_string(),
                    name: "Mystery".to_string(),
                    description: "Not in the closed mapping".to_string(),
                    category: "ghost-category".to_string(),
                    tags: vec![],
                    featured: false,
                    usage_count: 0,
                    rating: 0.0,
                    prompt: None,
                },
            ],
            categories: vec![],
        };
        let result = catalog.validate();
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("unknown category 'ghost-category'")));
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("missing from the prompt category mapping")));
    }
}
