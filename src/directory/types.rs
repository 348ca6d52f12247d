//! Output DTOs for directory commands.
//!
//! JSON output is `serde_json::to_string_pretty` of these types; the
//! text renderings live in [`crate::directory::format`].

use crate::catalog::{Agent, AgentCategory};
use crate::filter::FilterCriteria;
use crate::prompt::PromptLoadState;
use serde::{Deserialize, Serialize};

/// Result of the list command: filtered and sorted rows plus the
/// criteria that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListOutput {
    pub agents: Vec<Agent>,
    pub total: usize,
    pub criteria: FilterCriteria,
}

/// Result of the show command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentShowOutput {
    pub agent: Agent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AgentCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Result of the tags command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagListOutput {
    pub tags: Vec<String>,
    pub total: usize,
}

/// Result of the categories command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListOutput {
    pub categories: Vec<AgentCategory>,
    pub total: usize,
}

/// Result of fetching one prompt: the terminal load state for the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutput {
    pub agent_id: String,
    #[serde(flatten)]
    pub state: PromptLoadState,
}

/// One fetched prompt in fetch --all output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPrompt {
    pub agent_id: String,
    pub content: String,
}

/// Result of fetch --all, sorted by agent id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchAllOutput {
    pub prompts: Vec<FetchedPrompt>,
    pub total: usize,
}

/// One integrity check in validate output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationCheck {
    pub description: String,
    pub passed: bool,
}

/// Result of the validate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub agents: usize,
    pub categories: usize,
    pub checks: Vec<ValidationCheck>,
    pub errors: Vec<String>,
}
