//! Directory command service: single entry point per CLI command variant.
//!
//! Owns the browse/fetch/validate workflows; CLI parses, calls one method
//! per variant, and formats output.

use crate::catalog::AgentCatalog;
use crate::directory::types::{
    AgentListOutput, AgentShowOutput, CategoryListOutput, FetchAllOutput, FetchOutput,
    FetchedPrompt, TagListOutput, ValidateOutput, ValidationCheck,
};
use crate::error::{DirectoryError, PromptError};
use crate::filter::{extract_unique_tags, filter_agents, sort_agents, FilterCriteria};
use crate::prompt::{load_prompt_with_state, PromptLoader};
use std::time::Duration;

pub struct DirectoryCommandService;

impl DirectoryCommandService {
    /// Browse pipeline: filter, sort, optionally keep featured rows only.
    pub fn list(
        catalog: &AgentCatalog,
        criteria: &FilterCriteria,
        featured_only: bool,
    ) -> AgentListOutput {
        let filtered = filter_agents(catalog.agents(), criteria);
        let mut agents = sort_agents(&filtered);
        if featured_only {
            agents.retain(|a| a.featured);
        }
        AgentListOutput {
            total: agents.len(),
            agents,
            criteria: criteria.clone(),
        }
    }

    /// Show one agent with its resolved category record. With
    /// `include_prompt` the prompt comes from the inline catalog field
    /// when present, otherwise through the loader.
    pub fn show(
        catalog: &AgentCatalog,
        agent_id: &str,
        include_prompt: bool,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<AgentShowOutput, DirectoryError> {
        let agent = catalog
            .get(agent_id)
            .ok_or_else(|| PromptError::UnknownAgent(agent_id.to_string()))?;
        let category = catalog.get_category(&agent.category).cloned();
        let prompt = if include_prompt {
            match &agent.prompt {
                Some(text) => Some(text.clone()),
                None => Some(Self::load_one_blocking(agent_id, base_url, timeout_secs)?),
            }
        } else {
            None
        };
        Ok(AgentShowOutput {
            agent: agent.clone(),
            category,
            prompt,
        })
    }

    /// Unique tags across the catalog.
    pub fn tags(catalog: &AgentCatalog) -> TagListOutput {
        let tags = extract_unique_tags(catalog.agents());
        TagListOutput {
            total: tags.len(),
            tags,
        }
    }

    /// Category reference list.
    pub fn categories(catalog: &AgentCatalog) -> CategoryListOutput {
        let categories = catalog.categories().to_vec();
        CategoryListOutput {
            total: categories.len(),
            categories,
        }
    }

    /// Fetch one prompt, reporting the terminal load state.
    pub fn fetch(
        agent_id: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<FetchOutput, DirectoryError> {
        let loader = PromptLoader::with_base_url(base_url, Duration::from_secs(timeout_secs))?;
        let rt = Self::runtime()?;
        let state = rt.block_on(async {
            tokio::time::timeout(
                Duration::from_secs(timeout_secs),
                load_prompt_with_state(agent_id, |id| async move {
                    Ok::<_, PromptError>(loader.load_prompt(&id).await)
                }),
            )
            .await
            .map_err(|_| {
                DirectoryError::ConfigError(format!("Prompt fetch timeout ({}s)", timeout_secs))
            })
        })?;
        Ok(FetchOutput {
            agent_id: agent_id.to_string(),
            state,
        })
    }

    /// Fetch every catalog prompt concurrently.
    pub fn fetch_all(
        catalog: &AgentCatalog,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<FetchAllOutput, DirectoryError> {
        let loader = PromptLoader::with_base_url(base_url, Duration::from_secs(timeout_secs))?;
        let ids = catalog.agent_ids();
        let rt = Self::runtime()?;
        let prompts = rt.block_on(async {
            tokio::time::timeout(
                Duration::from_secs(timeout_secs),
                loader.load_all_prompts(&ids),
            )
            .await
            .map_err(|_| {
                DirectoryError::ConfigError(format!("Prompt fetch timeout ({}s)", timeout_secs))
            })
        })?;
        let mut prompts: Vec<FetchedPrompt> = prompts
            .into_iter()
            .map(|(agent_id, content)| FetchedPrompt { agent_id, content })
            .collect();
        prompts.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
        Ok(FetchAllOutput {
            total: prompts.len(),
            prompts,
        })
    }

    /// Catalog integrity report.
    pub fn validate(catalog: &AgentCatalog) -> ValidateOutput {
        let result = catalog.validate();
        ValidateOutput {
            valid: result.is_valid(),
            agents: catalog.len(),
            categories: catalog.categories().len(),
            checks: result
                .checks
                .iter()
                .map(|(description, passed)| ValidationCheck {
                    description: description.clone(),
                    passed: *passed,
                })
                .collect(),
            errors: result.errors.clone(),
        }
    }

    fn load_one_blocking(
        agent_id: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<String, DirectoryError> {
        let loader = PromptLoader::with_base_url(base_url, Duration::from_secs(timeout_secs))?;
        let rt = Self::runtime()?;
        rt.block_on(async {
            tokio::time::timeout(
                Duration::from_secs(timeout_secs),
                loader.load_prompt(agent_id),
            )
            .await
            .map_err(|_| {
                DirectoryError::ConfigError(format!("Prompt fetch timeout ({}s)", timeout_secs))
            })
        })
    }

    fn runtime() -> Result<tokio::runtime::Runtime, DirectoryError> {
        tokio::runtime::Runtime::new()
            .map_err(|e| DirectoryError::ConfigError(format!("Failed to create runtime: {}", e)))
    }
}
