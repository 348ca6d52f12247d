//! CLI Tooling
//!
//! Command-line interface for browsing the agent directory and fetching
//! prompt text. Parsing lives here; workflows live in the directory
//! command service.

use crate::catalog::AgentCatalog;
use crate::config::{ConfigLoader, PromptdexConfig};
use crate::directory::format::{
    format_agent_list_text, format_agent_show_text, format_category_list_text,
    format_fetch_all_text, format_fetch_text, format_tag_list_text, format_validate_text,
};
use crate::directory::DirectoryCommandService;
use crate::error::DirectoryError;
use crate::filter::FilterCriteria;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Promptdex CLI - Browse and fetch AI agent prompt templates
#[derive(Parser)]
#[command(name = "promptdex")]
#[command(about = "Browse a curated directory of AI agent prompt templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the agent directory (filtered, sorted)
    List {
        /// Case-insensitive search over name, description, and tags
        #[arg(long)]
        search: Option<String>,
        /// Keep only agents in this category
        #[arg(long)]
        category: Option<String>,
        /// Require this tag (repeatable; an agent must carry every one)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Keep only featured agents
        #[arg(long)]
        featured: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one agent's detail record
    Show {
        /// Agent identifier
        agent_id: String,
        /// Include the prompt text (inline field, or fetched on demand)
        #[arg(long)]
        include_prompt: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List every tag in the catalog
    Tags {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the category reference data
    Categories {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Fetch prompt text from the remote source
    Fetch {
        /// Agent identifier (omit with --all)
        agent_id: Option<String>,
        /// Fetch every catalog prompt concurrently
        #[arg(long)]
        all: bool,
        /// Fetch timeout in seconds (default: from config)
        #[arg(long)]
        timeout: Option<u64>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate catalog integrity
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub struct CliContext {
    config: PromptdexConfig,
    catalog: AgentCatalog,
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, DirectoryError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let catalog = match &config.catalog.path {
            Some(path) => {
                let resolved = if path.is_absolute() {
                    path.clone()
                } else {
                    workspace_root.join(path)
                };
                AgentCatalog::load_from_file(&resolved)?
            }
            None => AgentCatalog::embedded()?,
        };

        Ok(Self {
            config,
            catalog,
            workspace_root,
            config_path,
        })
    }

    pub fn config(&self) -> &PromptdexConfig {
        &self.config
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, DirectoryError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::List {
                search,
                category,
                tags,
                featured,
                format,
            } => self.handle_list(search.as_deref(), category.as_deref(), tags, *featured, format),
            Commands::Show {
                agent_id,
                include_prompt,
                format,
            } => self.handle_show(agent_id, *include_prompt, format),
            Commands::Tags { format } => self.handle_tags(format),
            Commands::Categories { format } => self.handle_categories(format),
            Commands::Fetch {
                agent_id,
                all,
                timeout,
                format,
            } => self.handle_fetch(agent_id.as_deref(), *all, *timeout, format),
            Commands::Validate { format } => self.handle_validate(format),
        }
    }

    /// Handle list command
    fn handle_list(
        &self,
        search: Option<&str>,
        category: Option<&str>,
        tags: &[String],
        featured: bool,
        format: &str,
    ) -> Result<String, DirectoryError> {
        let criteria = FilterCriteria::new(search.unwrap_or(""), category, tags);
        let result = DirectoryCommandService::list(&self.catalog, &criteria, featured);
        match format {
            "json" => to_pretty_json(&result),
            "text" | _ => Ok(format_agent_list_text(&result)),
        }
    }

    /// Handle show command
    fn handle_show(
        &self,
        agent_id: &str,
        include_prompt: bool,
        format: &str,
    ) -> Result<String, DirectoryError> {
        let result = DirectoryCommandService::show(
            &self.catalog,
            agent_id,
            include_prompt,
            &self.config.source.base_url,
            self.config.source.timeout_secs,
        )?;
        match format {
            "json" => to_pretty_json(&result),
            "text" | _ => Ok(format_agent_show_text(&result)),
        }
    }

    /// Handle tags command
    fn handle_tags(&self, format: &str) -> Result<String, DirectoryError> {
        let result = DirectoryCommandService::tags(&self.catalog);
        match format {
            "json" => to_pretty_json(&result),
            "text" | _ => Ok(format_tag_list_text(&result)),
        }
    }

    /// Handle categories command
    fn handle_categories(&self, format: &str) -> Result<String, DirectoryError> {
        let result = DirectoryCommandService::categories(&self.catalog);
        match format {
            "json" => to_pretty_json(&result),
            "text" | _ => Ok(format_category_list_text(&result)),
        }
    }

    /// Handle fetch command
    fn handle_fetch(
        &self,
        agent_id: Option<&str>,
        all: bool,
        timeout: Option<u64>,
        format: &str,
    ) -> Result<String, DirectoryError> {
        let timeout_secs = timeout.unwrap_or(self.config.source.timeout_secs);
        let base_url = &self.config.source.base_url;
        if all {
            let result =
                DirectoryCommandService::fetch_all(&self.catalog, base_url, timeout_secs)?;
            match format {
                "json" => to_pretty_json(&result),
                "text" | _ => Ok(format_fetch_all_text(&result)),
            }
        } else {
            let id = agent_id.ok_or_else(|| {
                DirectoryError::ConfigError(
                    "Agent ID required unless --all is specified".to_string(),
                )
            })?;
            let result = DirectoryCommandService::fetch(id, base_url, timeout_secs)?;
            match format {
                "json" => to_pretty_json(&result),
                "text" | _ => Ok(format_fetch_text(&result)),
            }
        }
    }

    /// Handle validate command
    fn handle_validate(&self, format: &str) -> Result<String, DirectoryError> {
        let result = DirectoryCommandService::validate(&self.catalog);
        match format {
            "json" => to_pretty_json(&result),
            "text" | _ => Ok(format_validate_text(&result)),
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
        Commands::Tags { .. } => "tags",
        Commands::Categories { .. } => "categories",
        Commands::Fetch { .. } => "fetch",
        Commands::Validate { .. } => "validate",
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, DirectoryError> {
    Ok(serde_json::to_string_pretty(value)?)
}
