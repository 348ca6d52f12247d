//! Load-state machine for a single prompt request.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;

/// Lifecycle of one prompt load.
///
/// Starts at `Idle`, moves through `Loading`, and settles in either
/// `Success` with the fetched body or `Error` with a displayable
/// message. A new load re-enters the machine from the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PromptLoadState {
    Idle,
    Loading,
    Success { content: String },
    Error { message: String },
}

impl Default for PromptLoadState {
    fn default() -> Self {
        PromptLoadState::Idle
    }
}

impl PromptLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PromptLoadState::Loading)
    }

    /// Loaded body, or an empty string in every other state.
    pub fn content(&self) -> &str {
        match self {
            PromptLoadState::Success { content } => content,
            _ => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PromptLoadState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Drive one load to a terminal state.
///
/// Runs `load_fn` for `agent_id` and folds the outcome into
/// [`PromptLoadState`]: the body on success, the error rendered through
/// `Display` otherwise. An error that renders empty is replaced with a
/// generic message so the terminal state always carries something to
/// show.
pub async fn load_prompt_with_state<F, Fut, E>(agent_id: &str, load_fn: F) -> PromptLoadState
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, E>>,
    E: Display,
{
    match load_fn(agent_id.to_string()).await {
        Ok(content) => PromptLoadState::Success { content },
        Err(e) => {
            let rendered = e.to_string();
            let message = if rendered.is_empty() {
                "Failed to load prompt".to_string()
            } else {
                rendered
            };
            PromptLoadState::Error { message }
        }
    }
}
