//! Never-throw prompt loading over the closed agent mapping.

use crate::error::{DirectoryError, PromptError};
use crate::prompt::fetch::{HttpPromptFetcher, PromptFetcher};
use crate::prompt::mapping::agent_category;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Loads prompt bodies for known agent ids.
///
/// `load_prompt` never fails: any error on the path from id resolution
/// through transport collapses into a readable placeholder body, so
/// callers can render whatever comes back without their own error
/// handling.
pub struct PromptLoader {
    fetcher: Arc<dyn PromptFetcher>,
}

impl PromptLoader {
    pub fn new(fetcher: Arc<dyn PromptFetcher>) -> Self {
        Self { fetcher }
    }

    /// Build a loader backed by an HTTP fetcher against `base_url`.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let fetcher = HttpPromptFetcher::new(base_url, timeout)?;
        Ok(Self::new(Arc::new(fetcher)))
    }

    async fn try_load(&self, agent_id: &str) -> Result<String, PromptError> {
        let category = agent_category(agent_id)
            .ok_or_else(|| PromptError::UnknownAgent(agent_id.to_string()))?;
        self.fetcher.fetch(category, agent_id).await
    }

    /// Fetch the prompt body for `agent_id`, falling back to a
    /// placeholder message on any failure.
    pub async fn load_prompt(&self, agent_id: &str) -> String {
        match self.try_load(agent_id).await {
            Ok(content) => {
                debug!(agent_id = %agent_id, bytes = content.len(), "Loaded prompt");
                content
            }
            Err(e) => {
                error!(agent_id = %agent_id, error = %e, "Failed to load prompt");
                format!(
                    "Prompt for {} not found. Please check the prompt file.",
                    agent_id
                )
            }
        }
    }

    /// Fetch every id concurrently, returning an id to body map.
    ///
    /// Failed ids carry their placeholder body; the map always contains
    /// one entry per requested id.
    pub async fn load_all_prompts(&self, agent_ids: &[String]) -> HashMap<String, String> {
        let futures = agent_ids.iter().map(|id| async move {
            let content = self.load_prompt(id).await;
            (id.clone(), content)
        });

        join_all(futures).await.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::MockPromptFetcher;

    fn loader_with_mock() -> (PromptLoader, Arc<MockPromptFetcher>) {
        let mock = Arc::new(MockPromptFetcher::new());
        (PromptLoader::new(mock.clone()), mock)
    }

    #[tokio::test]
    async fn unknown_id_gets_placeholder_without_fetching() {
        let (loader, mock) = loader_with_mock();

        let body = loader.load_prompt("nonexistent-agent").await;
        assert_eq!(
            body,
            "Prompt for nonexistent-agent not found. Please check the prompt file."
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_fetch_returns_body() {
        let (loader, mock) = loader_with_mock();
        mock.configure_prompt("ui-designer", "# UI Designer\n\nYou craft interfaces.");

        let body = loader.load_prompt("ui-designer").await;
        assert_eq!(body, "# UI Designer\n\nYou craft interfaces.");
        assert_eq!(mock.calls(), vec![("design".to_string(), "ui-designer".to_string())]);
    }

    #[tokio::test]
    async fn http_failure_gets_placeholder() {
        let (loader, mock) = loader_with_mock();
        mock.configure_status("ai-engineer", 500);

        let body = loader.load_prompt("ai-engineer").await;
        assert_eq!(
            body,
            "Prompt for ai-engineer not found. Please check the prompt file."
        );
        assert!(mock.was_called("ai-engineer"));
    }

    #[tokio::test]
    async fn transport_failure_gets_placeholder() {
        let (loader, mock) = loader_with_mock();
        mock.configure_transport_failure("growth-hacker", "connection refused");

        let body = loader.load_prompt("growth-hacker").await;
        assert_eq!(
            body,
            "Prompt for growth-hacker not found. Please check the prompt file."
        );
    }

    #[tokio::test]
    async fn load_all_returns_entry_per_id() {
        let (loader, mock) = loader_with_mock();
        mock.configure_prompt("ui-designer", "designer prompt");
        mock.configure_status("ai-engineer", 404);

        let ids = vec!["ui-designer".to_string(), "ai-engineer".to_string()];
        let prompts = loader.load_all_prompts(&ids).await;

        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts["ui-designer"], "designer prompt");
        assert_eq!(
            prompts["ai-engineer"],
            "Prompt for ai-engineer not found. Please check the prompt file."
        );
        assert!(mock.was_called("ui-designer"));
        assert!(mock.was_called("ai-engineer"));
    }
}
