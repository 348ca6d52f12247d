//! Scriptable fetcher for exercising the loader without a network.

use crate::error::PromptError;
use crate::prompt::fetch::PromptFetcher;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted result for a single agent id.
#[derive(Debug, Clone)]
enum MockOutcome {
    Body(String),
    Status(u16),
    Transport(String),
}

/// In-memory `PromptFetcher` with per-id scripted outcomes.
///
/// Ids with no configured outcome resolve to a 404, matching what the
/// upstream host returns for a missing prompt file.
#[derive(Debug, Default)]
pub struct MockPromptFetcher {
    outcomes: Mutex<HashMap<String, MockOutcome>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockPromptFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful fetch returning `body` for `id`.
    pub fn configure_prompt(&self, id: &str, body: &str) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.to_string(), MockOutcome::Body(body.to_string()));
    }

    /// Script a non-success HTTP status for `id`.
    pub fn configure_status(&self, id: &str, status: u16) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.to_string(), MockOutcome::Status(status));
    }

    /// Script a transport-level failure for `id`.
    pub fn configure_transport_failure(&self, id: &str, message: &str) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.to_string(), MockOutcome::Transport(message.to_string()));
    }

    /// All `(category, id)` pairs fetched so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn was_called(&self, id: &str) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|(_, called_id)| called_id == id)
    }
}

#[async_trait]
impl PromptFetcher for MockPromptFetcher {
    async fn fetch(&self, category: &str, id: &str) -> Result<String, PromptError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((category.to_string(), id.to_string()));

        let outcome = self
            .outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned();

        match outcome {
            Some(MockOutcome::Body(body)) => Ok(body),
            Some(MockOutcome::Status(status)) => Err(PromptError::HttpStatus(status)),
            Some(MockOutcome::Transport(message)) => Err(PromptError::Request(message)),
            None => Err(PromptError::HttpStatus(404)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_body_is_returned() {
        let mock = MockPromptFetcher::new();
        mock.configure_prompt("ui-designer", "# UI Designer");

        let body = mock.fetch("design", "ui-designer").await.unwrap();
        assert_eq!(body, "# UI Designer");
        assert!(mock.was_called("ui-designer"));
        assert_eq!(mock.calls(), vec![("design".to_string(), "ui-designer".to_string())]);
    }

    #[tokio::test]
    async fn unconfigured_id_is_a_404() {
        let mock = MockPromptFetcher::new();

        let err = mock.fetch("design", "ux-researcher").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn scripted_transport_failure_surfaces_message() {
        let mock = MockPromptFetcher::new();
        mock.configure_transport_failure("ai-engineer", "connection reset");

        let err = mock.fetch("engineering", "ai-engineer").await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed: connection reset");
    }
}
