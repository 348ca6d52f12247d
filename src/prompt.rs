//! Prompt retrieval: closed id mapping, HTTP transport, the
//! never-throw loader, and the per-request load-state machine.

pub mod fetch;
mod loader;
mod mapping;
mod state;
pub mod testing;

pub use fetch::{HttpPromptFetcher, PromptFetcher};
pub use loader::PromptLoader;
pub use mapping::{agent_category, CATEGORY_IDS, KNOWN_AGENT_IDS};
pub use state::{load_prompt_with_state, PromptLoadState};
