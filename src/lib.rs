//! Promptdex: Agent Prompt Directory
//!
//! A searchable, filterable directory of AI agent prompt templates with
//! on-demand prompt fetching: pure filter/sort operations over an
//! embedded catalog, a never-throw prompt loader over a closed
//! id-to-category mapping, and a per-request load-state machine.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod filter;
pub mod logging;
pub mod prompt;
pub mod tooling;
