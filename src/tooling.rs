//! Tooling & Integration Layer
//!
//! Command-line surface over the directory core: argument parsing,
//! command dispatch, and output rendering.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
