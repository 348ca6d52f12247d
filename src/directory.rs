//! Directory command layer: command services, output DTOs, and text
//! formatting consumed by the CLI.

pub mod commands;
pub mod format;
pub mod types;

pub use commands::DirectoryCommandService;
