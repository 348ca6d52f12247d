//! Promptdex CLI Binary
//!
//! Command-line interface for the agent prompt directory.

use clap::Parser;
use promptdex::config::PromptdexConfig;
use promptdex::error::DirectoryError;
use promptdex::logging::{init_logging, resolve_log_file_path};
use promptdex::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context
    let context = match CliContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing workspace: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_cli_logging(&cli, context.config()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Overlay CLI logging flags on the configured logging section, then
/// initialize the subscriber.
fn init_cli_logging(cli: &Cli, config: &PromptdexConfig) -> Result<(), DirectoryError> {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Ok(path) =
        resolve_log_file_path(cli.log_file.clone(), logging.file.clone(), Some(&cli.workspace))
    {
        logging.file = Some(path);
    }
    init_logging(Some(&logging))
}
