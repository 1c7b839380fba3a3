//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// ppts - Normalize a planning-permit extract into a relational database
#[derive(Parser, Debug)]
#[command(name = "ppts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load settings from a YAML file
    #[arg(short, long, global = true, env = "PPTS_CONFIG")]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize the extract and write it to a new database file
    Create(CreateArgs),

    /// Normalize the extract without writing anything
    Validate(ValidateArgs),
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Path to the CSV extract
    pub source: String,

    /// Path of the database file to create
    pub destination: String,

    /// Replace the destination if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the CSV extract
    pub source: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: SummaryOutput,
}

/// Summary output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
