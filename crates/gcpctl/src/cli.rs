//! CLI structure and command definitions
//!
//! Defines the command-line interface using clap. A bare invocation (no
//! subcommand) runs the account overview: sub-service endpoints, visible
//! projects, then the target project's number.

use clap::{Parser, Subcommand};

/// Google Cloud account CLI for read-only project inspection
#[derive(Parser, Debug)]
#[command(name = "gcpctl")]
#[command(version, about = "Google Cloud account CLI for read-only project inspection")]
#[command(long_about = "
Google Cloud account CLI for read-only project inspection

Authenticates with a service-account key file and talks to the project
management API. A relative --json-key path is resolved against your home
directory.

EXAMPLES:
    # Account overview: endpoints, visible projects, target project number
    gcpctl --project-id alpha-123 --json-key key.json

    # List the projects visible to the credential
    gcpctl project list --json-key key.json

    # Fetch one project, as JSON for scripting
    gcpctl project get alpha-123 --json-key key.json -o json

    # Show the API endpoint of each sub-service
    gcpctl endpoints --json-key key.json

For more help on a specific command, run:
    gcpctl <command> --help
")]
pub struct Cli {
    /// Target project identifier
    #[arg(long, global = true, env = "GCPCTL_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Path to the service-account key file (relative paths resolve against
    /// the home directory)
    #[arg(long = "json-key", global = true, env = "GCPCTL_JSON_KEY")]
    pub json_key: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format options
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Automatically choose format based on command and context
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project operations
    #[command(subcommand, visible_alias = "proj")]
    #[command(after_help = "EXAMPLES:
    # List projects visible to the credential
    gcpctl project list --json-key key.json

    # Fetch one project by identifier
    gcpctl project get alpha-123 --json-key key.json
")]
    Project(ProjectCommands),

    /// Show the API endpoint of each sub-service
    Endpoints,

    /// Show version information
    #[command(visible_alias = "ver", visible_alias = "v")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects visible to the credential (first page only)
    List,

    /// Get a single project's metadata
    Get {
        /// Project identifier (defaults to --project-id)
        project_id: Option<String>,
    },
}

/// Supported completion shells
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
