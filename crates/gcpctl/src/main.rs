use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::GcpCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    let conn_mgr = ConnectionManager::from_cli(&cli);

    // Execute command; every error is fatal
    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "gcpctl=warn,gcp_cloud=warn",
            1 => "gcpctl=info,gcp_cloud=info",
            2 => "gcpctl=debug,gcp_cloud=debug",
            _ => "gcpctl=trace,gcp_cloud=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), GcpCtlError> {
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        None => commands::overview::run(conn_mgr).await,

        Some(Commands::Project(project_cmd)) => {
            commands::project::handle_project_command(conn_mgr, project_cmd, cli.output).await
        }

        Some(Commands::Endpoints) => {
            commands::endpoints::handle_endpoints_command(conn_mgr, cli.output).await
        }

        Some(Commands::Version) => {
            debug!("Showing version information");
            match cli.output {
                cli::OutputFormat::Json | cli::OutputFormat::Yaml => {
                    let output_data = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "name": env!("CARGO_PKG_NAME"),
                    });

                    let fmt = match cli.output {
                        cli::OutputFormat::Yaml => output::OutputFormat::Yaml,
                        _ => output::OutputFormat::Json,
                    };

                    crate::output::print_output(&output_data, fmt)?;
                }
                _ => {
                    println!("gcpctl {}", env!("CARGO_PKG_VERSION"));
                }
            }
            Ok(())
        }

        Some(Commands::Completions { shell }) => {
            debug!("Generating completions for {:?}", shell);
            generate_completions(*shell);
            Ok(())
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Generate shell completions
fn generate_completions(shell: cli::Shell) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, name, &mut std::io::stdout())
        }
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut std::io::stdout()),
    }
}

/// Format command for human-readable logging (without credential material)
fn format_command(command: &Option<Commands>) -> String {
    match command {
        None => "overview".to_string(),
        Some(Commands::Project(cmd)) => {
            use cli::ProjectCommands::*;
            match cmd {
                List => "project list".to_string(),
                Get { project_id } => match project_id {
                    Some(id) => format!("project get {}", id),
                    None => "project get".to_string(),
                },
            }
        }
        Some(Commands::Endpoints) => "endpoints".to_string(),
        Some(Commands::Version) => "version".to_string(),
        Some(Commands::Completions { shell }) => format!("completions {:?}", shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_command_overview() {
        assert_eq!(format_command(&None), "overview");
    }

    #[test]
    fn format_command_project_get_with_id() {
        let cmd = Some(Commands::Project(cli::ProjectCommands::Get {
            project_id: Some("alpha-123".to_string()),
        }));
        assert_eq!(format_command(&cmd), "project get alpha-123");
    }

    #[test]
    fn cli_parses_overview_flags() {
        let cli = Cli::parse_from(["gcpctl", "--project-id", "alpha-123", "--json-key", "key.json"]);
        assert_eq!(cli.project_id.as_deref(), Some("alpha-123"));
        assert_eq!(cli.json_key.as_deref(), Some("key.json"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_project_get() {
        let cli = Cli::parse_from(["gcpctl", "project", "get", "alpha-123"]);
        match &cli.command {
            Some(Commands::Project(cli::ProjectCommands::Get { project_id })) => {
                assert_eq!(project_id.as_deref(), Some("alpha-123"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
