//! Implementation of project commands

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{OutputFormat, ProjectCommands};
use crate::connection::ConnectionManager;
use crate::error::Result as CliResult;
use crate::output::print_output;
use gcp_cloud::Project;

/// Row structure for the project listing
#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PROJECT ID")]
    project_id: String,
    #[tabled(rename = "NUMBER")]
    number: i64,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            project_id: project.project_id.clone(),
            number: project.project_number,
        }
    }
}

/// Row structure for vertical detail display (used by get)
#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

pub async fn handle_project_command(
    conn_mgr: &ConnectionManager,
    cmd: &ProjectCommands,
    output: OutputFormat,
) -> CliResult<()> {
    match cmd {
        ProjectCommands::List => list_projects(conn_mgr, output).await,
        ProjectCommands::Get { project_id } => {
            get_project(conn_mgr, project_id.as_deref(), output).await
        }
    }
}

async fn list_projects(conn_mgr: &ConnectionManager, output: OutputFormat) -> CliResult<()> {
    let client = conn_mgr.create_client().await?;
    let listing = client.resource_manager().list_projects().await?;

    match output {
        OutputFormat::Json => print_output(&listing, crate::output::OutputFormat::Json)?,
        OutputFormat::Yaml => print_output(&listing, crate::output::OutputFormat::Yaml)?,
        OutputFormat::Auto | OutputFormat::Table => {
            if listing.projects.is_empty() {
                println!("No projects visible to this credential.");
                return Ok(());
            }

            let rows: Vec<ProjectRow> = listing.projects.iter().map(ProjectRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}

async fn get_project(
    conn_mgr: &ConnectionManager,
    project_id: Option<&str>,
    output: OutputFormat,
) -> CliResult<()> {
    // Resolve the target before any remote call is attempted.
    let project_id = match project_id {
        Some(id) => id.to_string(),
        None => conn_mgr.require_project_id()?.to_string(),
    };

    let client = conn_mgr.create_client().await?;
    let project = client.resource_manager().get_project(&project_id).await?;

    match output {
        OutputFormat::Json => print_output(&project, crate::output::OutputFormat::Json)?,
        OutputFormat::Yaml => print_output(&project, crate::output::OutputFormat::Yaml)?,
        OutputFormat::Auto | OutputFormat::Table => {
            let mut rows = vec![
                DetailRow {
                    field: "Name".to_string(),
                    value: project.name.clone(),
                },
                DetailRow {
                    field: "Project ID".to_string(),
                    value: project.project_id.clone(),
                },
                DetailRow {
                    field: "Project Number".to_string(),
                    value: project.project_number.to_string(),
                },
            ];
            if let Some(state) = &project.lifecycle_state {
                rows.push(DetailRow {
                    field: "Lifecycle State".to_string(),
                    value: state.clone(),
                });
            }
            if let Some(created) = &project.create_time {
                rows.push(DetailRow {
                    field: "Created".to_string(),
                    value: created.clone(),
                });
            }

            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}
