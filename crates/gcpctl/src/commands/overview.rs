//! The default account overview
//!
//! Bare invocations run the original linear flow: print each sub-service's
//! API endpoint, then one line per visible project, then the numeric project
//! number of the target project. Each stage's output stays on screen even if
//! a later stage fails.

use tracing::debug;

use crate::connection::ConnectionManager;
use crate::error::Result as CliResult;

pub async fn run(conn_mgr: &ConnectionManager) -> CliResult<()> {
    // Validate the target up front so a missing project id fails before any
    // remote call.
    let project_id = conn_mgr.require_project_id()?.to_string();

    let client = conn_mgr.create_client().await?;

    for (_, url) in client.endpoints() {
        println!("{url}");
    }

    debug!("enumerating visible projects");
    let listing = client.resource_manager().list_projects().await?;
    for project in &listing.projects {
        println!(
            "Project Name: {}\tProject ID: {}\tProject Number: {}",
            project.name, project.project_id, project.project_number
        );
    }

    debug!(project_id = %project_id, "looking up target project");
    let project = client.resource_manager().get_project(&project_id).await?;
    println!("{}", project.project_number);

    Ok(())
}
