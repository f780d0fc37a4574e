//! Implementation of the endpoints command

use serde_json::json;

use crate::cli::OutputFormat;
use crate::connection::ConnectionManager;
use crate::error::Result as CliResult;
use crate::output::print_output;

/// Show the API endpoint of each sub-service, in construction order.
pub async fn handle_endpoints_command(
    conn_mgr: &ConnectionManager,
    output: OutputFormat,
) -> CliResult<()> {
    let client = conn_mgr.create_client().await?;

    match output {
        OutputFormat::Json | OutputFormat::Yaml => {
            let data: Vec<_> = client
                .endpoints()
                .iter()
                .map(|(service, url)| {
                    json!({
                        "service": service,
                        "endpoint": url.to_string(),
                    })
                })
                .collect();

            let format = match output {
                OutputFormat::Yaml => crate::output::OutputFormat::Yaml,
                _ => crate::output::OutputFormat::Json,
            };
            print_output(&data, format)?;
        }
        OutputFormat::Auto | OutputFormat::Table => {
            for (service, url) in client.endpoints() {
                println!("{service}: {url}");
            }
        }
    }

    Ok(())
}
