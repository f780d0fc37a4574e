//! Connection management for the Google Cloud client
//!
//! Resolves credentials once, at the edge — CLI flags win over environment
//! variables — and hands the resolved paths to the client builder explicitly.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::{GcpCtlError, Result as CliResult};
use gcp_cloud::GcpClient;

/// User agent string for gcpctl HTTP requests
const GCPCTL_USER_AGENT: &str = concat!("gcpctl/", env!("CARGO_PKG_VERSION"));

/// Connection manager for creating the authenticated client facade
pub struct ConnectionManager {
    pub project_id: Option<String>,
    pub key_path: Option<PathBuf>,
}

impl ConnectionManager {
    /// Resolve configuration from parsed CLI arguments.
    ///
    /// `--project-id` and `--json-key` already merge their GCPCTL_* variables
    /// via clap; `GOOGLE_APPLICATION_CREDENTIALS` is the last-resort fallback
    /// for the key, matching the wider Google tooling convention.
    pub fn from_cli(cli: &Cli) -> Self {
        let key_fragment = cli
            .json_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_APPLICATION_CREDENTIALS").ok());

        if key_fragment.is_some() && cli.json_key.is_none() {
            debug!("using key file from GOOGLE_APPLICATION_CREDENTIALS");
        }

        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        let key_path = key_fragment.map(|fragment| resolve_key_path(&fragment, home.as_deref()));

        Self {
            project_id: cli.project_id.clone(),
            key_path,
        }
    }

    /// The target project identifier, or an input error when none was given.
    ///
    /// An empty-but-present identifier is passed through verbatim; the remote
    /// answer for it stays authoritative.
    pub fn require_project_id(&self) -> CliResult<&str> {
        self.project_id
            .as_deref()
            .ok_or_else(|| GcpCtlError::InvalidInput {
                message: "a target project is required: pass --project-id or set GCPCTL_PROJECT_ID"
                    .to_string(),
            })
    }

    /// Create the client facade from the resolved credentials.
    pub async fn create_client(&self) -> CliResult<GcpClient> {
        let key_path = self
            .key_path
            .as_ref()
            .ok_or_else(|| GcpCtlError::MissingCredentials {
                message: "no service-account key configured".to_string(),
            })?;

        debug!(key = %key_path.display(), "creating Google Cloud client");

        let client = GcpClient::builder()
            .project_id(self.project_id.clone().unwrap_or_default())
            .key_file(key_path)
            .user_agent(GCPCTL_USER_AGENT)
            .build()
            .await?;

        info!("all sub-service handles established");
        Ok(client)
    }
}

/// Resolve the key-file argument: an absolute path is used as-is, a relative
/// fragment is joined with the home directory.
fn resolve_key_path(fragment: &str, home: Option<&Path>) -> PathBuf {
    let fragment_path = Path::new(fragment);
    if fragment_path.is_absolute() {
        return fragment_path.to_path_buf();
    }
    match home {
        Some(home) => home.join(fragment_path),
        None => fragment_path.to_path_buf(),
    }
}
