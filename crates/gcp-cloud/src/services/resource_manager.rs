//! Cloud Resource Manager: the project-management sub-service.
//!
//! The only handle with operations today. Both are stateless, idempotent,
//! single-shot remote calls; errors surface verbatim with no retry.

use tracing::debug;
use url::Url;

use super::ServiceHandle;
use crate::client::Transport;
use crate::error::Result;
use crate::models::{ListProjectsResponse, Project};

#[derive(Debug)]
pub struct ResourceManagerService {
    handle: ServiceHandle,
}

impl ResourceManagerService {
    pub const NAME: &'static str = "Cloud Resource Manager";

    const SCOPE: &'static str = "https://www.googleapis.com/auth/cloudplatformprojects.readonly";
    const DEFAULT_ENDPOINT: &'static str = "https://cloudresourcemanager.googleapis.com";

    pub(crate) async fn connect(transport: Transport, override_url: Option<String>) -> Result<Self> {
        let handle = ServiceHandle::connect(
            transport,
            Self::NAME,
            Self::SCOPE,
            Self::DEFAULT_ENDPOINT,
            override_url,
        )
        .await?;
        Ok(Self { handle })
    }

    /// API endpoint this handle talks to.
    pub fn base_url(&self) -> &Url {
        self.handle.base_url()
    }

    /// Fetch the first page of projects visible to the credential, in
    /// provider-determined order. Zero visible projects yields an empty
    /// collection, not an error. The continuation token is not followed.
    pub async fn list_projects(&self) -> Result<ListProjectsResponse> {
        debug!("listing projects");
        let url = self.handle.endpoint(&["v1", "projects"])?;
        self.handle.get_json(url).await
    }

    /// Fetch a single project by its string identifier. An identifier the
    /// credential cannot resolve surfaces the remote error as-is.
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        debug!(project_id, "fetching project");
        let url = self.handle.endpoint(&["v1", "projects", project_id])?;
        self.handle.get_json(url).await
    }
}
