//! The multi-service client facade.
//!
//! One credential, five authenticated sub-service handles. Construction is
//! atomic: either every handle comes up, or [`GcpClientBuilder::build`]
//! returns an error naming the sub-service that failed and no client value
//! escapes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{KeyTokenSource, TokenSource};
use crate::error::{CloudError, Result, status_to_error};
use crate::services::{
    BillingService, DnsService, IamService, ResourceManagerService, ServiceManagementService,
};

/// Default user agent for outgoing API requests.
const USER_AGENT: &str = concat!("gcp-cloud/", env!("CARGO_PKG_VERSION"));

/// Transport default; individual operations are not otherwise time-bounded.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared transport underneath every sub-service handle.
#[derive(Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

impl Transport {
    /// Obtain a bearer token for `scope`. Used for the construction-time
    /// handshake and again per request.
    pub(crate) async fn token(&self, scope: &str) -> Result<String> {
        self.tokens.access_token(&[scope]).await
    }

    /// GET `url` with a bearer token for `scope`, decoding a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url, scope: &str) -> Result<T> {
        let token = self.token(scope).await?;
        let response = self.http.get(url).bearer_auth(&token).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| CloudError::UnexpectedResponse(err.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(status_to_error(status, &body))
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("http", &self.http)
            .field("tokens", &"<TokenSource>")
            .finish()
    }
}

/// Authenticated entry point to the wrapped Google Cloud sub-services.
#[derive(Debug)]
pub struct GcpClient {
    project_id: String,
    resource_manager: ResourceManagerService,
    iam: IamService,
    service_management: ServiceManagementService,
    billing: BillingService,
    dns: DnsService,
}

impl GcpClient {
    /// Start building a client.
    pub fn builder() -> GcpClientBuilder {
        GcpClientBuilder::default()
    }

    /// The caller-supplied target project identifier.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Handle for the Cloud Resource Manager API (project operations).
    pub fn resource_manager(&self) -> &ResourceManagerService {
        &self.resource_manager
    }

    /// Handle for the IAM API.
    pub fn iam(&self) -> &IamService {
        &self.iam
    }

    /// Handle for the Service Management API.
    pub fn service_management(&self) -> &ServiceManagementService {
        &self.service_management
    }

    /// Handle for the Cloud Billing API.
    pub fn billing(&self) -> &BillingService {
        &self.billing
    }

    /// Handle for the Cloud DNS API.
    pub fn dns(&self) -> &DnsService {
        &self.dns
    }

    /// Every sub-service paired with its API endpoint, in construction order.
    pub fn endpoints(&self) -> [(&'static str, &Url); 5] {
        [
            (ResourceManagerService::NAME, self.resource_manager.base_url()),
            (IamService::NAME, self.iam.base_url()),
            (ServiceManagementService::NAME, self.service_management.base_url()),
            (BillingService::NAME, self.billing.base_url()),
            (DnsService::NAME, self.dns.base_url()),
        ]
    }
}

/// Builder for [`GcpClient`].
#[derive(Default)]
pub struct GcpClientBuilder {
    project_id: Option<String>,
    key_file: Option<PathBuf>,
    token_source: Option<Arc<dyn TokenSource>>,
    user_agent: Option<String>,
    resource_manager_url: Option<String>,
    iam_url: Option<String>,
    service_management_url: Option<String>,
    billing_url: Option<String>,
    dns_url: Option<String>,
}

impl GcpClientBuilder {
    /// Target project identifier. Not validated here; an identifier the
    /// credential cannot resolve fails at the remote call.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Path to the service-account key file.
    pub fn key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_file = Some(path.into());
        self
    }

    /// Replace the key-file credential with an arbitrary token source.
    /// Takes precedence over [`Self::key_file`].
    pub fn token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(tokens);
        self
    }

    /// Override the default user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the Cloud Resource Manager endpoint.
    pub fn resource_manager_url(mut self, url: impl Into<String>) -> Self {
        self.resource_manager_url = Some(url.into());
        self
    }

    /// Override the IAM endpoint.
    pub fn iam_url(mut self, url: impl Into<String>) -> Self {
        self.iam_url = Some(url.into());
        self
    }

    /// Override the Service Management endpoint.
    pub fn service_management_url(mut self, url: impl Into<String>) -> Self {
        self.service_management_url = Some(url.into());
        self
    }

    /// Override the Cloud Billing endpoint.
    pub fn billing_url(mut self, url: impl Into<String>) -> Self {
        self.billing_url = Some(url.into());
        self
    }

    /// Override the Cloud DNS endpoint.
    pub fn dns_url(mut self, url: impl Into<String>) -> Self {
        self.dns_url = Some(url.into());
        self
    }

    /// Construct the client, performing one authentication handshake per
    /// sub-service in a fixed order: Cloud Resource Manager, IAM, Service
    /// Management, Cloud Billing, Cloud DNS. The first failure aborts
    /// construction; later sub-services are not attempted.
    pub async fn build(self) -> Result<GcpClient> {
        let project_id = self.project_id.unwrap_or_default();

        let tokens: Arc<dyn TokenSource> = match (self.token_source, &self.key_file) {
            (Some(tokens), _) => tokens,
            (None, Some(path)) => {
                debug!(path = %path.display(), "loading service-account key");
                Arc::new(KeyTokenSource::from_key_file(path)?)
            }
            (None, None) => {
                return Err(CloudError::Configuration(
                    "a service-account key file or token source is required".to_string(),
                ));
            }
        };

        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()))
            .build()
            .map_err(|err| {
                CloudError::Configuration(format!("failed to create HTTP client: {err}"))
            })?;

        let transport = Transport { http, tokens };

        let resource_manager =
            ResourceManagerService::connect(transport.clone(), self.resource_manager_url).await?;
        let iam = IamService::connect(transport.clone(), self.iam_url).await?;
        let service_management =
            ServiceManagementService::connect(transport.clone(), self.service_management_url)
                .await?;
        let billing = BillingService::connect(transport.clone(), self.billing_url).await?;
        let dns = DnsService::connect(transport, self.dns_url).await?;

        debug!(%project_id, "all sub-service handles established");

        Ok(GcpClient {
            project_id,
            resource_manager,
            iam,
            service_management,
            billing,
            dns,
        })
    }
}

impl std::fmt::Debug for GcpClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcpClientBuilder")
            .field("project_id", &self.project_id)
            .field("key_file", &self.key_file)
            .field("token_source", &self.token_source.as_ref().map(|_| "<TokenSource>"))
            .finish_non_exhaustive()
    }
}
