//! Sub-service handles.
//!
//! One module per wrapped API surface. Every handle owns a clone of the
//! shared transport plus its own endpoint and OAuth scope; constructing a
//! handle performs an independent token handshake for that scope.

mod billing;
mod dns;
mod iam;
mod resource_manager;
mod service_management;

pub use billing::BillingService;
pub use dns::DnsService;
pub use iam::IamService;
pub use resource_manager::ResourceManagerService;
pub use service_management::ServiceManagementService;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::client::Transport;
use crate::error::{CloudError, Result};

/// Common state behind every sub-service handle.
#[derive(Debug)]
pub(crate) struct ServiceHandle {
    transport: Transport,
    base_url: Url,
    scope: &'static str,
}

impl ServiceHandle {
    /// Establish the handle: resolve the endpoint, then perform the token
    /// handshake for this service's scope. A failure is reported against
    /// `service` so callers can tell which sub-service did not come up.
    pub(crate) async fn connect(
        transport: Transport,
        service: &'static str,
        scope: &'static str,
        default_url: &str,
        override_url: Option<String>,
    ) -> Result<Self> {
        let raw = override_url.as_deref().unwrap_or(default_url);
        let base_url = Url::parse(raw).map_err(|err| {
            CloudError::Configuration(format!("invalid {service} endpoint '{raw}': {err}"))
        })?;

        debug!(service, endpoint = %base_url, "authenticating");
        transport
            .token(scope)
            .await
            .map_err(|err| CloudError::handshake(service, err))?;

        Ok(Self {
            transport,
            base_url,
            scope,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL by appending path segments (percent-encoded).
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|()| {
                CloudError::Configuration(format!("endpoint '{}' cannot be a base", self.base_url))
            })?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.transport.get_json(url, self.scope).await
    }
}
