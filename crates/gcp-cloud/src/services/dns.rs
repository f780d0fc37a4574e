//! Cloud DNS sub-service handle. No operations today.

use url::Url;

use super::ServiceHandle;
use crate::client::Transport;
use crate::error::Result;

#[derive(Debug)]
pub struct DnsService {
    handle: ServiceHandle,
}

impl DnsService {
    pub const NAME: &'static str = "Cloud DNS";

    const SCOPE: &'static str = "https://www.googleapis.com/auth/ndev.clouddns.readonly";
    const DEFAULT_ENDPOINT: &'static str = "https://dns.googleapis.com";

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
}
