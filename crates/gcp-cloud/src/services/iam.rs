//! IAM sub-service handle.
//!
//! Constructed alongside the other handles so future identity operations can
//! be added without re-authenticating; carries no operations today.

use url::Url;

use super::ServiceHandle;
use crate::client::Transport;
use crate::error::Result;

#[derive(Debug)]
pub struct IamService {
    handle: ServiceHandle,
}

impl IamService {
    pub const NAME: &'static str = "IAM";

    const SCOPE: &'static str = "https://www.googleapis.com/auth/cloud-platform";
    const DEFAULT_ENDPOINT: &'static str = "https://iam.googleapis.com";

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
