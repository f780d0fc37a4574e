//! Credential handling.
//!
//! The facade talks to the auth backend through the [`TokenSource`] trait so
//! the HTTP layer can be exercised in tests without a real key. Production
//! code uses [`KeyTokenSource`], which wraps a service-account key file via
//! `gcp_auth`.

use std::path::Path;

use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};

use crate::error::{CloudError, Result};

/// Source of OAuth2 bearer tokens scoped to a Google API surface.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Obtain an access token valid for the given scopes.
    ///
    /// May perform a network round trip to the auth backend; implementations
    /// are free to cache per scope set.
    async fn access_token(&self, scopes: &[&str]) -> Result<String>;
}

/// Token source backed by a service-account key file.
pub struct KeyTokenSource {
    account: CustomServiceAccount,
}

impl KeyTokenSource {
    /// Load a service-account key from `path`.
    ///
    /// The file is read and parsed once, here; token exchanges happen lazily
    /// per scope when [`TokenSource::access_token`] is called.
    pub fn from_key_file(path: &Path) -> Result<Self> {
        let account = CustomServiceAccount::from_file(path).map_err(|err| {
            CloudError::InvalidKeyFile {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(Self { account })
    }
}

#[async_trait]
impl TokenSource for KeyTokenSource {
    async fn access_token(&self, scopes: &[&str]) -> Result<String> {
        let token = self.account.token(scopes).await.map_err(|err| {
            CloudError::AuthenticationFailed {
                message: err.to_string(),
            }
        })?;
        Ok(token.as_str().to_string())
    }
}

// CustomServiceAccount holds key material; keep it out of Debug output.
impl std::fmt::Debug for KeyTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTokenSource")
            .field("account", &"<service account>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_key_file_fails() {
        let err = KeyTokenSource::from_key_file(Path::new("/nonexistent/key.json"))
            .expect_err("missing file must not yield a token source");
        match err {
            CloudError::InvalidKeyFile { path, .. } => {
                assert!(path.contains("/nonexistent/key.json"));
            }
            other => panic!("expected InvalidKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn malformed_key_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a service account key").unwrap();

        let err = KeyTokenSource::from_key_file(file.path())
            .expect_err("malformed key must not yield a token source");
        assert!(matches!(err, CloudError::InvalidKeyFile { .. }));
    }
}
