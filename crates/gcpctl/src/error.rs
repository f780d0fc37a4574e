//! Error types for gcpctl
//!
//! Structured error types using thiserror. Every failure path is fatal: the
//! error is printed with suggestions and the process exits non-zero.

use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: no service-account key configured
///
///   tip: pass the key file explicitly:
///       gcpctl --json-key key.json project list
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<(String, Vec<String>)>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    /// Add a tip with optional example commands.
    pub fn tip(mut self, description: &str, commands: &[&str]) -> Self {
        self.tips.push((
            description.to_string(),
            commands.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for (description, commands) in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
            for cmd in commands {
                eprintln!("      {}", cmd);
            }
        }
    }
}

/// Main error type for the gcpctl application
#[derive(Error, Debug)]
pub enum GcpCtlError {
    #[error("{message}")]
    MissingCredentials { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error(transparent)]
    Cloud(#[from] gcp_cloud::CloudError),

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for gcpctl operations
pub type Result<T> = std::result::Result<T, GcpCtlError>;

impl GcpCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            GcpCtlError::MissingCredentials { .. } => vec![
                "Pass the key file explicitly: gcpctl --json-key key.json <command>".to_string(),
                "Or set GCPCTL_JSON_KEY / GOOGLE_APPLICATION_CREDENTIALS".to_string(),
                "Relative paths are resolved against your home directory".to_string(),
            ],
            GcpCtlError::InvalidInput { .. } => vec![
                "Check the command syntax: gcpctl <command> --help".to_string(),
            ],
            GcpCtlError::Cloud(err) if matches!(err, gcp_cloud::CloudError::InvalidKeyFile { .. }) => {
                vec![
                    "Check that the key file exists and is a service-account JSON key".to_string(),
                    "Relative --json-key paths are resolved against your home directory".to_string(),
                ]
            }
            GcpCtlError::Cloud(err) if err.is_unauthorized() => vec![
                "Verify the service account has access to the target project".to_string(),
                "Check that the key has not been revoked".to_string(),
            ],
            GcpCtlError::Cloud(err) if err.is_not_found() => vec![
                "Verify the project identifier is correct".to_string(),
                "List visible projects: gcpctl project list".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion, &[]);
        }

        diag.print();
    }
}

impl From<serde_json::Error> for GcpCtlError {
    fn from(err: serde_json::Error) -> Self {
        GcpCtlError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for GcpCtlError {
    fn from(err: std::io::Error) -> Self {
        GcpCtlError::OutputError {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<anyhow::Error> for GcpCtlError {
    fn from(err: anyhow::Error) -> Self {
        GcpCtlError::OutputError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_suggest_the_flag() {
        let err = GcpCtlError::MissingCredentials {
            message: "no service-account key configured".to_string(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("--json-key")));
    }

    #[test]
    fn not_found_suggests_listing() {
        let err = GcpCtlError::Cloud(gcp_cloud::CloudError::NotFound {
            message: "Project ghost not found".to_string(),
        });
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("project list")));
    }

    #[test]
    fn cloud_errors_display_transparently() {
        let err = GcpCtlError::Cloud(gcp_cloud::CloudError::Forbidden {
            message: "The caller does not have permission".to_string(),
        });
        assert!(err.to_string().contains("does not have permission"));
    }
}
