//! # gcp-cloud
//!
//! Client facade for a handful of Google Cloud APIs, built from a single
//! service-account credential.
//!
//! The facade ([`GcpClient`]) holds one authenticated handle per wrapped
//! sub-service — Cloud Resource Manager, IAM, Service Management, Cloud
//! Billing and Cloud DNS — all derived from one key file. Construction is
//! all-or-nothing: if any handle's token handshake fails, [`build`] returns
//! an error naming the sub-service and no client is produced.
//!
//! Read operations live on the Cloud Resource Manager handle:
//!
//! ```no_run
//! use gcp_cloud::GcpClient;
//!
//! # async fn example() -> gcp_cloud::Result<()> {
//! let client = GcpClient::builder()
//!     .project_id("alpha-123")
//!     .key_file("/home/me/key.json")
//!     .build()
//!     .await?;
//!
//! let listing = client.resource_manager().list_projects().await?;
//! for project in &listing.projects {
//!     println!("{} ({})", project.name, project.project_id);
//! }
//!
//! let project = client.resource_manager().get_project("alpha-123").await?;
//! println!("{}", project.project_number);
//! # Ok(())
//! # }
//! ```
//!
//! [`build`]: GcpClientBuilder::build

mod auth;
mod client;
mod error;
mod models;
mod services;

pub use auth::{KeyTokenSource, TokenSource};
pub use client::{GcpClient, GcpClientBuilder};
pub use error::{CloudError, Result};
pub use models::{ListProjectsResponse, Project};
pub use services::{
    BillingService, DnsService, IamService, ResourceManagerService, ServiceManagementService,
};
