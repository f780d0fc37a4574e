//! Integration tests for the client facade, run against a mock API server.

use std::sync::Arc;

use async_trait::async_trait;
use gcp_cloud::{CloudError, GcpClient, Project, TokenSource};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token source that always hands out the same token, for all scopes.
struct StaticTokens;

#[async_trait]
impl TokenSource for StaticTokens {
    async fn access_token(&self, _scopes: &[&str]) -> gcp_cloud::Result<String> {
        Ok("test-token".to_string())
    }
}

/// Token source that refuses scopes containing `deny`, succeeds otherwise.
struct DenyScope(&'static str);

#[async_trait]
impl TokenSource for DenyScope {
    async fn access_token(&self, scopes: &[&str]) -> gcp_cloud::Result<String> {
        if scopes.iter().any(|scope| scope.contains(self.0)) {
            Err(CloudError::AuthenticationFailed {
                message: format!("scope rejected: {}", self.0),
            })
        } else {
            Ok("test-token".to_string())
        }
    }
}

/// Build a facade with every sub-service pointed at the mock server.
async fn facade(server: &MockServer) -> GcpClient {
    GcpClient::builder()
        .project_id("alpha-123")
        .token_source(Arc::new(StaticTokens))
        .resource_manager_url(server.uri())
        .iam_url(server.uri())
        .service_management_url(server.uri())
        .billing_url(server.uri())
        .dns_url(server.uri())
        .build()
        .await
        .expect("facade construction")
}

fn alpha_project() -> Project {
    Project {
        name: "Alpha".to_string(),
        project_id: "alpha-123".to_string(),
        project_number: 123456,
        lifecycle_state: Some("ACTIVE".to_string()),
        create_time: None,
    }
}

#[tokio::test]
async fn list_projects_returns_visible_projects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            // projectNumber string-encoded, as Google serializes int64
            r#"{"projects":[{"name":"Alpha","projectId":"alpha-123","projectNumber":"123456","lifecycleState":"ACTIVE"}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let listing = client.resource_manager().list_projects().await.unwrap();

    assert_eq!(listing.projects, vec![alpha_project()]);
    assert!(listing.next_page_token.is_none());
}

#[tokio::test]
async fn get_project_returns_matching_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/alpha-123"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name":"Alpha","projectId":"alpha-123","projectNumber":"123456","lifecycleState":"ACTIVE"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let project = client.resource_manager().get_project("alpha-123").await.unwrap();

    assert_eq!(project, alpha_project());
    assert_eq!(project.project_number, 123456);
}

#[tokio::test]
async fn empty_listing_is_a_result_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let listing = client.resource_manager().list_projects().await.unwrap();

    assert!(listing.projects.is_empty());
}

#[tokio::test]
async fn get_project_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"error":{"code":404,"message":"Project ghost not found","status":"NOT_FOUND"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let err = client
        .resource_manager()
        .get_project("ghost")
        .await
        .expect_err("unknown project must not resolve");

    assert!(err.is_not_found());
    assert!(err.to_string().contains("Project ghost not found"));
}

#[tokio::test]
async fn permission_errors_surface_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(
            r#"{"error":{"code":403,"message":"The caller does not have permission","status":"PERMISSION_DENIED"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let err = client.resource_manager().list_projects().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("does not have permission"));
}

#[tokio::test]
async fn server_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("backend unavailable", "text/plain"))
        .mount(&server)
        .await;

    let client = facade(&server).await;
    let err = client.resource_manager().list_projects().await.unwrap_err();

    assert!(err.is_server_error());
}

#[tokio::test]
async fn first_handshake_failure_names_resource_manager() {
    // The resource-manager scope is the first one requested by construction
    // order, so a credential that satisfies nothing fails there.
    let err = GcpClient::builder()
        .project_id("alpha-123")
        .token_source(Arc::new(DenyScope("cloudplatformprojects")))
        .build()
        .await
        .expect_err("construction must fail");

    assert_eq!(err.failed_service(), Some("Cloud Resource Manager"));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn later_handshake_failure_names_that_service() {
    // Earlier scopes succeed; the DNS handshake is the one that fails,
    // showing the handshakes are independent and ordered.
    let err = GcpClient::builder()
        .project_id("alpha-123")
        .token_source(Arc::new(DenyScope("clouddns")))
        .build()
        .await
        .expect_err("construction must fail");

    assert_eq!(err.failed_service(), Some("Cloud DNS"));
}
