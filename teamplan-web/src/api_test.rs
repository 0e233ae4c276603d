//! Tests for the API client
//!
//! Validates client construction and URL assembly for every resource
//! family; request dispatch itself is exercised in the browser.

use super::TeamPlanClient;
use uuid::Uuid;

/// Tests API client creation
#[test]
fn test_api_client_creation() {
    let client = TeamPlanClient::new("http://localhost:8080");
    assert_eq!(client.api_url("teams"), "http://localhost:8080/teams");
}

/// Tests that base URLs keep exactly one slash at the joint
#[test]
fn test_api_url_normalization() {
    let trailing = TeamPlanClient::new("/api/");
    assert_eq!(trailing.api_url("boards"), "/api/boards");

    let plain = TeamPlanClient::new("/api");
    assert_eq!(plain.api_url("/boards"), "/api/boards");
}

/// Tests nested resource paths
#[test]
fn test_nested_resource_paths() {
    let client = TeamPlanClient::new("/api");
    let id = Uuid::nil();

    assert_eq!(
        client.api_url(&format!("teams/{id}/lists")),
        "/api/teams/00000000-0000-0000-0000-000000000000/lists"
    );
    assert_eq!(
        client.api_url(&format!("boards/{id}/comments")),
        "/api/boards/00000000-0000-0000-0000-000000000000/comments"
    );
    assert_eq!(
        client.api_url(&format!("boards/{id}/like")),
        "/api/boards/00000000-0000-0000-0000-000000000000/like"
    );
}
