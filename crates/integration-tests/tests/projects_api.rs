//! Integration tests for the public project listing and admin project API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use projects_hub_integration_tests::{TestContext, body_json, project_body};

async fn create_project(ctx: &TestContext, name: &str) -> Value {
    let resp = ctx
        .post("/api/admin/projects", &project_body(name, "https://example.com"))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn test_public_listing_starts_empty() {
    let ctx = TestContext::new().await;

    let resp = ctx.get("/api/projects").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn test_mutations_require_login() {
    let ctx = TestContext::new().await;
    ctx.setup_admin().await;
    let project = create_project(&ctx, "Hub").await;
    let id = project["id"].as_str().unwrap();

    let anon = ctx.anonymous_client();
    let body = project_body("Sneaky", "https://evil.example.com");

    let resp = anon
        .post(ctx.url("/api/admin/projects"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = anon
        .put(ctx.url(&format!("/api/admin/projects/{id}")))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = anon
        .delete(ctx.url(&format!("/api/admin/projects/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Anonymous readers still see the listing, unchanged
    let list = anon.get(ctx.url("/api/projects")).send().await.unwrap();
    let list = body_json(list).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Hub");
}

#[tokio::test]
async fn test_create_appends_in_order() {
    let ctx = TestContext::new().await;
    ctx.setup_admin().await;

    let first = create_project(&ctx, "First").await;
    let second = create_project(&ctx, "Second").await;

    assert!(first["id"].as_str().unwrap().starts_with("project-"));
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["createdAt"], first["updatedAt"]);
    assert_eq!(first["icon"], "code");

    let list = body_json(ctx.get("/api/projects").await).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["First", "Second"]);

    let raw = std::fs::read_to_string(ctx.data_dir().join("projects.json")).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["projects"].as_array().unwrap().len(), 2);
    assert!(doc["lastUpdated"].as_i64().unwrap() >= first["createdAt"].as_i64().unwrap());
}

#[tokio::test]
async fn test_invalid_project_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.setup_admin().await;

    let resp = ctx
        .post("/api/admin/projects", &project_body("Hub", "not a url"))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ctx
        .post("/api/admin/projects", &project_body("  ", "https://example.com"))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    let list = body_json(ctx.get("/api/projects").await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let ctx = TestContext::new().await;
    ctx.setup_admin().await;
    let created = create_project(&ctx, "Hub").await;
    let id = created["id"].as_str().unwrap();

    let resp = ctx
        .put(
            &format!("/api/admin/projects/{id}"),
            &project_body("Hub v2", "https://example.org"),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Hub v2");
    assert_eq!(updated["link"], "https://example.org");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].as_i64().unwrap() >= created["updatedAt"].as_i64().unwrap());

    let resp = ctx
        .put(
            "/api/admin/projects/project-404",
            &project_body("Ghost", "https://example.com"),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_project() {
    let ctx = TestContext::new().await;
    ctx.setup_admin().await;
    let keep = create_project(&ctx, "Keep").await;
    let drop = create_project(&ctx, "Drop").await;
    let drop_id = drop["id"].as_str().unwrap();

    let resp = ctx.delete(&format!("/api/admin/projects/{drop_id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "success": true }));

    let list = body_json(ctx.get("/api/projects").await).await;
    assert_eq!(list, json!([keep]));

    let resp = ctx.delete(&format!("/api/admin/projects/{drop_id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_corrupt_document_reads_as_empty() {
    let ctx = TestContext::new().await;
    std::fs::create_dir_all(ctx.data_dir()).unwrap();
    std::fs::write(ctx.data_dir().join("projects.json"), "{ not json").unwrap();

    let list = body_json(ctx.get("/api/projects").await).await;
    assert_eq!(list, json!([]));

    // The next write replaces the unreadable document
    ctx.setup_admin().await;
    create_project(&ctx, "Fresh").await;
    let list = body_json(ctx.get("/api/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
