//! Integration tests for Projects Hub.
//!
//! Each test spawns the real router on an ephemeral local port, backed by a
//! fresh temporary data directory, and talks to it over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p projects-hub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_setup_login` - Setup, login, logout and session handling
//! - `projects_api` - Public listing and authenticated project management

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::path::PathBuf;

use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;

use projects_hub_server::{AppState, HubConfig, build_router};

/// Body served for client-side routes.
pub const INDEX_HTML: &str = "<!doctype html><title>Projects Hub</title>";

/// A running server plus a cookie-keeping client.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    data_dir: TempDir,
}

impl TestContext {
    /// Start a server on `127.0.0.1:0` with an empty data directory.
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");
        let public_dir = data_dir.path().join("public");
        std::fs::create_dir_all(&public_dir).expect("Failed to create public dir");
        std::fs::write(public_dir.join("index.html"), INDEX_HTML).expect("Failed to write index");

        let config = HubConfig {
            data_dir: data_dir.path().join("data"),
            public_dir,
            ..HubConfig::default()
        };
        let app = build_router(AppState::new(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            client: new_client(),
            base_url: format!("http://{addr}"),
            data_dir,
        }
    }

    /// Directory holding `admin.json` and `projects.json`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.path().join("data")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A second client with its own (empty) cookie jar.
    #[must_use]
    pub fn anonymous_client(&self) -> Client {
        new_client()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.expect("GET failed")
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST failed")
    }

    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT failed")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE failed")
    }

    /// Run first-time setup as `admin` / `secret123`, leaving the client logged in.
    pub async fn setup_admin(&self) {
        let resp = self
            .post(
                "/api/admin/setup",
                &json!({
                    "username": "admin",
                    "email": "admin@example.com",
                    "password": "secret123",
                }),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

/// Build a project payload.
#[must_use]
pub fn project_body(name: &str, link: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "icon": "code",
        "link": link,
    })
}

/// Read a JSON body.
pub async fn body_json(resp: Response) -> Value {
    resp.json().await.expect("Response body is not JSON")
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
