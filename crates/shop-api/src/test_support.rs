//! Helpers shared by the crate's unit tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use shop_common::AppConfig;
use shop_core::Snowflake;
use shop_db::MemoryBrandRepository;
use tempfile::TempDir;

use crate::server::build_app_state;
use crate::state::AppState;

pub const BOUNDARY: &str = "shopzone-test-boundary";

pub struct TestApp {
    pub tmp: TempDir,
    pub repo: MemoryBrandRepository,
    pub state: AppState,
}

impl TestApp {
    pub fn token(&self, user_id: i64) -> String {
        self.state
            .jwt_service()
            .issue_access_token(Snowflake::new(user_id))
            .unwrap()
    }

    pub fn max_bytes(&self) -> u64 {
        self.state.upload_store().max_bytes()
    }

    /// Number of files in the upload directory
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.tmp.path().join("sellerBrand"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub fn test_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = AppConfig::local("postgresql://unused/shop", "test-secret");
    config.storage.upload_dir = tmp.path().join("sellerBrand");
    config.storage.max_file_size_mb = 1;
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;

    let repo = MemoryBrandRepository::new();
    let state = build_app_state(config, Arc::new(repo.clone())).unwrap();
    TestApp { tmp, repo, state }
}

/// Hand-built `multipart/form-data` body
#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str, token: Option<&str>) -> Request<Body> {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(self.buf)).unwrap()
    }
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
