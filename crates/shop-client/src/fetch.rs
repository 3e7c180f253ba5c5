//! One-shot data fetch with observable state
//!
//! `use_fetch` issues a single GET and publishes its progress through a
//! `watch` channel. The state starts loading and settles exactly once.
//! There is no retry, no cache, and no cancellation: dropping the handle
//! leaves the request running and its result unobserved.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Failure of a fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The response body was not the expected JSON
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Human-readable message, empty when the server sent none
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Observable state of a fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> FetchState<T> {
    pub fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

/// Receiving side of a running fetch
#[derive(Debug, Clone)]
pub struct FetchHandle<T> {
    rx: watch::Receiver<FetchState<T>>,
}

impl<T: Clone> FetchHandle<T> {
    /// Snapshot of the current state
    pub fn state(&self) -> FetchState<T> {
        self.rx.borrow().clone()
    }

    /// Receiver notified when the state settles
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.rx.clone()
    }

    /// Wait until the fetch settles
    pub async fn settled(mut self) -> FetchState<T> {
        match self.rx.wait_for(FetchState::is_settled).await {
            Ok(state) => state.clone(),
            // Sender gone without settling: the task was aborted
            Err(_) => FetchState::failed(FetchError::Network("request aborted".to_string())),
        }
    }
}

/// Start a GET of `url`, optionally authenticated with a bearer token.
///
/// Must be called from within a tokio runtime.
pub fn use_fetch<T>(client: &Client, url: impl Into<String>, token: Option<&str>) -> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let url = url.into();
    let (tx, rx) = watch::channel(FetchState::loading());

    let mut request = client.get(&url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    tokio::spawn(async move {
        let state = match fetch_json(request).await {
            Ok(data) => {
                debug!(%url, "Fetch settled");
                FetchState::ready(data)
            }
            Err(e) => {
                warn!(%url, error = %e, "Fetch failed");
                FetchState::failed(e)
            }
        };
        tx.send_replace(state);
    });

    FetchHandle { rx }
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: server_message(body.as_ref(), status),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn server_message(body: Option<&serde_json::Value>, status: StatusCode) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || format!("Request failed with status code {}", status.as_u16()),
            ToString::to_string,
        )
}
