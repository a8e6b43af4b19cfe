//! HTTP client for the search backend.
//!
//! Issues one `POST /search` request per submission. The client is
//! stateless from the UI's point of view - it holds no session and every
//! search stands alone, which keeps error handling simple.

use crate::api::protocol::{ErrorBody, Preset, SearchRequest, SearchResponse};
use crate::{Result, SearchError};

/// Fallback message when a failed response carries no usable body.
const FALLBACK_ERROR: &str = "Search failed";

/// API client for sending search requests to the backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted,
/// so clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new API client against the given backend base URL.
    ///
    /// No connection is established until a search is performed. No
    /// client-side timeout is set; failures surface through the transport
    /// layer or an HTTP error status.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a search against the backend.
    ///
    /// # Errors
    /// - `SearchError::Network` if the request never completes.
    /// - `SearchError::Backend` with the backend's own message on a
    ///   non-2xx status, or a generic message when the payload is
    ///   malformed or flagged unsuccessful.
    pub async fn search(&self, query: &str, preset: Preset) -> Result<SearchResponse> {
        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        let request = SearchRequest {
            query: query.to_string(),
            preset,
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = extract_error_message(&body);
            tracing::warn!(%status, %message, "backend rejected search");
            return Err(SearchError::Backend(message));
        }

        let payload: SearchResponse = response.json().await?;
        if !payload.success {
            return Err(SearchError::Backend(
                "Invalid response from server".to_string(),
            ));
        }

        Ok(payload)
    }
}

/// Pull a failure message out of a non-2xx response body, falling back to
/// a generic message when the body is empty or not the expected shape.
fn extract_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
