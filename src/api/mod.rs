//! Backend API module for communication with the search service.
//!
//! The backend exposes a single `POST /search` endpoint taking a JSON
//! body of `{query, preset}` and returning a JSON result list. The UI
//! connects as a plain HTTP client.

pub mod client;
pub mod protocol;

pub use client::ApiClient;
pub use protocol::*;
