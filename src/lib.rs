//! SearchPad - desktop client for a preset-based web search backend.
//!
//! This library provides the building blocks for the SearchPad UI binary:
//! the backend API client and wire types, configuration loading, and the
//! egui-based search interface.

pub mod api;
pub mod config;
pub mod ui;

use thiserror::Error;

/// SearchPad error types covering all failure modes.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failure reported by the search backend (non-2xx status or a
    /// payload with `success: false`). Displays as the backend's own
    /// message so it can be shown to the user verbatim.
    #[error("{0}")]
    Backend(String),

    /// Transport-level failure reaching the backend
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Unknown search preset name
    #[error("Unknown search preset: {0}")]
    Preset(String),

    /// Result action failure (browser launch, clipboard access)
    #[error("{0}")]
    Action(String),
}

/// Result type alias using SearchError
pub type Result<T> = std::result::Result<T, SearchError>;
