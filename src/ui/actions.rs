//! Actions that can be performed on a search result:
//! - Open the result URL in the default browser
//! - Copy the result URL to the clipboard

use crate::{Result, SearchError};

/// Open a result URL in the system's default browser.
///
/// # Errors
/// Returns error if no browser could be launched.
pub fn open_url(url: &str) -> Result<()> {
    tracing::info!(url, "opening result link");

    opener::open_browser(url)
        .map_err(|e| SearchError::Action(format!("Failed to open link: {}", e)))
}

/// Copy a result URL to the system clipboard.
///
/// # Errors
/// Returns error if clipboard access fails.
pub fn copy_url(url: &str) -> Result<()> {
    tracing::info!(url, "copying result link to clipboard");

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| SearchError::Action(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(url.to_string())
        .map_err(|e| SearchError::Action(format!("Failed to set clipboard text: {}", e)))
}

// Note: both actions need a desktop session (browser, clipboard manager),
// so they are exercised manually rather than in unit tests.
