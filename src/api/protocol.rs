//! Wire types for search requests and responses.
//!
//! Mirrors the backend's JSON contract: `POST /search` takes a
//! `SearchRequest` body and answers with a `SearchResponse` on success
//! or an `ErrorBody` with a non-2xx status on failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// A named search-mode tag sent to the backend to bias search behavior.
///
/// The set is closed: unknown preset names are rejected at the boundary
/// (`FromStr`) instead of being forwarded blindly, so the UI only ever
/// holds a valid variant. Serialized as a lowercase string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Unrestricted web search
    #[default]
    General,
    /// TikTok videos
    Tiktok,
    /// Twitter/X posts
    Twitter,
    /// Wikipedia articles
    Wikipedia,
    /// Academic papers
    Papers,
    /// News articles
    News,
    /// GitHub repositories
    Github,
}

impl Preset {
    /// All presets, in selector display order.
    pub const ALL: &'static [Preset] = &[
        Preset::General,
        Preset::Tiktok,
        Preset::Twitter,
        Preset::Wikipedia,
        Preset::Papers,
        Preset::News,
        Preset::Github,
    ];

    /// Wire name as sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::General => "general",
            Preset::Tiktok => "tiktok",
            Preset::Twitter => "twitter",
            Preset::Wikipedia => "wikipedia",
            Preset::Papers => "papers",
            Preset::News => "news",
            Preset::Github => "github",
        }
    }

    /// Human-readable label for the preset selector.
    pub fn label(self) -> &'static str {
        match self {
            Preset::General => "General",
            Preset::Tiktok => "TikTok",
            Preset::Twitter => "Twitter / X",
            Preset::Wikipedia => "Wikipedia",
            Preset::Papers => "Papers",
            Preset::News => "News",
            Preset::Github => "GitHub",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Preset::General),
            "tiktok" => Ok(Preset::Tiktok),
            "twitter" => Ok(Preset::Twitter),
            "wikipedia" => Ok(Preset::Wikipedia),
            "papers" => Ok(Preset::Papers),
            "news" => Ok(Preset::News),
            "github" => Ok(Preset::Github),
            other => Err(SearchError::Preset(other.to_string())),
        }
    }
}

/// Search request from UI to backend. Built fresh per submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchRequest {
    /// Search query string (non-empty, already trimmed)
    pub query: String,
    /// Active search preset
    pub preset: Preset,
}

/// Search response from the backend.
///
/// Deserialization is lenient: any missing field takes its default so a
/// sparse payload parses instead of erroring. A payload whose `success`
/// flag is false is rejected by the client after parsing.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchResponse {
    /// Whether the backend considers the search successful
    pub success: bool,
    /// The query echoed back, as the backend saw it
    pub query: String,
    /// The preset the backend applied (echoed as a plain string)
    pub preset: String,
    /// Total number of matches
    pub total: usize,
    /// Matching results, in backend relevance order
    pub results: Vec<SearchResult>,
    /// Backend failure message, if any
    pub error: Option<String>,
}

/// A single search result returned from the backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResult {
    /// Result URL
    pub url: String,
    /// Result title
    pub title: String,
    /// Author, when the backend could attribute one
    pub author: Option<String>,
    /// Publication date as an ISO-8601 string
    pub published_date: Option<String>,
    /// Relevance score in [0, 1]
    pub score: Option<f64>,
}

/// Body shape of a non-2xx backend response.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_serialization() {
        let request = SearchRequest {
            query: "rust borrow checker".to_string(),
            preset: Preset::News,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""preset":"news""#));

        let parsed: SearchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.query, "rust borrow checker");
        assert_eq!(parsed.preset, Preset::News);
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "success": true,
            "query": "rust",
            "preset": "general",
            "total": 2,
            "results": [
                {"url": "https://a", "title": "A"},
                {"url": "https://b", "title": "B", "score": 0.873}
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].title, "A");
        assert!(parsed.results[0].author.is_none());
        assert_eq!(parsed.results[1].score, Some(0.873));
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_search_response_missing_fields_default() {
        // Backend bug or truncated payload should still parse
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.total, 0);
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn test_search_result_optional_metadata() {
        let json = r#"{
            "url": "https://example.com/post",
            "title": "Example",
            "author": "Jo Bloggs",
            "published_date": "2024-01-05",
            "score": 0.5
        }"#;

        let parsed: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.author.as_deref(), Some("Jo Bloggs"));
        assert_eq!(parsed.published_date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_preset_round_trip() {
        for &preset in Preset::ALL {
            let parsed: Preset = preset.as_str().parse().unwrap();
            assert_eq!(parsed, preset);

            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.as_str()));
        }
    }

    #[test]
    fn test_preset_rejects_unknown() {
        assert!("bluesky".parse::<Preset>().is_err());
        assert!("".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_parse_is_case_insensitive() {
        assert_eq!("News".parse::<Preset>().unwrap(), Preset::News);
        assert_eq!("  GITHUB ".parse::<Preset>().unwrap(), Preset::Github);
    }

    #[test]
    fn test_error_body_parsing() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("rate limited"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}
