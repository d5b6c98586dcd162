//! Error types for doodle generation.

use std::time::Duration;

/// Maximum length of an API error body embedded in an error message.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Errors that can occur while generating doodles.
#[derive(Debug, thiserror::Error)]
pub enum DoodleError {
    /// API key missing or rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// The response carried no image data.
    ///
    /// `text` holds whatever explanation the service returned instead.
    #[error("no image generated")]
    NoImage { text: Option<String> },

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 image data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving a file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for doodle generation operations.
pub type Result<T> = std::result::Result<T, DoodleError>;

/// Parses the `Retry-After` header as whole seconds.
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Trims an API error body down to something fit for a single log line.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_ERROR_BODY_LEN {
        return text.to_string();
    }
    let truncated: String = text.chars().take(MAX_ERROR_BODY_LEN).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};

    #[test]
    fn test_error_display() {
        let err = DoodleError::Api {
            status: 404,
            message: "Not found".into(),
        };
        assert_eq!(err.to_string(), "API error: 404 - Not found");

        let err = DoodleError::Auth("GEMINI_API_KEY not set".into());
        assert_eq!(
            err.to_string(),
            "authentication failed: GEMINI_API_KEY not set"
        );

        let err = DoodleError::NoImage { text: None };
        assert_eq!(err.to_string(), "no image generated");
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
        assert_eq!(parse_retry_after(&headers), Some(30));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_sanitize_error_message() {
        assert_eq!(sanitize_error_message("  short  "), "short");

        let long = "x".repeat(MAX_ERROR_BODY_LEN + 10);
        let sanitized = sanitize_error_message(&long);
        assert!(sanitized.ends_with("..."));
        assert_eq!(sanitized.len(), MAX_ERROR_BODY_LEN + 3);
    }
}
