//! Error types for the content hub client

use thiserror::Error;

/// Result type for content hub client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the content hub API
#[derive(Debug, Error)]
pub enum Error {
    /// API returned a non-success status code
    #[error("API error ({status}): {message}")]
    Api {
        /// Raw response body returned by the server
        message: String,
        /// HTTP status code
        status: u16,
    },

    /// HTTP transport failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = Error::Api {
            message: "Not Found".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", error), "API error (404): Not Found");
    }

    #[test]
    fn test_url_error_display() {
        let parse_err = url::Url::parse("not a url").expect_err("should not parse");
        let error = Error::Url(parse_err);
        assert!(format!("{}", error).starts_with("Invalid URL:"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let result: std::result::Result<String, _> = serde_json::from_str("not valid json");
        let json_error = result.expect_err("Invalid JSON should produce an error");
        let error: Error = json_error.into();

        match error {
            Error::Json(e) => {
                assert!(
                    e.to_string().contains("expected"),
                    "Error message should describe the JSON error"
                );
            }
            _ => panic!("Expected Error::Json"),
        }
    }
}
