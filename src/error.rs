//! Error types for the WordPress API client.
//!
//! Every failure mode of a fetch is a distinct variant so callers can tell
//! a timed-out request apart from a non-2xx status or a response body that
//! does not match the expected shape.

use reqwest::StatusCode;

/// Error type covering the API client and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// The request failed at the transport level (DNS, connect, TLS).
    #[error("Request failed: {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid configuration was provided.
    #[error("Invalid config: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Classify a reqwest error for the given URL.
    ///
    /// Timeouts get their own variant; a body decode failure means the
    /// server sent something we could not parse.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            Self::Malformed {
                url: url.to_string(),
                source: err,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Result type alias using the client Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Timeout {
            url: "https://example.com/media".to_string(),
        };
        assert_eq!(err.to_string(), "Request timed out: https://example.com/media");

        let err = Error::Status {
            url: "https://example.com/posts/7".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 Not Found from https://example.com/posts/7"
        );

        let err = Error::config("per_page cannot be 0");
        assert_eq!(err.to_string(), "Invalid config: per_page cannot be 0");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
