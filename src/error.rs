//! Error types for the weathersync service

use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single location lookup
///
/// Every variant is contained at the per-location boundary: the location is
/// logged and skipped, and nothing propagates to the HTTP response.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network-transport failure reaching the upstream service
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success HTTP status
    #[error("upstream returned {status} for {url}")]
    UpstreamStatus { status: StatusCode, url: String },

    /// Expected JSON field missing or of an unexpected shape
    #[error("unexpected response shape: {message}")]
    DataShape { message: String },
}

impl SyncError {
    /// Create an error for a non-success upstream status
    pub fn upstream_status<S: Into<String>>(status: StatusCode, url: S) -> Self {
        Self::UpstreamStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a new data shape error
    pub fn data_shape<S: Into<String>>(message: S) -> Self {
        Self::DataShape {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataShape {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let status_err = SyncError::upstream_status(StatusCode::INTERNAL_SERVER_ERROR, "http://x");
        assert!(matches!(status_err, SyncError::UpstreamStatus { .. }));

        let shape_err = SyncError::data_shape("missing properties.forecast");
        assert!(matches!(shape_err, SyncError::DataShape { .. }));
    }

    #[test]
    fn test_error_messages_name_the_detail() {
        let status_err =
            SyncError::upstream_status(StatusCode::NOT_FOUND, "https://upstream/points/1,2");
        assert!(status_err.to_string().contains("404"));
        assert!(status_err.to_string().contains("https://upstream/points/1,2"));

        let shape_err = SyncError::data_shape("forecast contained no periods");
        assert!(shape_err.to_string().contains("no periods"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let sync_err: SyncError = json_err.into();
        assert!(matches!(sync_err, SyncError::DataShape { .. }));
    }
}
