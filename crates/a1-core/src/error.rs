use thiserror::Error;

/// Application-wide error types for the A1 site.
///
/// `Clone` so a single failed upstream request can be handed to every
/// caller that was waiting on the same de-duplicated fetch.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// HTTP request could not be built or its body could not be read.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The CMS answered with a non-2xx status.
    #[error("CMS request failed: {endpoint} (HTTP {status_code})")]
    Status { status_code: u16, endpoint: String },

    /// The fetch succeeded but an expected nested field was missing.
    #[error("Data absent: {0}")]
    DataAbsent(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A lead submission failed local validation.
    #[error("Invalid lead: {0}")]
    InvalidLead(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl AppError {
    /// Returns true if the error means "there is nothing at this address"
    /// rather than "the CMS is unreachable".
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Status { status_code, .. } => *status_code == 404,
            AppError::DataAbsent(_) => true,
            _ => false,
        }
    }

    /// Returns true for transport-level failures (the CMS could not be reached
    /// or did not answer in time).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::NetworkError(_) | AppError::Timeout(_) | AppError::HttpError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_errors() {
        assert!(
            AppError::Status {
                status_code: 404,
                endpoint: "/pages/slug/missing".into(),
            }
            .is_not_found()
        );
        assert!(AppError::DataAbsent("data.result".into()).is_not_found());
        assert!(
            !AppError::Status {
                status_code: 500,
                endpoint: "/menus".into(),
            }
            .is_not_found()
        );
        assert!(!AppError::Timeout(30).is_not_found());
    }

    #[test]
    fn test_transport_errors() {
        assert!(AppError::NetworkError("refused".into()).is_transport());
        assert!(AppError::Timeout(5).is_transport());
        assert!(!AppError::InvalidLead("email".into()).is_transport());
    }

    #[test]
    fn test_status_message_names_endpoint() {
        let err = AppError::Status {
            status_code: 502,
            endpoint: "/website-settings".into(),
        };
        assert_eq!(
            err.to_string(),
            "CMS request failed: /website-settings (HTTP 502)"
        );
    }

    #[test]
    fn test_serde_error_converts() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
