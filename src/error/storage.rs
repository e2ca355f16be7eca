use thiserror::Error;

/// Errors from the object storage REST API.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Transport-level failure before a response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The storage API answered with a non-success status.
    ///
    /// Carries the structured error body the API returns
    /// (`{statusCode, error, message}`).
    #[error("Storage API error ({status}) {code}: {message}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Error code from the response body, e.g. `Duplicate`
        code: String,
        /// Human-readable message from the response body
        message: String,
    },
}

impl StorageError {
    /// Whether this error means the resource already exists.
    ///
    /// Bucket creation at startup tolerates exactly this case.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "Duplicate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_detected() {
        let err = StorageError::Api {
            status: 409,
            code: "Duplicate".to_string(),
            message: "The resource already exists".to_string(),
        };
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_other_api_error_not_duplicate() {
        let err = StorageError::Api {
            status: 403,
            code: "InvalidJWT".to_string(),
            message: "jwt malformed".to_string(),
        };
        assert!(!err.is_duplicate());
    }
}
