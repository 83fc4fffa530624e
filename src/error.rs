use thiserror::Error;

/// Failure of a listing or detail call.
///
/// Every variant is a hard load error for the host; the variants only exist so
/// logs can tell a dead connection from a malformed payload.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Envelope or required sub-object absent
    #[error("Missing data: {0}")]
    MissingData(&'static str),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ProviderError::Http(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ProviderError::MissingData("post").to_string(),
            "Missing data: post"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ProviderError::from(err), ProviderError::Parse(_)));
    }
}
