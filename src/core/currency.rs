//! Currency conversion abstractions

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a single pair conversion as reported by the rate provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub base_code: String,
    pub target_code: String,
    pub conversion_rate: f64,
    pub conversion_result: f64,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    /// The API answered with `result: "error"`.
    #[error("API error: {error_type}")]
    Api { error_type: String },

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Request error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ConversionError {
    /// True for failures that happened before the API could give a business answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Network(_))
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn convert(
        &self,
        base_code: &str,
        target_code: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConversionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_grouping() {
        assert!(ConversionError::Status(503).is_transport());
        assert!(
            !ConversionError::Api {
                error_type: "invalid-key".to_string()
            }
            .is_transport()
        );
        assert!(!ConversionError::MalformedResponse("empty body".to_string()).is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::Api {
            error_type: "quota-reached".to_string(),
        };
        assert_eq!(err.to_string(), "API error: quota-reached");
        assert_eq!(ConversionError::Status(404).to_string(), "HTTP error: 404");
    }
}
