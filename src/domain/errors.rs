use thiserror::Error;

/// Errors raised while talking to the prediction backend
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Invalid predictor base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to encode request for {endpoint}: {reason}")]
    Encode { endpoint: String, reason: String },

    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictor_error_formatting() {
        let error = PredictorError::Status {
            endpoint: "/predict".to_string(),
            status: 500,
        };

        let msg = error.to_string();
        assert!(msg.contains("/predict"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_decode_error_formatting() {
        let error = PredictorError::Decode {
            endpoint: "/current-data".to_string(),
            reason: "missing field `rsi`".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("/current-data"));
        assert!(msg.contains("missing field"));
    }
}
