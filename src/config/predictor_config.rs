//! Prediction backend configuration parsing from environment variables.

use super::{EnvLookup, parse_or};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Prediction backend environment configuration
#[derive(Debug, Clone)]
pub struct PredictorEnvConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for PredictorEnvConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_retries: 0,
        }
    }
}

impl PredictorEnvConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("PREDICTOR_BASE_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            timeout_secs: parse_or(lookup, "PREDICTOR_TIMEOUT_SECS", defaults.timeout_secs),
            max_retries: parse_or(lookup, "PREDICTOR_MAX_RETRIES", defaults.max_retries),
        }
    }
}
