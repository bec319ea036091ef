use crate::config::PredictorEnvConfig;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates a new HTTP client with retry middleware
    pub fn create_client(timeout: Duration, max_retries: u32) -> ClientWithMiddleware {
        // Retry policy:
        // - Exponential backoff on transient errors (5xx, connect failures)
        // - Zero retries means a failed call surfaces immediately
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let client = Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }

    pub fn from_config(config: &PredictorEnvConfig) -> ClientWithMiddleware {
        Self::create_client(
            Duration::from_secs(config.timeout_secs.max(1)),
            config.max_retries,
        )
    }
}
