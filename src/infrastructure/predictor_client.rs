use crate::config::PredictorEnvConfig;
use crate::domain::errors::PredictorError;
use crate::domain::features::{FeatureVector, MarketSnapshot};
use crate::domain::ports::{MarketDataSource, Predictor};
use crate::infrastructure::core::HttpClientFactory;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

const CURRENT_DATA_ENDPOINT: &str = "/current-data";
const PREDICT_ENDPOINT: &str = "/predict";

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_price: f64,
}

/// HTTP client for the prediction backend.
///
/// Serves both `GET /current-data` and `POST /predict` relative to one base URL.
pub struct HttpPredictionClient {
    client: ClientWithMiddleware,
    current_data_url: Url,
    predict_url: Url,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str, client: ClientWithMiddleware) -> Result<Self, PredictorError> {
        let invalid = |reason: String| PredictorError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        // Keep any path prefix ("/api") when joining endpoint names
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let current_data_url = base
            .join(CURRENT_DATA_ENDPOINT.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        let predict_url = base
            .join(PREDICT_ENDPOINT.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            current_data_url,
            predict_url,
        })
    }

    pub fn from_config(config: &PredictorEnvConfig) -> Result<Self, PredictorError> {
        Self::new(&config.base_url, HttpClientFactory::from_config(config))
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    pub fn current_data_url(&self) -> &Url {
        &self.current_data_url
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, PredictorError> {
        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PredictorError::Decode {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl MarketDataSource for HttpPredictionClient {
    async fn current_snapshot(&self) -> Result<MarketSnapshot, PredictorError> {
        debug!("Fetching market snapshot from {}", self.current_data_url);

        let response = self
            .client
            .get(self.current_data_url.clone())
            .send()
            .await
            .map_err(|e| PredictorError::Request {
                endpoint: CURRENT_DATA_ENDPOINT.to_string(),
                reason: e.to_string(),
            })?;

        let snapshot: MarketSnapshot = Self::read_json(CURRENT_DATA_ENDPOINT, response).await?;
        info!(
            "Fetched market snapshot: price {:.2}, RSI {:.2}",
            snapshot.current_price, snapshot.features.rsi
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl Predictor for HttpPredictionClient {
    async fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError> {
        let body = serde_json::to_vec(features).map_err(|e| PredictorError::Encode {
            endpoint: PREDICT_ENDPOINT.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Requesting prediction from {}: {:?}", self.predict_url, features);

        let response = self
            .client
            .post(self.predict_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PredictorError::Request {
                endpoint: PREDICT_ENDPOINT.to_string(),
                reason: e.to_string(),
            })?;

        let payload: PredictResponse = Self::read_json(PREDICT_ENDPOINT, response).await?;
        if !payload.predicted_price.is_finite() {
            return Err(PredictorError::Decode {
                endpoint: PREDICT_ENDPOINT.to_string(),
                reason: "predicted_price is not finite".to_string(),
            });
        }

        info!("Predicted price: {:.2}", payload.predicted_price);
        Ok(payload.predicted_price)
    }
}
