use crate::domain::errors::PredictorError;
use crate::domain::features::{FeatureVector, MarketSnapshot};
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Latest indicators and price used to seed the dashboard
    async fn current_snapshot(&self) -> Result<MarketSnapshot, PredictorError>;
}

#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predicted price for the given feature vector
    async fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError>;
}
