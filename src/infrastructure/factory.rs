use crate::config::{Config, MarketDataSourceKind};
use crate::domain::errors::PredictorError;
use crate::domain::ports::{MarketDataSource, Predictor};
use crate::infrastructure::mock::MockMarketDataSource;
use crate::infrastructure::predictor_client::HttpPredictionClient;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_services(
        config: &Config,
    ) -> Result<(Arc<dyn MarketDataSource>, Arc<dyn Predictor>), PredictorError> {
        let http = Arc::new(HttpPredictionClient::from_config(&config.predictor)?);
        info!("Prediction backend: {}", http.predict_url());

        let source: Arc<dyn MarketDataSource> = match config.dashboard.market_data_source {
            MarketDataSourceKind::Mock => {
                info!("Market data source: mock snapshot");
                Arc::new(MockMarketDataSource::new())
            }
            MarketDataSourceKind::Remote => {
                info!("Market data source: {}", http.current_data_url());
                http.clone()
            }
        };

        let predictor: Arc<dyn Predictor> = http;
        Ok((source, predictor))
    }
}
