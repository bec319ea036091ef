use crate::domain::errors::PredictorError;
use crate::domain::features::{FeatureVector, MarketSnapshot};
use crate::domain::ports::MarketDataSource;
use async_trait::async_trait;
use tracing::info;

/// Snapshot served when the dashboard runs without a market-data backend.
pub const MOCK_SNAPSHOT: MarketSnapshot = MarketSnapshot {
    features: FeatureVector {
        sma_7: 42_000.0,
        sma_30: 41_000.0,
        rsi: 55.43,
        price_lag_1: 43_100.0,
        price_lag_7: 42_500.0,
        volatility: 120.5,
    },
    current_price: 43_250.75,
};

#[derive(Debug, Clone)]
pub struct MockMarketDataSource {
    snapshot: MarketSnapshot,
}

impl MockMarketDataSource {
    pub fn new() -> Self {
        Self {
            snapshot: MOCK_SNAPSHOT,
        }
    }

    pub fn with_snapshot(snapshot: MarketSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Default for MockMarketDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for MockMarketDataSource {
    async fn current_snapshot(&self) -> Result<MarketSnapshot, PredictorError> {
        info!(
            "MockMarketDataSource: serving fixed snapshot at {:.2}",
            self.snapshot.current_price
        );
        Ok(self.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_serves_fixed_snapshot() {
        let source = MockMarketDataSource::new();
        let snapshot = tokio_test::block_on(source.current_snapshot()).unwrap();
        assert_eq!(snapshot, MOCK_SNAPSHOT);
        assert_eq!(snapshot.current_price, 43_250.75);
    }

    #[test]
    fn test_mock_with_custom_snapshot() {
        let custom = MarketSnapshot {
            features: FeatureVector::default(),
            current_price: 1.5,
        };
        let source = MockMarketDataSource::with_snapshot(custom);
        let snapshot = tokio_test::block_on(source.current_snapshot()).unwrap();
        assert_eq!(snapshot.current_price, 1.5);
    }
}
