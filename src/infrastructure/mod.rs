pub mod core;
pub mod factory;
pub mod mock;
pub mod observability;
pub mod predictor_client;

pub use factory::ServiceFactory;
pub use mock::MockMarketDataSource;
pub use predictor_client::HttpPredictionClient;
