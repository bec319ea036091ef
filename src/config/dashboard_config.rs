//! Dashboard behaviour configuration parsing from environment variables.

use super::{EnvLookup, parse_or};
use anyhow::Result;
use std::str::FromStr;

/// Where the initial indicators and price come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketDataSourceKind {
    /// Fixed snapshot bundled with the app
    Mock,
    /// `GET /current-data` on the prediction backend
    Remote,
}

impl FromStr for MarketDataSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "remote" => Ok(Self::Remote),
            _ => anyhow::bail!(
                "Invalid MARKET_DATA_SOURCE: {}. Must be 'mock' or 'remote'",
                s
            ),
        }
    }
}

/// What the dashboard does when `POST /predict` fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictFailurePolicy {
    /// Substitute `current_price * 1.02` as if the backend had answered
    Approximate,
    /// Keep the previous prediction and show an alert
    Alert,
}

impl FromStr for PredictFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approximate" => Ok(Self::Approximate),
            "alert" => Ok(Self::Alert),
            _ => anyhow::bail!(
                "Invalid PREDICT_FAILURE_POLICY: {}. Must be 'approximate' or 'alert'",
                s
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardEnvConfig {
    pub market_data_source: MarketDataSourceKind,
    pub predict_failure_policy: PredictFailurePolicy,
    pub initial_investment: f64,
}

impl Default for DashboardEnvConfig {
    fn default() -> Self {
        Self {
            market_data_source: MarketDataSourceKind::Mock,
            predict_failure_policy: PredictFailurePolicy::Approximate,
            initial_investment: 1000.0,
        }
    }
}

impl DashboardEnvConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();

        let market_data_source = match lookup("MARKET_DATA_SOURCE") {
            Some(v) => MarketDataSourceKind::from_str(&v)?,
            None => defaults.market_data_source,
        };

        let predict_failure_policy = match lookup("PREDICT_FAILURE_POLICY") {
            Some(v) => PredictFailurePolicy::from_str(&v)?,
            None => defaults.predict_failure_policy,
        };

        let initial_investment =
            parse_or(lookup, "INITIAL_INVESTMENT", defaults.initial_investment);

        Ok(Self {
            market_data_source,
            predict_failure_policy,
            initial_investment: if initial_investment.is_finite() {
                initial_investment
            } else {
                defaults.initial_investment
            },
        })
    }
}
