//! Configuration module for the dashboard.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Predictor backend, Simulation, and Dashboard behaviour.

mod dashboard_config;
mod predictor_config;
mod simulation_config;

pub use dashboard_config::{DashboardEnvConfig, MarketDataSourceKind, PredictFailurePolicy};
pub use predictor_config::{DEFAULT_BASE_URL, PredictorEnvConfig};
pub use simulation_config::SimulationEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Source of raw configuration values, keyed by environment variable name.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Parse `key` or fall back to `default` when it is unset or malformed.
pub(crate) fn parse_or<T: FromStr>(lookup: EnvLookup<'_>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub predictor: PredictorEnvConfig,
    pub simulation: SimulationEnvConfig,
    pub dashboard: DashboardEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let predictor = PredictorEnvConfig::from_lookup(lookup);
        let simulation = SimulationEnvConfig::from_lookup(lookup);
        let dashboard =
            DashboardEnvConfig::from_lookup(lookup).context("Failed to load dashboard config")?;

        Ok(Self {
            predictor,
            simulation,
            dashboard,
        })
    }
}
