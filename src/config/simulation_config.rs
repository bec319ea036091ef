use super::{EnvLookup, parse_or};
use crate::domain::price_history::DEFAULT_HISTORY_CAPACITY;
use chrono::format::{Item, StrftimeItems};

pub const DEFAULT_TIME_FORMAT: &str = "%M:%S";

#[derive(Debug, Clone)]
pub struct SimulationEnvConfig {
    pub tick_interval_ms: u64,
    pub step_amplitude: f64,
    pub history_capacity: usize,
    pub volume_min: u32,
    pub volume_span: u32,
    /// strftime pattern for live point labels
    pub time_format: String,
}

impl Default for SimulationEnvConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            step_amplitude: 80.0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            volume_min: 500,
            volume_span: 3000,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl SimulationEnvConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let defaults = Self::default();

        let tick_interval_ms =
            parse_or(lookup, "SIM_TICK_INTERVAL_MS", defaults.tick_interval_ms).max(1);

        let step_amplitude = parse_or(lookup, "SIM_STEP_AMPLITUDE", defaults.step_amplitude);
        let step_amplitude = if step_amplitude.is_finite() && step_amplitude >= 0.0 {
            step_amplitude
        } else {
            defaults.step_amplitude
        };

        let history_capacity =
            parse_or(lookup, "SIM_HISTORY_CAPACITY", defaults.history_capacity).max(1);

        let volume_min = parse_or(lookup, "SIM_VOLUME_MIN", defaults.volume_min);
        let volume_span = parse_or(lookup, "SIM_VOLUME_SPAN", defaults.volume_span).max(1);
        let volume_span = volume_span.min(u32::MAX - volume_min);

        let time_format = lookup("SIM_TIME_FORMAT")
            .filter(|f| is_valid_time_format(f))
            .unwrap_or(defaults.time_format);

        Self {
            tick_interval_ms,
            step_amplitude,
            history_capacity,
            volume_min,
            volume_span: volume_span.max(1),
            time_format,
        }
    }
}

/// Non-empty and free of unknown strftime specifiers.
pub fn is_valid_time_format(format: &str) -> bool {
    !format.trim().is_empty()
        && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
