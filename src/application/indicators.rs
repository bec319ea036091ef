//! Derives the model's feature vector from a raw price series.
//!
//! Uses the same formulas as the prediction backend's `/current-data`:
//! - 7 and 30 period simple moving averages
//! - RSI from the 14-period simple mean of gains over losses
//! - sample standard deviation (n - 1) of the last 7 prices as volatility
//! - the 1 and 7 step lagged prices

use crate::domain::features::{FeatureVector, RSI_RANGE};
use ta::Next;
use ta::indicators::{SimpleMovingAverage, StandardDeviation};

pub const SMA_SHORT_PERIOD: usize = 7;
pub const SMA_LONG_PERIOD: usize = 30;
pub const RSI_PERIOD: usize = 14;
pub const VOLATILITY_PERIOD: usize = 7;

/// Minimum number of prices needed before every indicator is warmed up.
pub const MIN_SAMPLES: usize = SMA_LONG_PERIOD;

pub struct IndicatorEngine {
    sma_short: SimpleMovingAverage,
    sma_long: SimpleMovingAverage,
    avg_gain: SimpleMovingAverage,
    avg_loss: SimpleMovingAverage,
    volatility: StandardDeviation,
}

impl IndicatorEngine {
    pub fn new() -> Option<Self> {
        Some(Self {
            sma_short: SimpleMovingAverage::new(SMA_SHORT_PERIOD).ok()?,
            sma_long: SimpleMovingAverage::new(SMA_LONG_PERIOD).ok()?,
            avg_gain: SimpleMovingAverage::new(RSI_PERIOD).ok()?,
            avg_loss: SimpleMovingAverage::new(RSI_PERIOD).ok()?,
            volatility: StandardDeviation::new(VOLATILITY_PERIOD).ok()?,
        })
    }

    /// Feature vector for the last element of `prices` (chronological order).
    ///
    /// `None` until [`MIN_SAMPLES`] prices are available.
    pub fn derive(mut self, prices: &[f64]) -> Option<FeatureVector> {
        if prices.len() < MIN_SAMPLES {
            return None;
        }

        let mut features = FeatureVector::default();
        let (mut avg_gain, mut avg_loss) = (0.0, 0.0);
        let mut previous: Option<f64> = None;
        for &price in prices {
            features.sma_7 = self.sma_short.next(price);
            features.sma_30 = self.sma_long.next(price);
            features.volatility = self.volatility.next(price);

            if let Some(prev) = previous {
                let delta = price - prev;
                avg_gain = self.avg_gain.next(delta.max(0.0));
                avg_loss = self.avg_loss.next((-delta).max(0.0));
            }
            previous = Some(price);
        }

        let n = prices.len();
        features.price_lag_1 = prices[n - 2];
        features.price_lag_7 = prices[n - 8];
        features.rsi = rsi_from_averages(avg_gain, avg_loss);
        features.volatility *= sample_correction(VOLATILITY_PERIOD);

        Some(features)
    }
}

/// `100 - 100 / (1 + gain / loss)`. No loss gives 100, a flat window gives 50.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rsi = if avg_loss <= 0.0 {
        if avg_gain <= 0.0 { 50.0 } else { 100.0 }
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    };
    rsi.clamp(*RSI_RANGE.start(), *RSI_RANGE.end())
}

/// Turns ta's population deviation into the sample (n - 1) deviation.
fn sample_correction(period: usize) -> f64 {
    let n = period as f64;
    (n / (n - 1.0)).sqrt()
}

pub fn derive_features(prices: &[f64]) -> Option<FeatureVector> {
    IndicatorEngine::new()?.derive(prices)
}
