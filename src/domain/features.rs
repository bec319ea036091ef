use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Bounds enforced by the RSI slider.
pub const RSI_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Bounds enforced by the volatility slider.
pub const VOLATILITY_RANGE: RangeInclusive<f64> = 0.0..=5000.0;

/// The six indicators sent to the prediction service.
///
/// Field names match the wire format of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub sma_7: f64,
    pub sma_30: f64,
    pub rsi: f64,
    pub price_lag_1: f64,
    pub price_lag_7: f64,
    pub volatility: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            sma_7: 0.0,
            sma_30: 0.0,
            rsi: 50.0,
            price_lag_1: 0.0,
            price_lag_7: 0.0,
            volatility: 0.0,
        }
    }
}

/// Addressable field of a [`FeatureVector`], used for manual edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    Sma7,
    Sma30,
    Rsi,
    PriceLag1,
    PriceLag7,
    Volatility,
}

impl FeatureField {
    pub const ALL: [FeatureField; 6] = [
        FeatureField::Sma7,
        FeatureField::Sma30,
        FeatureField::Rsi,
        FeatureField::PriceLag1,
        FeatureField::PriceLag7,
        FeatureField::Volatility,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Sma7 => "sma_7",
            Self::Sma30 => "sma_30",
            Self::Rsi => "rsi",
            Self::PriceLag1 => "price_lag_1",
            Self::PriceLag7 => "price_lag_7",
            Self::Volatility => "volatility",
        }
    }

    /// Human readable label shown next to the input widget
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sma7 => "Weekly Average",
            Self::Sma30 => "Monthly Average",
            Self::Rsi => "RSI (Momentum)",
            Self::PriceLag1 => "Yesterday Price",
            Self::PriceLag7 => "Price 7 Days Ago",
            Self::Volatility => "Volatility (Risk)",
        }
    }

    /// Widget bounds for the field, if it has any.
    pub fn bounds(&self) -> Option<RangeInclusive<f64>> {
        match self {
            Self::Rsi => Some(RSI_RANGE),
            Self::Volatility => Some(VOLATILITY_RANGE),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FeatureVector {
    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Sma7 => self.sma_7,
            FeatureField::Sma30 => self.sma_30,
            FeatureField::Rsi => self.rsi,
            FeatureField::PriceLag1 => self.price_lag_1,
            FeatureField::PriceLag7 => self.price_lag_7,
            FeatureField::Volatility => self.volatility,
        }
    }

    /// Overwrite a single field. Bounded fields are clamped to their widget range.
    ///
    /// Returns `false` and leaves the vector untouched when `value` is not finite.
    pub fn set(&mut self, field: FeatureField, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }

        let value = match field.bounds() {
            Some(range) => value.clamp(*range.start(), *range.end()),
            None => value,
        };

        let slot = match field {
            FeatureField::Sma7 => &mut self.sma_7,
            FeatureField::Sma30 => &mut self.sma_30,
            FeatureField::Rsi => &mut self.rsi,
            FeatureField::PriceLag1 => &mut self.price_lag_1,
            FeatureField::PriceLag7 => &mut self.price_lag_7,
            FeatureField::Volatility => &mut self.volatility,
        };
        *slot = value;
        true
    }

    /// Copy of the vector with `price_lag_1` replaced by `price`.
    pub fn with_price_lag_1(mut self, price: f64) -> Self {
        self.price_lag_1 = price;
        self
    }
}

/// Response of `GET /current-data`: indicators plus the latest price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(flatten)]
    pub features: FeatureVector,
    pub current_price: f64,
}
