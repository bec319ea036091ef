//! Profit/ROI projection and the signals derived from a prediction.

use std::fmt;

/// RSI above this level is overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI below this level is oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Projected outcome of holding `investment` until the predicted price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub profit: f64,
    pub roi_pct: f64,
}

impl Projection {
    pub const ZERO: Projection = Projection {
        profit: 0.0,
        roi_pct: 0.0,
    };

    /// Zero when there is no prediction or no usable current price.
    pub fn compute(prediction: Option<f64>, current_price: f64, investment: f64) -> Self {
        match prediction {
            Some(predicted) if predicted != 0.0 && current_price > 0.0 => {
                let change = (predicted - current_price) / current_price;
                Self {
                    profit: change * investment,
                    roi_pct: change * 100.0,
                }
            }
            _ => Self::ZERO,
        }
    }

    pub fn is_gain(&self) -> bool {
        self.profit >= 0.0
    }

    pub fn sign(&self) -> &'static str {
        if self.is_gain() { "+" } else { "" }
    }
}

/// Suggested action shown on the prediction card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    StrongBuy,
    PanicSell,
}

impl Signal {
    pub fn from_prediction(predicted: f64, current_price: f64) -> Self {
        if predicted > current_price {
            Self::StrongBuy
        } else {
            Self::PanicSell
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, Self::StrongBuy)
    }

    /// Wording of the expected move
    pub fn outlook(&self) -> &'static str {
        match self {
            Self::StrongBuy => "bullish recovery",
            Self::PanicSell => "bearish correction",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::PanicSell => write!(f, "PANIC SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            Self::Overbought
        } else if rsi < RSI_OVERSOLD {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::Overbought => Some("Caution: the market is overbought."),
            Self::Oversold => Some("Opportunity: the market is oversold."),
            Self::Neutral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_gain() {
        let p = Projection::compute(Some(44_000.0), 40_000.0, 1000.0);
        assert!((p.profit - 100.0).abs() < 1e-9);
        assert!((p.roi_pct - 10.0).abs() < 1e-9);
        assert!(p.is_gain());
        assert_eq!(p.sign(), "+");
    }

    #[test]
    fn test_projection_loss() {
        let p = Projection::compute(Some(38_000.0), 40_000.0, 2000.0);
        assert!((p.profit + 100.0).abs() < 1e-9);
        assert!((p.roi_pct + 5.0).abs() < 1e-9);
        assert!(!p.is_gain());
        assert_eq!(p.sign(), "");
    }

    #[test]
    fn test_projection_without_prediction_is_zero() {
        assert_eq!(Projection::compute(None, 40_000.0, 1000.0), Projection::ZERO);
        assert_eq!(Projection::compute(Some(0.0), 40_000.0, 1000.0), Projection::ZERO);
        assert_eq!(Projection::compute(Some(41_000.0), 0.0, 1000.0), Projection::ZERO);
        // Break-even counts as a gain for display purposes
        assert!(Projection::ZERO.is_gain());
    }

    #[test]
    fn test_signal() {
        assert_eq!(Signal::from_prediction(101.0, 100.0), Signal::StrongBuy);
        assert_eq!(Signal::from_prediction(100.0, 100.0), Signal::PanicSell);
        assert_eq!(Signal::StrongBuy.to_string(), "STRONG BUY");
        assert_eq!(Signal::PanicSell.outlook(), "bearish correction");
    }

    #[test]
    fn test_rsi_zones() {
        assert_eq!(RsiZone::from_rsi(70.0), RsiZone::Neutral);
        assert_eq!(RsiZone::from_rsi(70.1), RsiZone::Overbought);
        assert_eq!(RsiZone::from_rsi(29.9), RsiZone::Oversold);
        assert!(RsiZone::Neutral.note().is_none());
        assert!(RsiZone::Overbought.note().unwrap().contains("overbought"));
    }
}
