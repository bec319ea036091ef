use crate::domain::price_history::LiveHistory;
use serde::{Deserialize, Serialize};

/// Label of the synthetic point carrying the predicted price.
pub const SCENARIO_LABEL: &str = "SCENARIO";
/// Number of live points prepended to the scenario point.
pub const FORECAST_LOOKBACK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    History,
    Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub time: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

/// Stitch the newest live points and the predicted price into one series.
///
/// Uses up to [`FORECAST_LOOKBACK`] history points, followed by exactly one
/// [`SCENARIO_LABEL`] point.
pub fn build_forecast(history: &LiveHistory, predicted_price: f64) -> Vec<ForecastPoint> {
    history
        .last_n(FORECAST_LOOKBACK)
        .map(|p| ForecastPoint {
            time: p.time.clone(),
            price: p.price,
            kind: PointKind::History,
        })
        .chain(std::iter::once(ForecastPoint {
            time: SCENARIO_LABEL.to_string(),
            price: predicted_price,
            kind: PointKind::Prediction,
        }))
        .collect()
}
