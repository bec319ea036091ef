use crate::application::simulator::PriceTick;
use crate::config::PredictFailurePolicy;
use crate::domain::errors::PredictorError;
use crate::domain::features::{FeatureField, FeatureVector, MarketSnapshot};
use crate::domain::forecast::{ForecastPoint, build_forecast};
use crate::domain::price_history::{LiveHistory, PricePoint, Trend};
use crate::domain::projection::Projection;
use tracing::{info, warn};

/// Price used when the initial market snapshot cannot be fetched.
pub const FALLBACK_PRICE: f64 = 43_250.75;
/// Multiplier applied to the current price when `/predict` fails.
pub const APPROXIMATE_PREDICTION_FACTOR: f64 = 1.02;

/// Single owner of all mutable dashboard state.
///
/// Views read from it and report user intent back; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub features: FeatureVector,
    pub prediction: Option<f64>,
    pub current_price: f64,
    pub is_live: bool,
    pub trend: Trend,
    pub investment: f64,
    pub live_history: LiveHistory,
    pub forecast: Vec<ForecastPoint>,
    /// User-facing message raised by a failed prediction (alert policy)
    pub alert: Option<String>,
    pub loading_snapshot: bool,
    pub pending_predictions: usize,
    failure_policy: PredictFailurePolicy,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(LiveHistory::default(), 1000.0, PredictFailurePolicy::Approximate)
    }
}

impl DashboardState {
    pub fn new(
        live_history: LiveHistory,
        investment: f64,
        failure_policy: PredictFailurePolicy,
    ) -> Self {
        Self {
            features: FeatureVector::default(),
            prediction: None,
            current_price: 0.0,
            is_live: false,
            trend: Trend::Up,
            investment,
            live_history,
            forecast: Vec::new(),
            alert: None,
            loading_snapshot: false,
            pending_predictions: 0,
            failure_policy,
        }
    }

    pub fn failure_policy(&self) -> PredictFailurePolicy {
        self.failure_policy
    }

    pub fn projection(&self) -> Projection {
        Projection::compute(self.prediction, self.current_price, self.investment)
    }

    pub fn is_predicting(&self) -> bool {
        self.pending_predictions > 0
    }

    // --- Market data ---

    /// Adopt a fresh snapshot and seed the chart with four synthetic points.
    pub fn load_snapshot(&mut self, snapshot: MarketSnapshot) {
        let f = snapshot.features;
        self.features = f;
        self.current_price = snapshot.current_price;
        self.live_history.seed([
            PricePoint::new("10:00", f.price_lag_7, 1200),
            PricePoint::new("12:00", (f.price_lag_7 + f.price_lag_1) / 2.0, 2100),
            PricePoint::new("14:00", f.price_lag_1, 1800),
            PricePoint::new("Now", snapshot.current_price, 3200),
        ]);
        self.loading_snapshot = false;
        info!("Dashboard seeded at {:.2}", self.current_price);
    }

    /// Initial-fetch failure path: hardcoded price and a single history point.
    pub fn load_fallback(&mut self) {
        self.current_price = FALLBACK_PRICE;
        self.live_history.seed([PricePoint::new("Now", FALLBACK_PRICE, 0)]);
        self.loading_snapshot = false;
        warn!("Using fallback price {:.2}", FALLBACK_PRICE);
    }

    pub fn apply_snapshot_result(&mut self, result: Result<MarketSnapshot, PredictorError>) {
        match result {
            Ok(snapshot) => self.load_snapshot(snapshot),
            Err(e) => {
                warn!("Failed to load market snapshot: {}", e);
                self.load_fallback();
            }
        }
    }

    // --- User edits ---

    /// Returns `false` when the value was rejected (not finite).
    pub fn set_feature(&mut self, field: FeatureField, value: f64) -> bool {
        self.features.set(field, value)
    }

    pub fn set_investment(&mut self, investment: f64) {
        if investment.is_finite() {
            self.investment = investment;
        }
    }

    pub fn set_live(&mut self, live: bool) {
        if self.is_live != live {
            info!("Live feed {}", if live { "started" } else { "paused" });
        }
        self.is_live = live;
    }

    pub fn toggle_live(&mut self) {
        self.set_live(!self.is_live);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // --- Simulation ---

    pub fn apply_tick(&mut self, tick: PriceTick) {
        self.trend = tick.trend;
        self.current_price = tick.price;
        self.live_history.push(tick.point);
    }

    // --- Prediction ---

    /// Feature vector sent to the backend: the live price stands in for `price_lag_1`.
    pub fn prediction_input(&self) -> FeatureVector {
        self.features.with_price_lag_1(self.current_price)
    }

    /// Mark a request as in flight and return its payload.
    pub fn begin_prediction(&mut self) -> FeatureVector {
        self.pending_predictions += 1;
        self.prediction_input()
    }

    pub fn apply_prediction(&mut self, predicted_price: f64) {
        self.prediction = Some(predicted_price);
        self.forecast = build_forecast(&self.live_history, predicted_price);
    }

    pub fn apply_prediction_failure(&mut self, error: &PredictorError) {
        match self.failure_policy {
            PredictFailurePolicy::Approximate => {
                let approximate = self.current_price * APPROXIMATE_PREDICTION_FACTOR;
                warn!(
                    "Prediction failed ({}), substituting approximate value {:.2}",
                    error, approximate
                );
                self.apply_prediction(approximate);
            }
            PredictFailurePolicy::Alert => {
                warn!("Prediction failed: {}", error);
                self.alert = Some(format!("Prediction service unavailable: {}", error));
            }
        }
    }

    pub fn apply_prediction_result(&mut self, result: Result<f64, PredictorError>) {
        self.pending_predictions = self.pending_predictions.saturating_sub(1);
        match result {
            Ok(price) => self.apply_prediction(price),
            Err(e) => self.apply_prediction_failure(&e),
        }
    }
}
