use crate::application::client::DashboardClient;
use crate::application::dashboard_state::DashboardState;
use crate::application::indicators::{self, MIN_SAMPLES};
use crate::application::simulator::{PriceSimulator, SimulatorSettings, TickSchedule};
use crate::application::worker::DashboardEvent;
use crate::config::Config;
use crate::domain::errors::PredictorError;
use crate::domain::price_history::LiveHistory;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Log lines kept for the log panel
pub const MAX_LOG_LINES: usize = 500;

/// Root of the dashboard: owns the state and turns user intent, timer ticks
/// and worker results into state updates.
pub struct DashboardApp {
    pub client: DashboardClient,
    pub state: DashboardState,
    pub simulator: PriceSimulator,
    pub schedule: TickSchedule,

    // UI State
    pub logs: Vec<String>,
    pub show_logs: bool,
}

impl DashboardApp {
    pub fn new(client: DashboardClient, config: &Config) -> Self {
        let state = DashboardState::new(
            LiveHistory::new(config.simulation.history_capacity),
            config.dashboard.initial_investment,
            config.dashboard.predict_failure_policy,
        );

        let mut app = Self {
            client,
            state,
            simulator: PriceSimulator::new(SimulatorSettings::from(&config.simulation)),
            schedule: TickSchedule::new(Duration::from_millis(config.simulation.tick_interval_ms)),
            logs: Vec::new(),
            show_logs: false,
        };
        app.refresh();
        app
    }

    /// Drain worker events and advance the live feed if a tick is due.
    pub fn update(&mut self, now: Instant) {
        while let Some(event) = self.client.poll_next() {
            match event {
                DashboardEvent::SnapshotLoaded(result) => self.state.apply_snapshot_result(result),
                DashboardEvent::PredictionReady(result) => {
                    self.state.apply_prediction_result(result)
                }
                DashboardEvent::Log(msg) => self.logs.push(msg),
            }
        }

        // Keep history manageable
        if self.logs.len() > MAX_LOG_LINES {
            let excess = self.logs.len() - MAX_LOG_LINES;
            self.logs.drain(0..excess);
        }

        if self
            .schedule
            .poll(now, self.state.is_live, self.state.current_price)
        {
            let tick = self.simulator.tick_now(self.state.current_price);
            debug!("Live tick: {:.2} ({})", tick.price, tick.point.volume);
            self.state.apply_tick(tick);
        }
    }

    /// How long the UI may sleep before the next scheduled tick
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.schedule.time_until_next(now)
    }

    /// (Re)load the market snapshot. Also bound to the header's reset button.
    pub fn refresh(&mut self) {
        self.state.loading_snapshot = true;
        if let Err(e) = self.client.request_snapshot() {
            error!("{}", e);
            self.state.load_fallback();
        }
    }

    pub fn predict(&mut self) {
        let input = self.state.begin_prediction();
        info!(
            "Running scenario: RSI {:.2}, volatility {:.2}, price {:.2}",
            input.rsi, input.volatility, input.price_lag_1
        );

        if let Err(e) = self.client.request_prediction(input) {
            error!("{}", e);
            self.state
                .apply_prediction_result(Err(PredictorError::Request {
                    endpoint: "/predict".to_string(),
                    reason: e.to_string(),
                }));
        }
    }

    pub fn toggle_live(&mut self) {
        self.state.toggle_live();
        self.schedule.reset();
    }

    /// Whether the live feed holds enough prices to derive indicators.
    pub fn can_sync_features(&self) -> bool {
        self.state.live_history.len() >= MIN_SAMPLES
    }

    /// Replace the feature vector with indicators computed from the live feed.
    ///
    /// Returns `false` while the feed is still too short.
    pub fn sync_features_from_feed(&mut self) -> bool {
        match indicators::derive_features(&self.state.live_history.prices()) {
            Some(features) => {
                info!(
                    "Features synced from live feed: SMA7 {:.2}, RSI {:.2}",
                    features.sma_7, features.rsi
                );
                self.state.features = features;
                true
            }
            None => {
                info!(
                    "Live feed has {} points, need {} to derive indicators",
                    self.state.live_history.len(),
                    MIN_SAMPLES
                );
                false
            }
        }
    }
}
