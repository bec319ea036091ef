use crate::config::SimulationEnvConfig;
use crate::domain::price_history::{PricePoint, Trend};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Random-walk parameters
#[derive(Debug, Clone)]
pub struct SimulatorSettings {
    /// Full width of a step: each move is uniform in `[-amplitude/2, amplitude/2)`
    pub step_amplitude: f64,
    pub volume_min: u32,
    /// Volume is uniform in `[volume_min, volume_min + volume_span)`
    pub volume_span: u32,
    /// strftime pattern used by [`PriceSimulator::tick_now`]
    pub time_format: String,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self::from(&SimulationEnvConfig::default())
    }
}

impl From<&SimulationEnvConfig> for SimulatorSettings {
    fn from(config: &SimulationEnvConfig) -> Self {
        Self {
            step_amplitude: config.step_amplitude,
            volume_min: config.volume_min,
            volume_span: config.volume_span.max(1),
            time_format: config.time_format.clone(),
        }
    }
}

/// Outcome of one simulated tick
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTick {
    pub price: f64,
    pub trend: Trend,
    pub point: PricePoint,
}

/// Client-side random walk driving the "live" feed.
pub struct PriceSimulator<R: Rng = StdRng> {
    rng: R,
    settings: SimulatorSettings,
}

impl PriceSimulator<StdRng> {
    pub fn new(settings: SimulatorSettings) -> Self {
        Self::with_rng(StdRng::from_os_rng(), settings)
    }

    pub fn seeded(seed: u64, settings: SimulatorSettings) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), settings)
    }
}

impl<R: Rng> PriceSimulator<R> {
    pub fn with_rng(rng: R, settings: SimulatorSettings) -> Self {
        Self { rng, settings }
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }

    /// Advance the walk one step from `current_price`, labelling the point with `time`.
    pub fn tick(&mut self, current_price: f64, time: impl Into<String>) -> PriceTick {
        let step = (self.rng.random::<f64>() - 0.5) * self.settings.step_amplitude;
        let price = current_price + step;
        let volume = self.settings.volume_min + self.rng.random_range(0..self.settings.volume_span);

        PriceTick {
            price,
            trend: Trend::from_move(current_price, price),
            point: PricePoint::new(time, price, volume),
        }
    }

    /// Same as [`tick`](Self::tick), labelled with the local wall clock
    /// (`MM:SS` unless configured otherwise).
    pub fn tick_now(&mut self, current_price: f64) -> PriceTick {
        let label = self.label_for(chrono::Local::now());
        self.tick(current_price, label)
    }

    fn label_for<Tz: chrono::TimeZone>(&self, at: chrono::DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format(&self.settings.time_format).to_string()
    }
}

/// Fixed-period timer for the live feed.
///
/// Runs only while live mode is on and the current price is positive. Any
/// pause restarts the interval from scratch.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    last: Option<Instant>,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns `true` when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant, live: bool, current_price: f64) -> bool {
        if !live || current_price <= 0.0 {
            self.last = None;
            return false;
        }

        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    /// Time left until the next tick, if the schedule is running
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.last.map(|last| {
            self.interval.saturating_sub(now.saturating_duration_since(last))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stay_within_amplitude() {
        let mut sim = PriceSimulator::seeded(7, SimulatorSettings::default());
        let mut price = 43_250.75;

        for _ in 0..1000 {
            let tick = sim.tick(price, "00:00");
            let step = tick.price - price;
            assert!(step.abs() <= 40.0 + 1e-6, "step out of range: {}", step);
            assert!((500..3500).contains(&tick.point.volume));
            assert_eq!(tick.point.price, tick.price);
            assert_eq!(tick.trend, Trend::from_move(price, tick.price));
            price = tick.price;
        }
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let mut a = PriceSimulator::seeded(42, SimulatorSettings::default());
        let mut b = PriceSimulator::seeded(42, SimulatorSettings::default());

        for _ in 0..20 {
            assert_eq!(a.tick(100.0, "x"), b.tick(100.0, "x"));
        }
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let settings = SimulatorSettings {
            step_amplitude: 0.0,
            ..SimulatorSettings::default()
        };
        let mut sim = PriceSimulator::seeded(1, settings);
        let tick = sim.tick(100.0, "x");
        assert_eq!(tick.price, 100.0);
        assert_eq!(tick.trend, Trend::Down);
    }

    #[test]
    fn test_tick_now_labels_minutes_and_seconds() {
        let mut sim = PriceSimulator::seeded(3, SimulatorSettings::default());
        let tick = sim.tick_now(100.0);
        let label = tick.point.time;
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }

    #[test]
    fn test_configured_volume_range_and_time_format() {
        let settings = SimulatorSettings {
            volume_min: 10,
            volume_span: 5,
            time_format: "%H:%M:%S".to_string(),
            ..SimulatorSettings::default()
        };
        let mut sim = PriceSimulator::seeded(11, settings);

        for _ in 0..200 {
            let tick = sim.tick(100.0, "x");
            assert!((10..15).contains(&tick.point.volume));
        }

        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 42))
            .expect("valid date")
            .and_utc();
        assert_eq!(sim.label_for(at), "07:05:42");
        assert_eq!(sim.tick_now(100.0).point.time.len(), 8);
    }

    #[test]
    fn test_schedule_fires_every_interval_while_live() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(Duration::from_secs(1));

        // First poll arms the timer
        assert!(!schedule.poll(start, true, 100.0));
        assert!(schedule.is_running());
        assert!(!schedule.poll(start + Duration::from_millis(999), true, 100.0));
        assert!(schedule.poll(start + Duration::from_millis(1000), true, 100.0));
        assert!(!schedule.poll(start + Duration::from_millis(1500), true, 100.0));
        assert!(schedule.poll(start + Duration::from_millis(2000), true, 100.0));
    }

    #[test]
    fn test_schedule_idle_when_paused_or_unpriced() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(Duration::from_secs(1));

        assert!(!schedule.poll(start, false, 100.0));
        assert!(!schedule.is_running());

        assert!(!schedule.poll(start, true, 0.0));
        assert!(!schedule.poll(start + Duration::from_secs(5), true, 0.0));
        assert!(schedule.time_until_next(start).is_none());
    }

    #[test]
    fn test_pause_restarts_interval() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(Duration::from_secs(1));

        schedule.poll(start, true, 100.0);
        // Paused just before the tick was due
        schedule.poll(start + Duration::from_millis(900), false, 100.0);
        // Resuming re-arms rather than firing immediately
        assert!(!schedule.poll(start + Duration::from_millis(1100), true, 100.0));
        assert_eq!(
            schedule.time_until_next(start + Duration::from_millis(1600)),
            Some(Duration::from_millis(500))
        );
        assert!(schedule.poll(start + Duration::from_millis(2100), true, 100.0));
    }
}
