use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of live points kept for the ticker chart.
pub const DEFAULT_HISTORY_CAPACITY: usize = 40;

/// A single sample of the live price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
    pub volume: u32,
}

impl PricePoint {
    pub fn new(time: impl Into<String>, price: f64, volume: u32) -> Self {
        Self {
            time: time.into(),
            price,
            volume,
        }
    }
}

/// Direction of the last simulated move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    #[default]
    Up,
    Down,
}

impl Trend {
    /// `Up` only on a strict increase; a flat move counts as `Down`.
    pub fn from_move(previous: f64, next: f64) -> Self {
        if next > previous { Self::Up } else { Self::Down }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

/// Bounded FIFO of live price points. Oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct LiveHistory {
    points: VecDeque<PricePoint>,
    capacity: usize,
}

impl Default for LiveHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl LiveHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: PricePoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Replace the contents, keeping only the newest `capacity` points.
    pub fn seed(&mut self, points: impl IntoIterator<Item = PricePoint>) {
        self.points.clear();
        for point in points {
            self.push(point);
        }
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.back()
    }

    /// Newest `n` points in chronological order.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &PricePoint> {
        self.points.iter().skip(self.points.len().saturating_sub(n))
    }

    /// Chronological iteration (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PricePoint> {
        self.points.iter()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> PricePoint {
        PricePoint::new(format!("{:02}", i), 40_000.0 + i as f64, 500)
    }

    #[test]
    fn test_history_caps_at_forty_points() {
        let mut history = LiveHistory::default();
        for i in 0..55 {
            history.push(point(i));
        }

        assert_eq!(history.len(), 40);
        // Oldest 15 evicted
        assert_eq!(history.iter().next().unwrap().time, "15");
        assert_eq!(history.latest().unwrap().time, "54");
    }

    #[test]
    fn test_seed_replaces_and_respects_capacity() {
        let mut history = LiveHistory::new(3);
        history.push(point(99));
        history.seed((0..5).map(point));

        let times: Vec<_> = history.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(times, vec!["02", "03", "04"]);
    }

    #[test]
    fn test_last_n_chronological_and_short_history() {
        let mut history = LiveHistory::default();
        history.push(point(1));
        history.push(point(2));

        let last: Vec<_> = history.last_n(3).map(|p| p.time.clone()).collect();
        assert_eq!(last, vec!["01", "02"]);

        history.push(point(3));
        history.push(point(4));
        let last: Vec<_> = history.last_n(3).map(|p| p.time.clone()).collect();
        assert_eq!(last, vec!["02", "03", "04"]);
    }

    #[test]
    fn test_zero_capacity_is_promoted() {
        let mut history = LiveHistory::new(0);
        history.push(point(1));
        history.push(point(2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.latest().unwrap().time, "02");
    }

    #[test]
    fn test_trend_from_move() {
        assert_eq!(Trend::from_move(100.0, 100.5), Trend::Up);
        assert_eq!(Trend::from_move(100.0, 99.5), Trend::Down);
        assert_eq!(Trend::from_move(100.0, 100.0), Trend::Down);
    }
}
