use crate::application::dashboard_state::DashboardState;
use crate::domain::features::FeatureVector;
use crate::domain::price_history::{PricePoint, Trend};
use crate::domain::projection::{Projection, RSI_OVERBOUGHT, RsiZone, Signal};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct ProfitDisplay {
    pub text: String,
    pub color: egui::Color32,
}

pub struct PredictionDisplay {
    pub headline: String,
    pub badge: String,
    pub signal: Signal,
    pub color: egui::Color32,
    pub analysis: String,
}

pub struct LiveBadge {
    pub text: String,
    pub color: egui::Color32,
}

pub struct TradeRow {
    pub time: String,
    pub price: String,
    pub volume: String,
    pub is_latest: bool,
}

pub struct DashboardViewModel;

impl DashboardViewModel {
    /// Sidebar profit line, only when a prediction exists.
    pub fn get_profit(state: &DashboardState) -> Option<ProfitDisplay> {
        state.prediction?;
        let projection = state.projection();
        Some(ProfitDisplay {
            text: format!(
                "{}{:.2} USD ({:.2}%)",
                projection.sign(),
                projection.profit,
                projection.roi_pct
            ),
            color: Self::gain_color(projection.is_gain()),
        })
    }

    /// Prediction card content. `None` renders the placeholder.
    pub fn get_prediction(state: &DashboardState) -> Option<PredictionDisplay> {
        let predicted = state.prediction.filter(|p| *p != 0.0)?;
        let signal = Signal::from_prediction(predicted, state.current_price);
        let roi =
            Projection::compute(Some(predicted), state.current_price, state.investment).roi_pct;

        let badge = if signal.is_bullish() {
            format!("▲ +{:.2}%", roi)
        } else {
            format!("▼ {:.2}%", roi)
        };

        Some(PredictionDisplay {
            headline: format_usd(predicted, 0),
            badge,
            signal,
            color: Self::gain_color(signal.is_bullish()),
            analysis: analysis_text(&state.features, signal),
        })
    }

    /// Trend badge next to the current price, shown only while live.
    pub fn get_live_badge(state: &DashboardState) -> Option<LiveBadge> {
        if !state.is_live {
            return None;
        }
        Some(LiveBadge {
            text: format!("{} LIVE", state.trend.arrow()),
            color: Self::gain_color(state.trend == Trend::Up),
        })
    }

    /// Running trades, newest first.
    pub fn get_trade_rows(state: &DashboardState) -> Vec<TradeRow> {
        state
            .live_history
            .iter()
            .rev()
            .enumerate()
            .map(|(index, point)| trade_row(point, index == 0))
            .collect()
    }

    pub fn rsi_color(rsi: f64) -> egui::Color32 {
        if rsi > RSI_OVERBOUGHT {
            DesignSystem::DANGER
        } else {
            DesignSystem::SUCCESS
        }
    }

    fn gain_color(gain: bool) -> egui::Color32 {
        if gain {
            DesignSystem::SUCCESS
        } else {
            DesignSystem::DANGER
        }
    }
}

fn trade_row(point: &PricePoint, is_latest: bool) -> TradeRow {
    TradeRow {
        time: point.time.clone(),
        price: format!("{:.2}", point.price),
        volume: point.volume.to_string(),
        is_latest,
    }
}

/// Narrative under the prediction headline
pub fn analysis_text(features: &FeatureVector, signal: Signal) -> String {
    let mut text = format!(
        "With an RSI of {:.2} and volatility of {:.2}, the model predicts a {}.",
        features.rsi,
        features.volatility,
        signal.outlook()
    );
    if let Some(note) = RsiZone::from_rsi(features.rsi).note() {
        text.push(' ');
        text.push_str(note);
    }
    text
}

/// `$43,250.75` style formatting with thousands separators.
pub fn format_usd(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, grouped, frac),
        None => format!("{}${}", sign, grouped),
    }
}

/// Axis tick label in thousands (`$43.2k`)
pub fn format_kilo(value: f64) -> String {
    format!("${:.1}k", value / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PredictFailurePolicy;
    use crate::domain::price_history::LiveHistory;

    fn state_with(current: f64, prediction: Option<f64>) -> DashboardState {
        let mut state = DashboardState::new(
            LiveHistory::new(40),
            1000.0,
            PredictFailurePolicy::Approximate,
        );
        state.current_price = current;
        state.prediction = prediction;
        state
    }

    #[test]
    fn test_format_usd_groups_thousands() {
        assert_eq!(format_usd(43250.75, 2), "$43,250.75");
        assert_eq!(format_usd(1234567.0, 0), "$1,234,567");
        assert_eq!(format_usd(999.0, 0), "$999");
        assert_eq!(format_usd(44000.4, 0), "$44,000");
        assert_eq!(format_usd(-1500.5, 2), "-$1,500.50");
        assert_eq!(format_usd(0.0, 2), "$0.00");
    }

    #[test]
    fn test_format_kilo() {
        assert_eq!(format_kilo(43200.0), "$43.2k");
    }

    #[test]
    fn test_profit_hidden_without_prediction() {
        assert!(DashboardViewModel::get_profit(&state_with(40000.0, None)).is_none());
    }

    #[test]
    fn test_profit_gain_is_green_with_plus_sign() {
        let profit = DashboardViewModel::get_profit(&state_with(40000.0, Some(44000.0)))
            .expect("profit shown");
        assert_eq!(profit.text, "+100.00 USD (10.00%)");
        assert_eq!(profit.color, DesignSystem::SUCCESS);
    }

    #[test]
    fn test_profit_loss_is_red_without_plus_sign() {
        let profit = DashboardViewModel::get_profit(&state_with(40000.0, Some(36000.0)))
            .expect("profit shown");
        assert_eq!(profit.text, "-100.00 USD (-10.00%)");
        assert_eq!(profit.color, DesignSystem::DANGER);
    }

    #[test]
    fn test_prediction_card_bullish() {
        let display = DashboardViewModel::get_prediction(&state_with(40000.0, Some(44000.0)))
            .expect("prediction shown");
        assert_eq!(display.headline, "$44,000");
        assert_eq!(display.badge, "▲ +10.00%");
        assert_eq!(display.signal, Signal::StrongBuy);
        assert!(display.analysis.contains("bullish recovery"));
    }

    #[test]
    fn test_prediction_card_bearish_when_equal() {
        let display = DashboardViewModel::get_prediction(&state_with(40000.0, Some(40000.0)))
            .expect("prediction shown");
        assert_eq!(display.signal, Signal::PanicSell);
        assert_eq!(display.badge, "▼ 0.00%");
        assert_eq!(display.color, DesignSystem::DANGER);
    }

    #[test]
    fn test_zero_prediction_shows_placeholder() {
        assert!(DashboardViewModel::get_prediction(&state_with(40000.0, Some(0.0))).is_none());
    }

    #[test]
    fn test_analysis_mentions_rsi_zone() {
        let mut features = FeatureVector::default();
        features.rsi = 80.0;
        features.volatility = 120.5;
        let text = analysis_text(&features, Signal::PanicSell);
        assert_eq!(
            text,
            "With an RSI of 80.00 and volatility of 120.50, the model predicts a bearish correction. Caution: the market is overbought."
        );

        features.rsi = 50.0;
        assert!(!analysis_text(&features, Signal::StrongBuy).contains(':'));
    }

    #[test]
    fn test_rsi_color_threshold() {
        assert_eq!(DashboardViewModel::rsi_color(70.0), DesignSystem::SUCCESS);
        assert_eq!(DashboardViewModel::rsi_color(70.5), DesignSystem::DANGER);
    }

    #[test]
    fn test_trade_rows_newest_first() {
        let mut state = state_with(100.0, None);
        state.live_history.push(PricePoint::new("00:01", 100.0, 600));
        state.live_history.push(PricePoint::new("00:02", 101.5, 700));

        let rows = DashboardViewModel::get_trade_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, "00:02");
        assert_eq!(rows[0].price, "101.50");
        assert!(rows[0].is_latest);
        assert!(!rows[1].is_latest);
    }

    #[test]
    fn test_live_badge_only_when_live() {
        let mut state = state_with(100.0, None);
        assert!(DashboardViewModel::get_live_badge(&state).is_none());

        state.is_live = true;
        state.trend = Trend::Down;
        let badge = DashboardViewModel::get_live_badge(&state).expect("badge");
        assert_eq!(badge.text, "▼ LIVE");
        assert_eq!(badge.color, DesignSystem::DANGER);
    }
}
