use crate::application::dashboard_state::DashboardState;
use crate::interfaces::components::charts::render_area_chart;
use crate::interfaces::components::metrics::render_status_pill;
use crate::interfaces::dashboard_components::running_trades::render_running_trades;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::{DashboardViewModel, format_usd};
use eframe::egui;

const CHART_HEIGHT: f32 = 280.0;

/// Current price headline, live chart and the running trades list.
pub fn render_live_ticker(ui: &mut egui::Ui, state: &DashboardState) {
    ui.label(
        egui::RichText::new("CURRENT PRICE")
            .size(11.0)
            .strong()
            .color(DesignSystem::TEXT_MUTED),
    );
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format_usd(state.current_price, 2))
                .size(44.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        if let Some(badge) = DashboardViewModel::get_live_badge(state) {
            render_status_pill(ui, &badge.text, badge.color);
        }
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let samples: Vec<(String, f64)> = state
        .live_history
        .iter()
        .map(|point| (point.time.clone(), point.price))
        .collect();

    let spacing = DesignSystem::SPACING_MEDIUM;
    let chart_width = ((ui.available_width() - spacing) * 0.75).max(200.0);
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        ui.allocate_ui(egui::vec2(chart_width, CHART_HEIGHT), |ui| {
            DesignSystem::card_frame()
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    render_area_chart(
                        ui,
                        "live_chart",
                        &samples,
                        DesignSystem::ACCENT_PRIMARY,
                        CHART_HEIGHT - 32.0,
                        None,
                    );
                });
        });
        let trades_width = ui.available_width();
        ui.allocate_ui(egui::vec2(trades_width, CHART_HEIGHT), |ui| {
            render_running_trades(ui, state, CHART_HEIGHT);
        });
    });
}
