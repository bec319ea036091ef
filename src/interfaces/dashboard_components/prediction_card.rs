use crate::application::dashboard_state::DashboardState;
use crate::interfaces::components::charts::render_area_chart;
use crate::interfaces::components::metrics::{render_signal_box, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::DashboardViewModel;
use eframe::egui;

pub fn render_prediction_card(ui: &mut egui::Ui, state: &mut DashboardState) {
    if let Some(message) = state.alert.clone() {
        render_alert(ui, state, &message);
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(200.0);

        let Some(display) = DashboardViewModel::get_prediction(state) else {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(
                    egui::RichText::new("⚙")
                        .size(32.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(
                        "Adjust the sliders and run a simulation to see the impact.",
                    )
                    .color(DesignSystem::TEXT_MUTED),
                );
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("AI PROJECTION")
                        .size(11.0)
                        .strong()
                        .color(DesignSystem::ACCENT_SECONDARY),
                );
                ui.label(
                    egui::RichText::new(&display.headline)
                        .size(44.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                render_status_pill(ui, &display.badge, display.color);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                render_signal_box(
                    ui,
                    "Suggested Signal",
                    &display.signal.to_string(),
                    display.color,
                );
            });
        });

        ui.add_space(DesignSystem::SPACING_LARGE);

        DesignSystem::input_frame()
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new("Analysis:")
                            .size(12.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(&display.analysis)
                            .size(12.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            });
    });

    if state.prediction.is_some() && !state.forecast.is_empty() {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        let samples: Vec<(String, f64)> = state
            .forecast
            .iter()
            .map(|point| (point.time.clone(), point.price))
            .collect();

        DesignSystem::card_frame()
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new("VISUAL PROJECTION")
                        .size(10.0)
                        .strong()
                        .color(DesignSystem::TEXT_MUTED),
                );
                render_area_chart(
                    ui,
                    "scenario_chart",
                    &samples,
                    DesignSystem::ACCENT_SECONDARY,
                    150.0,
                    Some(state.current_price),
                );
            });
    }
}

fn render_alert(ui: &mut egui::Ui, state: &mut DashboardState, message: &str) {
    egui::Frame::NONE
        .fill(DesignSystem::DANGER.linear_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, DesignSystem::DANGER.linear_multiply(0.4)))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("⚠ {}", message)).color(DesignSystem::DANGER),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        state.dismiss_alert();
                    }
                });
            });
        });
}
