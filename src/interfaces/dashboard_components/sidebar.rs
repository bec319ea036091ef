use crate::application::dashboard_app::DashboardApp;
use crate::interfaces::components::metrics::render_caption;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::DashboardViewModel;
use eframe::egui;

/// Brand, navigation and the simulated investment box.
pub fn render_sidebar(ui: &mut egui::Ui, app: &mut DashboardApp) {
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.horizontal(|ui| {
        egui::Frame::NONE
            .fill(DesignSystem::ACCENT_PRIMARY)
            .corner_radius(DesignSystem::ROUNDING_MEDIUM)
            .inner_margin(egui::Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("₿").strong().color(egui::Color32::BLACK));
            });
        ui.label(
            egui::RichText::new("TradeCore")
                .size(20.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });

    ui.add_space(DesignSystem::SPACING_LARGE);

    egui::Frame::NONE
        .fill(DesignSystem::BG_CARD_HEADER)
        .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("📈 Simulator")
                    .strong()
                    .color(DesignSystem::ACCENT_PRIMARY),
            );
        });

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        DesignSystem::card_frame()
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical(|ui| {
                    render_caption(ui, "💼 Simulated Investment");
                    ui.add_space(6.0);

                    let mut investment = app.state.investment;
                    DesignSystem::input_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let response = ui.add(
                            egui::DragValue::new(&mut investment)
                                .prefix("$ ")
                                .speed(10.0)
                                .max_decimals(2),
                        );
                        if response.changed() {
                            app.state.set_investment(investment);
                        }
                    });

                    if let Some(profit) = DashboardViewModel::get_profit(&app.state) {
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        ui.label(
                            egui::RichText::new(profit.text)
                                .strong()
                                .monospace()
                                .color(profit.color),
                        );
                    }
                });
            });
    });
}
