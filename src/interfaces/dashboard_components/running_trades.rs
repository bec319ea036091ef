use crate::application::dashboard_state::DashboardState;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::DashboardViewModel;
use eframe::egui;

pub fn render_running_trades(ui: &mut egui::Ui, state: &DashboardState, height: f32) {
    egui::Frame::NONE
        .fill(DesignSystem::BG_CARD)
        .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
        .corner_radius(DesignSystem::ROUNDING_LARGE)
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_width(ui.available_width());

            egui::Frame::NONE
                .fill(DesignSystem::BG_CARD_HEADER)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new("☰ RUNNING TRADES")
                            .size(10.0)
                            .strong()
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });

            egui::ScrollArea::vertical()
                .id_salt("running_trades")
                .max_height(height - 40.0)
                .show(ui, |ui| {
                    egui::Grid::new("running_trades_grid")
                        .num_columns(3)
                        .spacing([16.0, 6.0])
                        .min_col_width(50.0)
                        .show(ui, |ui| {
                            for header in ["TIME", "PRICE", "VOL"] {
                                ui.label(
                                    egui::RichText::new(header)
                                        .size(10.0)
                                        .strong()
                                        .color(DesignSystem::TEXT_MUTED),
                                );
                            }
                            ui.end_row();

                            for row in DashboardViewModel::get_trade_rows(state) {
                                let price_color = if row.is_latest {
                                    DesignSystem::TEXT_PRIMARY
                                } else {
                                    DesignSystem::TEXT_SECONDARY
                                };
                                ui.label(
                                    egui::RichText::new(row.time)
                                        .monospace()
                                        .size(11.0)
                                        .color(DesignSystem::TEXT_MUTED),
                                );
                                ui.label(
                                    egui::RichText::new(row.price)
                                        .monospace()
                                        .size(11.0)
                                        .strong()
                                        .color(price_color),
                                );
                                ui.label(
                                    egui::RichText::new(row.volume)
                                        .monospace()
                                        .size(11.0)
                                        .color(DesignSystem::ACCENT_PRIMARY.linear_multiply(0.7)),
                                );
                                ui.end_row();
                            }
                        });
                });
        });
}
