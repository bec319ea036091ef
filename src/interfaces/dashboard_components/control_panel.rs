use crate::application::dashboard_app::DashboardApp;
use crate::application::indicators::MIN_SAMPLES;
use crate::domain::features::FeatureField;
use crate::interfaces::components::Card;
use crate::interfaces::components::metrics::render_caption;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::DashboardViewModel;
use eframe::egui;

/// Plain number inputs, laid out two per row
const NUMERIC_FIELDS: [FeatureField; 4] = [
    FeatureField::Sma7,
    FeatureField::PriceLag1,
    FeatureField::Sma30,
    FeatureField::PriceLag7,
];

/// Scenario editor: momentum/risk sliders, price inputs and the run button.
pub fn render_control_panel(ui: &mut egui::Ui, app: &mut DashboardApp) {
    Card::new()
        .title("⚙ Simulate Scenarios")
        .accent(DesignSystem::ACCENT_PRIMARY)
        .badge("EDITABLE")
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // RSI
            let rsi = app.state.features.rsi;
            ui.horizontal(|ui| {
                render_caption(ui, FeatureField::Rsi.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{:.0}", rsi))
                            .monospace()
                            .strong()
                            .color(DashboardViewModel::rsi_color(rsi)),
                    );
                });
            });
            feature_slider(ui, app, FeatureField::Rsi);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Oversold (Buy)")
                        .size(10.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Overbought (Sell)")
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
            });

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            // Volatility
            let volatility = app.state.features.volatility;
            ui.horizontal(|ui| {
                render_caption(ui, FeatureField::Volatility.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{:.0}", volatility))
                            .monospace()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                });
            });
            feature_slider(ui, app, FeatureField::Volatility);

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            egui::Grid::new("feature_inputs")
                .num_columns(2)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (i, field) in NUMERIC_FIELDS.into_iter().enumerate() {
                        numeric_input(ui, app, field);
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(DesignSystem::SPACING_SMALL);

            let sync = ui
                .add_enabled(
                    app.can_sync_features(),
                    egui::Button::new(
                        egui::RichText::new("⇄ Sync from live feed")
                            .size(11.0)
                            .color(DesignSystem::ACCENT_SECONDARY),
                    )
                    .frame(false),
                )
                .on_hover_text("Derive indicators from the live price history")
                .on_disabled_hover_text(format!(
                    "Needs {} live prices, have {}",
                    MIN_SAMPLES,
                    app.state.live_history.len()
                ));
            if sync.clicked() {
                app.sync_features_from_feed();
            }

            ui.add_space(DesignSystem::SPACING_MEDIUM);
            render_run_button(ui, app);
        });
}

fn feature_slider(ui: &mut egui::Ui, app: &mut DashboardApp, field: FeatureField) {
    let Some(range) = field.bounds() else {
        return;
    };
    let mut value = app.state.features.get(field);
    ui.spacing_mut().slider_width = ui.available_width();
    let response = ui.add(egui::Slider::new(&mut value, range).show_value(false));
    if response.changed() {
        app.state.set_feature(field, value);
    }
}

fn numeric_input(ui: &mut egui::Ui, app: &mut DashboardApp, field: FeatureField) {
    DesignSystem::input_frame().show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(field.label())
                    .size(10.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
            let mut value = app.state.features.get(field);
            let response = ui.add(egui::DragValue::new(&mut value).speed(1.0).max_decimals(2));
            if response.changed() {
                app.state.set_feature(field, value);
            }
        });
    });
}

fn render_run_button(ui: &mut egui::Ui, app: &mut DashboardApp) {
    let busy = app.state.is_predicting();
    ui.horizontal(|ui| {
        let width = if busy {
            ui.available_width() - 24.0
        } else {
            ui.available_width()
        };
        let button = egui::Button::new(
            egui::RichText::new("⚡ RUN SIMULATION")
                .monospace()
                .strong()
                .color(DesignSystem::ACCENT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY.linear_multiply(0.1))
        .stroke(egui::Stroke::new(
            1.0,
            DesignSystem::ACCENT_PRIMARY.linear_multiply(0.5),
        ))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .min_size(egui::vec2(width, 40.0));

        // Clicks stay enabled while a request is in flight
        if ui.add(button).clicked() {
            app.predict();
        }
        if busy {
            ui.add(egui::Spinner::new());
        }
    });
}
