use crate::application::dashboard_app::DashboardApp;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Top bar: mode label, live toggle and reset.
pub fn render_header(ui: &mut egui::Ui, app: &mut DashboardApp) {
    let is_live = app.state.is_live;

    ui.horizontal(|ui| {
        let dot = if is_live {
            DesignSystem::SUCCESS
        } else {
            DesignSystem::DANGER
        };
        ui.label(egui::RichText::new("●").color(dot));
        ui.label(
            egui::RichText::new("BTC/USD SIMULATOR MODE")
                .monospace()
                .color(DesignSystem::TEXT_SECONDARY),
        );

        if app.state.loading_snapshot {
            ui.add(egui::Spinner::new().size(12.0));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let reset_color = if is_live {
                DesignSystem::TEXT_SECONDARY
            } else {
                DesignSystem::WARNING
            };
            let reset = ui
                .add(
                    egui::Button::new(egui::RichText::new("⟳ Reset Data").color(reset_color))
                        .frame(false),
                )
                .on_hover_text("Reload market data");
            if reset.clicked() {
                app.refresh();
            }

            ui.separator();

            let (label, color, fill) = if is_live {
                (
                    "LIVE",
                    DesignSystem::SUCCESS,
                    DesignSystem::SUCCESS.linear_multiply(0.15),
                )
            } else {
                (
                    "PAUSED",
                    DesignSystem::TEXT_SECONDARY,
                    DesignSystem::BORDER_SUBTLE,
                )
            };
            let toggle = ui.add(
                egui::Button::new(
                    egui::RichText::new(label)
                        .monospace()
                        .strong()
                        .color(color),
                )
                .fill(fill)
                .corner_radius(DesignSystem::ROUNDING_LARGE),
            );
            if toggle.clicked() {
                app.toggle_live();
            }
        });
    });
}
