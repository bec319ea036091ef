use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Tail of the tracing output piped from the subscriber.
pub fn render_log_panel(ui: &mut egui::Ui, logs: &[String]) {
    egui::ScrollArea::vertical()
        .id_salt("log_panel")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in logs {
                let color = if line.contains("ERROR") {
                    DesignSystem::DANGER
                } else if line.contains("WARN") {
                    DesignSystem::WARNING
                } else {
                    DesignSystem::TEXT_SECONDARY
                };
                ui.label(
                    egui::RichText::new(line.trim_end())
                        .monospace()
                        .size(11.0)
                        .color(color),
                );
            }
        });
}
