use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A status pill (e.g., for ROI percent or the LIVE marker)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

/// Small uppercase caption used above inputs and values
pub fn render_caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(10.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
}

/// Bordered box holding a signal label (STRONG BUY / PANIC SELL)
pub fn render_signal_box(ui: &mut egui::Ui, caption: &str, value: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.3)))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(caption.to_uppercase())
                        .size(10.0)
                        .strong()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.label(egui::RichText::new(value).size(20.0).strong().color(color));
            });
        });
}
