use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A generic card container with standard styling
pub struct Card {
    title: Option<String>,
    title_color: egui::Color32,
    badge: Option<String>,
    min_height: f32,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            title_color: DesignSystem::TEXT_SECONDARY,
            badge: None,
            min_height: 0.0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Tint the title (section accent)
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.title_color = color;
        self
    }

    /// Small outlined tag on the right of the title row
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        DesignSystem::card_frame().show(ui, |ui| {
            // Don't set min_width as it causes issues inside ScrollArea
            if self.min_height > 0.0 {
                ui.set_min_height(self.min_height);
            }

            if self.title.is_some() || self.badge.is_some() {
                ui.horizontal(|ui| {
                    if let Some(title) = &self.title {
                        ui.label(
                            egui::RichText::new(title.to_uppercase())
                                .size(12.0)
                                .color(self.title_color)
                                .strong(),
                        );
                    }
                    if let Some(badge) = &self.badge {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            egui::Frame::NONE
                                .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
                                .corner_radius(DesignSystem::ROUNDING_SMALL)
                                .inner_margin(egui::Margin::symmetric(6, 2))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(badge)
                                            .size(10.0)
                                            .color(DesignSystem::TEXT_MUTED),
                                    );
                                });
                        });
                    }
                });
                ui.add_space(DesignSystem::SPACING_MEDIUM);
            }

            add_contents(ui)
        })
    }
}
