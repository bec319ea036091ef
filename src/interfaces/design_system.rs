use eframe::egui;

/// Dark terminal look shared by every dashboard view
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 14, 18); // #0E0E12
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(14, 14, 18);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(21, 21, 26); // #15151A
    pub const BG_CARD_HEADER: egui::Color32 = egui::Color32::from_rgb(28, 28, 36); // #1C1C24
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(14, 14, 18);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(6, 182, 212); // #06B6D4 (Cyan)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(139, 92, 246); // #8B5CF6 (Purple)

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128); // #4ADE80
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(248, 113, 113); // #F87171
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(245, 158, 11); // #F59E0B

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(244, 244, 245);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(39, 39, 42); // #27272A

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 16.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BORDER_SUBTLE;

        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_LARGE)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_LARGE as i8)
    }

    /// Recessed well used behind numeric inputs
    pub fn input_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_INPUT)
            .corner_radius(Self::ROUNDING_SMALL)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(egui::Margin::same(8))
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
