use crate::application::dashboard_app::DashboardApp;
use crate::interfaces::dashboard_components::control_panel::render_control_panel;
use crate::interfaces::dashboard_components::header::render_header;
use crate::interfaces::dashboard_components::log_panel::render_log_panel;
use crate::interfaces::dashboard_components::prediction_card::render_prediction_card;
use crate::interfaces::dashboard_components::sidebar::render_sidebar;
use crate::interfaces::dashboard_components::ticker::render_live_ticker;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::time::{Duration, Instant};

/// Upper bound between frames so worker events are picked up promptly
const IDLE_REPAINT: Duration = Duration::from_millis(250);

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 1. Process worker events & live ticks ---
        let now = Instant::now();
        self.update(now);

        // --- 2. Panels ---
        self.render(ctx);

        // --- 3. Schedule next frame ---
        let wakeup = self
            .next_wakeup(Instant::now())
            .map_or(IDLE_REPAINT, |d| d.min(IDLE_REPAINT));
        ctx.request_repaint_after(wakeup);
    }
}

impl DashboardApp {
    /// Lay out every dashboard panel for one frame.
    pub fn render(&mut self, ctx: &egui::Context) {
        // --- Sidebar ---
        egui::SidePanel::left("sidebar")
            .exact_width(240.0)
            .resizable(false)
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_WINDOW)
                    .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| render_sidebar(ui, self));

        // --- Header ---
        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_WINDOW)
                    .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| render_header(ui, self));

        // --- Logs (collapsible) ---
        egui::TopBottomPanel::bottom("logs")
            .resizable(true)
            .default_height(if self.show_logs { 160.0 } else { 28.0 })
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_CARD)
                    .inner_margin(egui::Margin::symmetric(16, 4)),
            )
            .show(ctx, |ui| {
                let caption = if self.show_logs {
                    "▼ Logs"
                } else {
                    "▶ Logs"
                };
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(caption)
                                .size(11.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        )
                        .frame(false),
                    )
                    .clicked()
                {
                    self.show_logs = !self.show_logs;
                }
                if self.show_logs {
                    render_log_panel(ui, &self.logs);
                }
            });

        // --- Main Content ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_live_ticker(ui, &self.state);

                        ui.add_space(DesignSystem::SPACING_LARGE);

                        ui.columns(2, |cols| {
                            render_control_panel(&mut cols[0], self);
                            render_prediction_card(&mut cols[1], &mut self.state);
                        });
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::client::DashboardClient;
    use crate::application::worker::{DashboardCommand, DashboardEvent};
    use crate::config::Config;
    use crate::infrastructure::mock::MOCK_SNAPSHOT;
    use tokio::sync::mpsc;

    struct Harness {
        app: DashboardApp,
        _commands: mpsc::Receiver<DashboardCommand>,
        _events: crossbeam_channel::Sender<DashboardEvent>,
        _logs: crossbeam_channel::Sender<String>,
    }

    fn harness() -> Harness {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (log_tx, log_rx) = crossbeam_channel::unbounded();
        let client = DashboardClient::new(cmd_tx, event_rx, log_rx);
        Harness {
            app: DashboardApp::new(client, &Config::default()),
            _commands: cmd_rx,
            _events: event_tx,
            _logs: log_tx,
        }
    }

    fn run_frames(ctx: &egui::Context, app: &mut DashboardApp, frames: usize) -> usize {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 820.0),
            )),
            ..Default::default()
        };
        let mut shapes = 0;
        for _ in 0..frames {
            let output = ctx.run(input.clone(), |ctx| app.render(ctx));
            shapes = output.shapes.len();
        }
        shapes
    }

    #[test]
    fn test_renders_while_loading() {
        let mut harness = harness();
        assert!(harness.app.state.loading_snapshot);

        let ctx = egui::Context::default();
        ctx.set_visuals(DesignSystem::theme());
        assert!(run_frames(&ctx, &mut harness.app, 2) > 0);
    }

    #[test]
    fn test_renders_seeded_dashboard_with_prediction_and_logs() {
        let mut harness = harness();
        let app = &mut harness.app;
        app.state.load_snapshot(MOCK_SNAPSHOT);
        app.state.apply_prediction(MOCK_SNAPSHOT.current_price * 1.05);
        app.state.alert = Some("Prediction failed".to_string());
        app.state.is_live = true;
        app.logs.push("Dashboard seeded".to_string());
        app.show_logs = true;

        let ctx = egui::Context::default();
        assert!(run_frames(&ctx, app, 3) > 0);
    }

    #[test]
    fn test_renders_fallback_with_bearish_prediction() {
        let mut harness = harness();
        let app = &mut harness.app;
        app.state.load_fallback();
        app.state.apply_prediction(1.0);

        let ctx = egui::Context::default();
        assert!(run_frames(&ctx, app, 2) > 0);
    }
}
