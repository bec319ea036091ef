use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::format_kilo;
use eframe::egui;
use egui_plot::{HLine, Line, LineStyle, Plot};

/// Filled price line over time-labelled samples.
///
/// Samples are plotted at x = 0, 1, 2... and the x axis shows their labels.
pub fn render_area_chart(
    ui: &mut egui::Ui,
    id: &str,
    samples: &[(String, f64)],
    color: egui::Color32,
    height: f32,
    reference: Option<f64>,
) {
    let labels: Vec<String> = samples.iter().map(|(label, _)| label.clone()).collect();
    let points: Vec<[f64; 2]> = samples
        .iter()
        .enumerate()
        .map(|(i, (_, price))| [i as f64, *price])
        .collect();
    let floor = samples
        .iter()
        .map(|(_, price)| *price)
        .fold(f64::INFINITY, f64::min);

    Plot::new(id)
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .y_axis_position(egui_plot::HPlacement::Right)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if index < 0.0 || (mark.value - index).abs() > 1e-6 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format_kilo(mark.value))
        .show(ui, |plot_ui| {
            if points.is_empty() {
                return;
            }
            plot_ui.line(
                Line::new(id.to_string(), points)
                    .color(color)
                    .width(2.5)
                    .fill(floor as f32),
            );
            if let Some(y) = reference {
                plot_ui.hline(
                    HLine::new("Current", y)
                        .color(DesignSystem::TEXT_MUTED)
                        .style(LineStyle::dashed_loose()),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(samples: &[(String, f64)], reference: Option<f64>) -> usize {
        let ctx = egui::Context::default();
        let mut shapes = 0;
        for _ in 0..2 {
            let output = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_area_chart(
                        ui,
                        "chart",
                        samples,
                        DesignSystem::ACCENT_PRIMARY,
                        120.0,
                        reference,
                    );
                });
            });
            shapes = output.shapes.len();
        }
        shapes
    }

    #[test]
    fn test_empty_series_still_draws_frame() {
        assert!(draw(&[], None) > 0);
    }

    #[test]
    fn test_series_with_reference_line() {
        let samples: Vec<(String, f64)> = [
            ("00:01", 43_200.0),
            ("00:02", 43_260.5),
            ("00:03", 43_190.0),
        ]
        .iter()
        .map(|(label, price)| (label.to_string(), *price))
        .collect();
        assert!(draw(&samples, Some(43_250.0)) > 0);
        assert!(draw(&samples[..1], None) > 0);
    }
}
