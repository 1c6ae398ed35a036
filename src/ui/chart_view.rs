use std::f64::consts::{FRAC_PI_2, TAU};

use crate::app::DashboardApp;
use crate::callbacks::OutputId;
use crate::charts::{ChartSpec, PieChart, ScatterChart};
use crate::constants::layout::{MIN_CHART_HEIGHT, PIE_SEGMENTS};
use crate::ui::color32;
use eframe::egui::{self, RichText, Stroke};
use egui_plot::{Legend, Corner, Plot, PlotPoint, Points, Polygon, Text};

/// Radius at which percentage labels sit inside the unit pie
const LABEL_RADIUS: f64 = 0.65;

/// Render the success pie chart
pub fn render_pie_panel(app: &DashboardApp, ui: &mut egui::Ui) {
    profiling::scope!("render_pie_panel");

    match app.state.chart(OutputId::SuccessPieChart) {
        Some(ChartSpec::Pie(chart)) => draw_pie(chart, ui),
        Some(other) => {
            tracing::warn!(title = other.title(), "pie output holds a non-pie chart");
        }
        None => {
            ui.weak("Chart not rendered yet");
        }
    }
}

/// Render the payload vs. outcome scatter chart
pub fn render_scatter_panel(app: &DashboardApp, ui: &mut egui::Ui) {
    profiling::scope!("render_scatter_panel");

    let bounds = app.state.dataset.payload_bounds();
    match app.state.chart(OutputId::SuccessPayloadScatterChart) {
        Some(ChartSpec::Scatter(chart)) => draw_scatter(chart, (bounds.min, bounds.max), ui),
        Some(other) => {
            tracing::warn!(title = other.title(), "scatter output holds a non-scatter chart");
        }
        None => {
            ui.weak("Chart not rendered yet");
        }
    }
}

fn draw_pie(chart: &PieChart, ui: &mut egui::Ui) {
    ui.label(RichText::new(&chart.title).strong());

    if chart.is_empty() {
        ui.weak("No launches match the current selection");
        return;
    }

    let height = ui.available_height().max(MIN_CHART_HEIGHT);
    let text_color = ui.visuals().strong_text_color();
    let outline = Stroke::new(1.0, ui.visuals().panel_fill);

    Plot::new("success-pie-chart")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .legend(Legend::default().position(Corner::RightTop))
        .height(height)
        .show(ui, |plot_ui| {
            for wedge in chart.wedges() {
                let fill = color32(wedge.slice.color);
                for piece in wedge_polygons(wedge.start, wedge.end, PIE_SEGMENTS) {
                    plot_ui.polygon(
                        Polygon::new(wedge.slice.label.as_str(), piece)
                            .fill_color(fill)
                            .stroke(outline),
                    );
                }

                let mid = turn_to_angle((wedge.start + wedge.end) / 2.0);
                let share = (wedge.end - wedge.start) * 100.0;
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(LABEL_RADIUS * mid.cos(), LABEL_RADIUS * mid.sin()),
                        RichText::new(format!("{:.1}%", share)).color(text_color),
                    ),
                );
            }
        });
}

fn draw_scatter(chart: &ScatterChart, x_bounds: (f64, f64), ui: &mut egui::Ui) {
    ui.label(RichText::new(&chart.title).strong());

    if chart.point_count() == 0 {
        ui.weak("No launches in the selected payload range");
    }

    let height = ui.available_height().max(MIN_CHART_HEIGHT);

    Plot::new("success-payload-scatter-chart")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| {
            // Only the two outcome classes are meaningful ticks
            if mark.value == 0.0 || mark.value == 1.0 {
                format!("{:.0}", mark.value)
            } else {
                String::new()
            }
        })
        .include_x(x_bounds.0)
        .include_x(x_bounds.1)
        .include_y(-0.5)
        .include_y(1.5)
        .legend(Legend::default().position(Corner::RightTop))
        .height(height)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                plot_ui.points(
                    Points::new(series.name.as_str(), series.points.clone())
                        .radius(4.0)
                        .color(color32(series.color)),
                );
            }
        });
}

/// Angle in radians for a turn fraction measured clockwise from twelve o'clock
fn turn_to_angle(turn: f64) -> f64 {
    FRAC_PI_2 - TAU * turn
}

/// Outline polygons for a pie wedge on the unit circle
///
/// Wedges are split into pieces of at most a quarter turn so every polygon
/// stays convex and fills correctly. Each piece starts at the center.
pub fn wedge_polygons(start: f64, end: f64, segments_per_turn: usize) -> Vec<Vec<[f64; 2]>> {
    let mut pieces = Vec::new();
    if end <= start {
        return pieces;
    }

    let mut from = start;
    while from < end {
        let to = (from + 0.25).min(end);
        let segments = (((to - from) * segments_per_turn as f64).ceil() as usize).max(1);

        let mut piece = Vec::with_capacity(segments + 2);
        piece.push([0.0, 0.0]);
        for i in 0..=segments {
            let angle = turn_to_angle(from + (to - from) * i as f64 / segments as f64);
            piece.push([angle.cos(), angle.sin()]);
        }
        pieces.push(piece);
        from = to;
    }
    pieces
}
