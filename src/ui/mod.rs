mod chart_view;
mod controls;
mod status_bar;

pub use chart_view::{render_pie_panel, render_scatter_panel};
pub use controls::{render_controls, render_error_banner, render_header};
pub use status_bar::render_status_bar;

use crate::charts::Rgb;
use eframe::egui::Color32;

/// Convert a chart color to an egui color
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
