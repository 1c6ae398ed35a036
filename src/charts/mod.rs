//! Chart descriptions derived from filtered launch data
//!
//! A [`ChartSpec`] is plain data. The native window draws it with egui_plot,
//! the web page renders it to SVG and the JSON endpoint serializes it as is.

mod palette;
mod pie;
mod scatter;

pub use palette::Rgb;
pub use pie::{PieChart, render_pie};
pub use scatter::{ScatterChart, render_scatter};

use serde::Serialize;

/// A renderable chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(p) => &p.title,
            ChartSpec::Scatter(s) => &s.title,
        }
    }
}
