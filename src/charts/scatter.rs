use serde::Serialize;

use super::ChartSpec;
use super::palette::{Rgb, series_color};
use crate::constants::charts::{CLASS_AXIS, PAYLOAD_AXIS};
use crate::data::LaunchRecord;
use crate::state::SiteChoice;

/// Scatter chart description: x = payload mass, y = outcome class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One series per booster version category, in first-appearance order
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Map payload/outcome rows to a scatter chart colored by booster category
pub fn render_scatter(rows: &[LaunchRecord], site: &SiteChoice) -> ChartSpec {
    let title = match site {
        SiteChoice::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteChoice::Site(name) => {
            format!("Correlation between Payload and Success for site {}", name)
        }
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for row in rows {
        let point = [row.payload_mass, f64::from(row.outcome_class)];
        match series
            .iter()
            .position(|s| s.name == row.booster_version_category)
        {
            Some(idx) => series[idx].points.push(point),
            None => {
                let color = series_color(series.len());
                series.push(ScatterSeries {
                    name: row.booster_version_category.clone(),
                    color,
                    points: vec![point],
                });
            }
        }
    }

    ChartSpec::Scatter(ScatterChart {
        title,
        x_label: PAYLOAD_AXIS.to_string(),
        y_label: CLASS_AXIS.to_string(),
        series,
    })
}
