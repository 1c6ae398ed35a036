//! Server-side SVG rendering of chart specs for the web page

use plotters::element::Pie;
use plotters::prelude::*;

use crate::charts::{PieChart, Rgb, ScatterChart};
use crate::data::PayloadBounds;
use crate::error::{DashError, Result};

const LEGEND_WIDTH: u32 = 220;
const POINT_RADIUS: i32 = 5;
const MUTED: RGBColor = RGBColor(136, 136, 136);

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn render_error<E: std::fmt::Display>(context: &str) -> impl Fn(E) -> DashError + '_ {
    move |e| DashError::Render(format!("{context}: {e}"))
}

/// Pie chart `size` pixels tall with the legend on the right
///
/// Slices start at twelve o'clock and run clockwise, zero slices only
/// appear in the legend.
pub fn pie_svg(chart: &PieChart, size: u32) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (size + LEGEND_WIDTH, size)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error("Failed to fill background"))?;

        let half = (size / 2) as i32;
        let wedges = chart.wedges();
        if wedges.is_empty() {
            root.draw(&Text::new(
                "No data",
                (half - 28, half - 8),
                ("sans-serif", 16).into_font().color(&MUTED),
            ))
            .map_err(render_error("Failed to draw placeholder"))?;
        } else {
            let center = (half, half);
            let radius = f64::from(size) / 2.0 - 10.0;
            let sizes: Vec<f64> = wedges.iter().map(|w| w.slice.value as f64).collect();
            let colors: Vec<RGBColor> = wedges.iter().map(|w| color(w.slice.color)).collect();
            let labels: Vec<&str> = wedges.iter().map(|_| "").collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
            root.draw(&pie).map_err(render_error("Failed to draw pie"))?;
        }

        let x = size as i32 + 10;
        for (idx, slice) in chart.slices.iter().enumerate() {
            let y = 20 + idx as i32 * 22;
            root.draw(&Rectangle::new([(x, y), (x + 12, y + 12)], color(slice.color).filled()))
                .map_err(render_error("Failed to draw legend"))?;
            root.draw(&Text::new(
                format!("{} ({})", slice.label, slice.value),
                (x + 18, y),
                ("sans-serif", 12).into_font(),
            ))
            .map_err(render_error("Failed to draw legend"))?;
        }

        root.present().map_err(render_error("Failed to finish pie"))?;
    }
    Ok(buffer)
}

/// Horizontal axis range: the dataset bounds with a small margin
fn x_axis(bounds: PayloadBounds) -> (f64, f64) {
    let pad = if bounds.span() > 0.0 { bounds.span() * 0.05 } else { 1.0 };
    (bounds.min - pad, bounds.max + pad)
}

/// Scatter chart of payload against outcome, one colored series per booster category
///
/// The x axis always spans the dataset bounds so moving the range slider
/// does not rescale the chart.
pub fn scatter_svg(chart: &ScatterChart, bounds: PayloadBounds, width: u32, height: u32) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error("Failed to fill background"))?;

        let (x_min, x_max) = x_axis(bounds);
        let mut plot = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, -0.5f64..1.5f64)
            .map_err(render_error("Failed to build chart"))?;

        plot.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| {
                if *y == 0.0 || *y == 1.0 {
                    format!("{:.0}", y)
                } else {
                    String::new()
                }
            })
            .draw()
            .map_err(render_error("Failed to draw axes"))?;

        if chart.series.is_empty() {
            root.draw(&Text::new(
                "No launches in range",
                ((width / 2) as i32 - 80, (height / 2) as i32 - 8),
                ("sans-serif", 16).into_font().color(&MUTED),
            ))
            .map_err(render_error("Failed to draw placeholder"))?;
        }

        for series in &chart.series {
            let series_color = color(series.color);
            plot.draw_series(
                series
                    .points
                    .iter()
                    .map(|p| Circle::new((p[0], p[1]), POINT_RADIUS, series_color.mix(0.8).filled())),
            )
            .map_err(render_error("Failed to draw series"))?
            .label(series.name.as_str())
            .legend(move |(x, y)| Circle::new((x + 5, y), POINT_RADIUS, series_color.filled()));
        }

        if !chart.series.is_empty() {
            plot.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_error("Failed to draw legend"))?;
        }

        root.present().map_err(render_error("Failed to finish scatter"))?;
    }
    Ok(buffer)
}
