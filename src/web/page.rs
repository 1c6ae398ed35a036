//! HTML page for the web dashboard

use super::svg::{pie_svg, scatter_svg};
use crate::callbacks::OutputId;
use crate::charts::ChartSpec;
use crate::constants::charts::{DASHBOARD_TITLE, PAYLOAD_RANGE_LABEL};
use crate::constants::server::{PIE_SIZE, SCATTER_HEIGHT, SCATTER_WIDTH};
use crate::constants::sites::PLACEHOLDER;
use crate::data::{LaunchDataset, PayloadBounds};
use crate::error::Result;
use crate::state::{FilterSelection, SiteChoice};

const STYLE: &str = "body{font-family:sans-serif;margin:20px;color:#503D36}\
h1{text-align:center;font-size:40px}\
form{display:flex;gap:16px;align-items:center;flex-wrap:wrap}\
select{min-width:260px;padding:4px}\
input[type=number]{width:100px}\
.chart{margin-top:20px}\
.chart h2{font-size:18px}";

/// Escape text for use inside HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn site_options(dataset: &LaunchDataset, selected: &SiteChoice) -> String {
    std::iter::once(SiteChoice::All)
        .chain(dataset.sites().iter().cloned().map(SiteChoice::Site))
        .map(|choice| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(choice.value()),
                if &choice == selected { " selected" } else { "" },
                escape_html(choice.label())
            )
        })
        .collect()
}

fn chart_section(output: OutputId, chart: &ChartSpec, bounds: PayloadBounds) -> Result<String> {
    let svg = match chart {
        ChartSpec::Pie(pie) => pie_svg(pie, PIE_SIZE)?,
        ChartSpec::Scatter(scatter) => scatter_svg(scatter, bounds, SCATTER_WIDTH, SCATTER_HEIGHT)?,
    };
    Ok(format!(
        r#"<div class="chart" id="{}"><h2>{}</h2>{}</div>"#,
        output.as_str(),
        escape_html(chart.title()),
        svg
    ))
}

/// Full dashboard page: title, filter form and one section per rendered output
pub fn dashboard_page(
    dataset: &LaunchDataset,
    selection: &FilterSelection,
    charts: &[(OutputId, ChartSpec)],
    step: f64,
) -> Result<String> {
    let bounds = dataset.payload_bounds();
    let range = selection.payload_range();

    let mut body = format!(
        r#"<form method="get" action="/">
<label>Launch Site: <select id="site-dropdown" name="site" title="{placeholder}" onchange="this.form.submit()">{options}</select></label>
<span id="payload-slider">{label}
<input type="number" name="min" value="{min}" min="{lo}" max="{hi}" step="{step}" onchange="this.form.submit()">
<input type="number" name="max" value="{max}" min="{lo}" max="{hi}" step="{step}" onchange="this.form.submit()">
</span>
<noscript><button type="submit">Apply</button></noscript>
</form>
"#,
        placeholder = escape_html(PLACEHOLDER),
        options = site_options(dataset, selection.site()),
        label = escape_html(PAYLOAD_RANGE_LABEL),
        min = range.min(),
        max = range.max(),
        lo = bounds.min,
        hi = bounds.max,
        step = step
    );

    for (output, chart) in charts {
        body.push_str(&chart_section(*output, chart, bounds)?);
        body.push('\n');
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(DASHBOARD_TITLE),
        style = STYLE,
        body = body
    ))
}
