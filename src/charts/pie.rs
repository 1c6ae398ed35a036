use serde::Serialize;

use super::ChartSpec;
use super::palette::{Rgb, series_color};
use crate::data::CategoryCount;
use crate::state::SiteChoice;

/// Pie chart description: one slice per category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: Rgb,
}

/// Angular extent of a non-empty slice, as fractions of a full turn
/// measured clockwise from twelve o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge<'a> {
    pub slice: &'a PieSlice,
    pub start: f64,
    pub end: f64,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of the total held by one slice, 0 when the chart is empty
    pub fn fraction(&self, slice: &PieSlice) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            slice.value as f64 / total as f64
        }
    }

    /// Consecutive wedges for every slice with a non-zero value
    pub fn wedges(&self) -> Vec<Wedge<'_>> {
        let mut start = 0.0;
        let mut wedges = Vec::with_capacity(self.slices.len());
        for slice in self.slices.iter().filter(|s| s.value > 0) {
            let end = start + self.fraction(slice);
            wedges.push(Wedge { slice, start, end });
            start = end;
        }
        wedges
    }
}

/// Map aggregated counts to a pie chart: slice = category, value = count
pub fn render_pie(counts: &[CategoryCount], site: &SiteChoice) -> ChartSpec {
    let title = match site {
        SiteChoice::All => "Total Successful Launches by Site".to_string(),
        SiteChoice::Site(name) => format!("Total Success vs. Failure for site {}", name),
    };

    let slices = counts
        .iter()
        .enumerate()
        .map(|(idx, c)| PieSlice {
            label: c.category.clone(),
            value: c.count,
            color: series_color(idx),
        })
        .collect();

    ChartSpec::Pie(PieChart { title, slices })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie(counts: &[(&str, u64)]) -> PieChart {
        let counts: Vec<CategoryCount> = counts
            .iter()
            .map(|(c, n)| CategoryCount::new(*c, *n))
            .collect();
        match render_pie(&counts, &SiteChoice::All) {
            ChartSpec::Pie(p) => p,
            other => panic!("expected pie, got {:?}", other),
        }
    }

    #[test]
    fn test_slices_follow_counts() {
        let chart = pie(&[("CCAFS LC-40", 7), ("KSC LC-39A", 10), ("VAFB SLC-4E", 4)]);

        assert_eq!(chart.title, "Total Successful Launches by Site");
        assert_eq!(chart.slices.len(), 3);
        assert_eq!(chart.slices[1].label, "KSC LC-39A");
        assert_eq!(chart.slices[1].value, 10);
        assert_ne!(chart.slices[0].color, chart.slices[1].color);
        assert_eq!(chart.total(), 21);
    }

    #[test]
    fn test_site_title() {
        let counts = vec![CategoryCount::new("Success", 3), CategoryCount::new("Failure", 1)];
        let spec = render_pie(&counts, &SiteChoice::Site("KSC LC-39A".into()));
        assert_eq!(spec.title(), "Total Success vs. Failure for site KSC LC-39A");
    }

    #[test]
    fn test_wedges_cover_full_turn() {
        let chart = pie(&[("A", 1), ("B", 0), ("C", 3)]);
        let wedges = chart.wedges();

        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].slice.label, "A");
        assert_eq!(wedges[0].start, 0.0);
        assert_eq!(wedges[0].end, 0.25);
        assert_eq!(wedges[1].slice.label, "C");
        assert!((wedges[1].end - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_renders_empty_chart() {
        let chart = pie(&[]);
        assert!(chart.slices.is_empty());
        assert!(chart.is_empty());
        assert!(chart.wedges().is_empty());

        let zeros = pie(&[("A", 0)]);
        assert!(zeros.is_empty());
        assert_eq!(zeros.fraction(&zeros.slices[0]), 0.0);
    }
}
