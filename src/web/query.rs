//! Selection parameters for the dashboard form and JSON endpoints

use serde::Deserialize;

use crate::data::LaunchDataset;
use crate::error::SelectionError;
use crate::state::{FilterSelection, PayloadRange, SiteChoice};
use crate::widgets::link_range;

/// `site`, `min` and `max` as sent by the form
///
/// Numbers stay text here so a bad value is reported as
/// [`SelectionError::Malformed`] with the offending key.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub site: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

fn parse_bound(value: Option<&str>, key: &str, default: f64) -> Result<f64, SelectionError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<f64>().map_err(|_| SelectionError::Malformed {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl SelectionQuery {
    fn site_choice(&self) -> SiteChoice {
        match self.site.as_deref().map(str::trim) {
            None | Some("") => SiteChoice::All,
            Some(value) => SiteChoice::from_value(value),
        }
    }

    fn bounds_or(&self, lower: f64, upper: f64) -> Result<(f64, f64), SelectionError> {
        let min = parse_bound(self.min.as_deref(), "min", lower)?;
        let max = parse_bound(self.max.as_deref(), "max", upper)?;
        if !min.is_finite() || !max.is_finite() {
            return Err(SelectionError::NotFinite);
        }
        Ok((min, max))
    }
}

/// Build a selection for the JSON endpoint
///
/// Missing values fall back to all sites and the full payload range.
/// Ranges reaching past the dataset bounds are clamped, as the slider would.
/// Unknown sites, unparsable numbers and inverted or non-finite ranges are
/// rejected.
pub fn selection_from_query(
    query: &SelectionQuery,
    dataset: &LaunchDataset,
) -> Result<FilterSelection, SelectionError> {
    let bounds = dataset.payload_bounds();
    let (min, max) = query.bounds_or(bounds.min, bounds.max)?;
    let range = PayloadRange::new(min, max)?.clamp_to(bounds);

    let selection = FilterSelection::new(query.site_choice(), range);
    selection.validate(dataset)?;
    Ok(selection)
}

/// Build a selection from the page form
///
/// The two number inputs can cross. A minimum typed past the maximum pulls
/// the maximum up to it, the way the slider's handles push each other.
pub fn selection_from_form(
    query: &SelectionQuery,
    dataset: &LaunchDataset,
) -> Result<FilterSelection, SelectionError> {
    let bounds = dataset.payload_bounds();
    let (min, max) = query.bounds_or(bounds.min, bounds.max)?;
    let (min, max) = link_range(min, max, true, bounds);

    let selection = FilterSelection::new(query.site_choice(), PayloadRange::new(min, max)?);
    selection.validate(dataset)?;
    Ok(selection)
}
