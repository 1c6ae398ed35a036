//! Filter and aggregate operations feeding the two charts
//!
//! Both operations are pure: they read the shared dataset, build a lazy
//! polars query for the current selection and materialize the small result.

use polars::prelude::*;
use serde::Serialize;

use super::source::{LaunchDataset, LaunchRecord, records_from_frame};
use crate::constants::columns::{BOOSTER_CATEGORY, CLASS, COUNT, LAUNCH_SITE, PAYLOAD_MASS};
use crate::constants::outcome::{FAILURE, FAILURE_LABEL, SUCCESS, SUCCESS_LABEL};
use crate::error::Result;
use crate::state::{FilterSelection, SiteChoice};

/// One pie slice worth of aggregated data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// Counts for the success pie chart
///
/// With [`SiteChoice::All`] every site gets one entry holding the sum of its
/// raw `class` column, in first-appearance order. With a specific site the
/// result is exactly `Success` then `Failure` for that site; the payload range
/// is not applied. A site absent from the dataset yields no entries.
pub fn success_counts_by_site(
    dataset: &LaunchDataset,
    selection: &FilterSelection,
) -> Result<Vec<CategoryCount>> {
    profiling::scope!("success_counts_by_site");

    match selection.site() {
        SiteChoice::All => {
            let grouped = dataset
                .frame()
                .clone()
                .lazy()
                .group_by_stable([col(LAUNCH_SITE)])
                .agg([col(CLASS).sum().alias(COUNT)])
                .collect()?;

            let sites = grouped.column(LAUNCH_SITE)?.as_materialized_series().str()?;
            let counts = count_column(&grouped)?;

            Ok(sites
                .into_iter()
                .zip(counts)
                .map(|(site, count)| CategoryCount::new(site.unwrap_or_default(), count))
                .collect())
        }
        SiteChoice::Site(site) => {
            let grouped = dataset
                .frame()
                .clone()
                .lazy()
                .filter(col(LAUNCH_SITE).eq(lit(site.as_str())))
                .group_by([col(CLASS)])
                .agg([len().alias(COUNT)])
                .collect()?;

            if grouped.height() == 0 {
                return Ok(Vec::new());
            }

            let classes = grouped.column(CLASS)?.as_materialized_series().i32()?;
            let counts = count_column(&grouped)?;

            let mut successes = 0;
            let mut failures = 0;
            for (class, count) in classes.into_iter().zip(counts) {
                match class {
                    Some(SUCCESS) => successes += count,
                    Some(FAILURE) => failures += count,
                    _ => {}
                }
            }

            Ok(vec![
                CategoryCount::new(SUCCESS_LABEL, successes),
                CategoryCount::new(FAILURE_LABEL, failures),
            ])
        }
    }
}

/// Rows for the payload/outcome scatter chart
///
/// Keeps records whose payload lies in the inclusive selection range. A
/// specific site is filtered first, then the range is applied to that subset;
/// [`SiteChoice::All`] skips the site filter. Rows keep dataset order.
pub fn payload_outcome_rows(
    dataset: &LaunchDataset,
    selection: &FilterSelection,
) -> Result<Vec<LaunchRecord>> {
    profiling::scope!("payload_outcome_rows");

    let mut lazy = dataset.frame().clone().lazy();
    if let SiteChoice::Site(site) = selection.site() {
        lazy = lazy.filter(col(LAUNCH_SITE).eq(lit(site.as_str())));
    }

    let range = selection.payload_range();
    let filtered = lazy
        .filter(
            col(PAYLOAD_MASS)
                .gt_eq(lit(range.min()))
                .and(col(PAYLOAD_MASS).lt_eq(lit(range.max()))),
        )
        .select([
            col(LAUNCH_SITE),
            col(PAYLOAD_MASS),
            col(CLASS),
            col(BOOSTER_CATEGORY),
        ])
        .collect()?;

    tracing::trace!(
        site = %selection.site(),
        min = range.min(),
        max = range.max(),
        rows = filtered.height(),
        "filtered payload rows"
    );

    Ok(records_from_frame(&filtered)?)
}

/// Read the aggregated count column as u64 whatever integer type polars produced
fn count_column(frame: &DataFrame) -> PolarsResult<Vec<u64>> {
    let counts = frame
        .column(COUNT)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;
    Ok(counts.u64()?.into_iter().map(|c| c.unwrap_or(0)).collect())
}
