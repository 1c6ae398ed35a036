use polars::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::stats::{self, PayloadBounds};
use crate::constants::columns::*;
use crate::constants::outcome::{FAILURE, SUCCESS};
use crate::constants::sites::ALL_VALUE;
use crate::error::LoadError;

/// Source columns every dataset file must provide
const REQUIRED_COLUMNS: [&str; 4] = [
    SRC_LAUNCH_SITE,
    SRC_PAYLOAD_MASS,
    SRC_CLASS,
    SRC_BOOSTER_CATEGORY,
];

/// One historical launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass: f64,
    pub outcome_class: i32,
    pub booster_version_category: String,
}

/// Read-only launch dataset backed by a normalized Polars DataFrame
///
/// The frame always has exactly the columns `LaunchSite` (String),
/// `PayloadMass` (Float64), `class` (Int32) and `BoosterVersionCategory`
/// (String), with no nulls.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    frame: DataFrame,
    bounds: PayloadBounds,
    /// Distinct launch sites in first-appearance order
    sites: Vec<String>,
    source_path: Option<PathBuf>,
}

impl LaunchDataset {
    /// Load the dataset from a file (CSV or Parquet)
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        profiling::scope!("load_dataset");

        // Surface a missing file as an I/O error before polars gets to it
        std::fs::metadata(path)?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LoadError::UnsupportedFormat {
                extension: String::new(),
            })?;

        let lazy = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(None)
                .finish()?,
            ext => {
                return Err(LoadError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        let raw = lazy.collect()?;
        tracing::debug!(
            path = %path.display(),
            rows = raw.height(),
            columns = raw.width(),
            "read dataset file"
        );

        Self::from_dataframe(raw, Some(path.to_path_buf()))
    }

    /// Create a dataset from an already-loaded DataFrame using the source column names
    pub fn from_dataframe(df: DataFrame, path: Option<PathBuf>) -> Result<Self, LoadError> {
        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|required| !present.iter().any(|name| name == *required))
        {
            return Err(LoadError::MissingColumn {
                column: missing.to_string(),
            });
        }

        if df.height() == 0 {
            return Err(LoadError::EmptyDataset);
        }

        // Non-strict casts turn unparsable cells into nulls, which validation rejects
        let frame = df
            .lazy()
            .select([
                col(SRC_LAUNCH_SITE).cast(DataType::String).alias(LAUNCH_SITE),
                col(SRC_PAYLOAD_MASS)
                    .cast(DataType::Float64)
                    .alias(PAYLOAD_MASS),
                col(SRC_CLASS).cast(DataType::Int32).alias(CLASS),
                col(SRC_BOOSTER_CATEGORY)
                    .cast(DataType::String)
                    .alias(BOOSTER_CATEGORY),
            ])
            .collect()?;

        validate(&frame)?;

        let payload = frame.column(PAYLOAD_MASS)?.as_materialized_series();
        let bounds = stats::payload_bounds(payload).ok_or(LoadError::EmptyDataset)?;

        let mut sites: Vec<String> = Vec::new();
        for site in frame
            .column(LAUNCH_SITE)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .flatten()
        {
            if site == ALL_VALUE {
                return Err(LoadError::InvalidValue {
                    column: SRC_LAUNCH_SITE.to_string(),
                    reason: format!("site name '{}' is reserved for all sites", ALL_VALUE),
                });
            }
            if !sites.iter().any(|s| s == site) {
                sites.push(site.to_string());
            }
        }

        Ok(Self {
            frame,
            bounds,
            sites,
            source_path: path,
        })
    }

    /// Get a reference to the normalized DataFrame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of launch records
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Global min/max of the payload column, computed once at load
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct launch sites in first-appearance order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Get the file path
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Sum of the raw outcome class column
    pub fn class_sum(&self) -> u64 {
        self.frame
            .column(CLASS)
            .and_then(|c| {
                c.as_materialized_series()
                    .i32()
                    .map(|ca| ca.into_iter().flatten().map(|v| v as u64).sum::<u64>())
            })
            .unwrap_or(0)
    }

    /// All records in file order
    pub fn records(&self) -> PolarsResult<Vec<LaunchRecord>> {
        records_from_frame(&self.frame)
    }
}

/// Convert a normalized frame (or a filtered slice of one) into row-major records
pub fn records_from_frame(frame: &DataFrame) -> PolarsResult<Vec<LaunchRecord>> {
    let sites = frame.column(LAUNCH_SITE)?.as_materialized_series().str()?;
    let payloads = frame.column(PAYLOAD_MASS)?.as_materialized_series().f64()?;
    let classes = frame.column(CLASS)?.as_materialized_series().i32()?;
    let boosters = frame
        .column(BOOSTER_CATEGORY)?
        .as_materialized_series()
        .str()?;

    Ok(sites
        .into_iter()
        .zip(payloads.into_iter())
        .zip(classes.into_iter())
        .zip(boosters.into_iter())
        .map(|(((site, payload), class), booster)| LaunchRecord {
            launch_site: site.unwrap_or_default().to_string(),
            payload_mass: payload.unwrap_or(f64::NAN),
            outcome_class: class.unwrap_or(FAILURE),
            booster_version_category: booster.unwrap_or_default().to_string(),
        })
        .collect())
}

/// Reject nulls, negative payloads and outcome classes other than 0/1
fn validate(frame: &DataFrame) -> Result<(), LoadError> {
    for name in [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY] {
        let nulls = frame.column(name)?.null_count();
        if nulls > 0 {
            return Err(LoadError::InvalidValue {
                column: source_name(name).to_string(),
                reason: format!("{} missing or unparsable value(s)", nulls),
            });
        }
    }

    let payloads = frame.column(PAYLOAD_MASS)?.as_materialized_series().f64()?;
    if let Some(bad) = payloads
        .into_iter()
        .flatten()
        .find(|v| !v.is_finite() || *v < 0.0)
    {
        return Err(LoadError::InvalidValue {
            column: SRC_PAYLOAD_MASS.to_string(),
            reason: format!("payload mass must be a non-negative number, got {}", bad),
        });
    }

    let classes = frame.column(CLASS)?.as_materialized_series().i32()?;
    if let Some(bad) = classes
        .into_iter()
        .flatten()
        .find(|v| *v != SUCCESS && *v != FAILURE)
    {
        return Err(LoadError::InvalidValue {
            column: SRC_CLASS.to_string(),
            reason: format!("outcome class must be 0 or 1, got {}", bad),
        });
    }

    Ok(())
}

fn source_name(normalized: &str) -> &'static str {
    match normalized {
        LAUNCH_SITE => SRC_LAUNCH_SITE,
        PAYLOAD_MASS => SRC_PAYLOAD_MASS,
        BOOSTER_CATEGORY => SRC_BOOSTER_CATEGORY,
        _ => SRC_CLASS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const HEADER: &str =
        "Flight Number,Launch Site,Mission Outcome,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_dataset_csv_loading() {
        let file = write_csv(&[
            HEADER,
            "1,CCAFS LC-40,Success,0,0,F9 v1.0  B0003,v1.0",
            "2,CCAFS LC-40,Success,0,525,F9 v1.0  B0005,v1.0",
            "3,VAFB SLC-4E,Success,1,9600,F9 FT B1029.1,FT",
            "4,KSC LC-39A,Success,1,2490,F9 FT B1031.1,FT",
        ]);

        let ds = LaunchDataset::load(file.path()).unwrap();

        assert_eq!(ds.height(), 4);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.payload_bounds(), PayloadBounds { min: 0.0, max: 9600.0 });
        assert_eq!(ds.class_sum(), 2);
        assert!(ds.has_site("KSC LC-39A"));
        assert!(!ds.has_site("ALL"));
        assert_eq!(ds.source_path(), Some(file.path()));

        let names: Vec<String> = ds
            .frame()
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec![LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY]);
    }

    #[test]
    fn test_records_follow_file_order() {
        let file = write_csv(&[
            HEADER,
            "1,CCAFS LC-40,Success,1,3170.5,F9 v1.1,v1.1",
            "2,VAFB SLC-4E,Failure,0,500,F9 v1.1,v1.1",
        ]);

        let records = LaunchDataset::load(file.path()).unwrap().records().unwrap();

        assert_eq!(
            records,
            vec![
                LaunchRecord {
                    launch_site: "CCAFS LC-40".to_string(),
                    payload_mass: 3170.5,
                    outcome_class: 1,
                    booster_version_category: "v1.1".to_string(),
                },
                LaunchRecord {
                    launch_site: "VAFB SLC-4E".to_string(),
                    payload_mass: 500.0,
                    outcome_class: 0,
                    booster_version_category: "v1.1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_dataset_parquet_loading() {
        let mut df = df!(
            SRC_LAUNCH_SITE => ["CCAFS LC-40", "KSC LC-39A"],
            SRC_PAYLOAD_MASS => [2500.0, 4700.0],
            SRC_CLASS => [1i64, 0],
            SRC_BOOSTER_CATEGORY => ["FT", "B4"]
        )
        .unwrap();
        let mut file = Builder::new().suffix(".parquet").tempfile().unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();

        let ds = LaunchDataset::load(file.path()).unwrap();
        assert_eq!(ds.height(), 2);
        assert_eq!(ds.payload_bounds(), PayloadBounds { min: 2500.0, max: 4700.0 });
        assert_eq!(ds.class_sum(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LaunchDataset::load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = LaunchDataset::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { ref extension } if extension == "xlsx"));
    }

    #[test]
    fn test_missing_required_column() {
        let file = write_csv(&[
            "Launch Site,class,Payload Mass (kg)",
            "CCAFS LC-40,1,500",
        ]);

        let err = LaunchDataset::load(file.path()).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingColumn { ref column } if column == SRC_BOOSTER_CATEGORY)
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = write_csv(&[HEADER]);
        let err = LaunchDataset::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn test_rejects_bad_class_value() {
        let file = write_csv(&[
            HEADER,
            "1,CCAFS LC-40,Success,2,500,F9 v1.0,v1.0",
        ]);

        let err = LaunchDataset::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == SRC_CLASS));
    }

    #[test]
    fn test_rejects_negative_payload() {
        let df = df!(
            SRC_LAUNCH_SITE => ["A"],
            SRC_PAYLOAD_MASS => [-1.0],
            SRC_CLASS => [1i32],
            SRC_BOOSTER_CATEGORY => ["FT"]
        )
        .unwrap();

        let err = LaunchDataset::from_dataframe(df, None).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidValue { ref column, .. } if column == SRC_PAYLOAD_MASS)
        );
    }

    #[test]
    fn test_rejects_reserved_site_name() {
        let df = df!(
            SRC_LAUNCH_SITE => ["CCAFS LC-40", "ALL"],
            SRC_PAYLOAD_MASS => [500.0, 600.0],
            SRC_CLASS => [1i32, 0],
            SRC_BOOSTER_CATEGORY => ["FT", "FT"]
        )
        .unwrap();

        let err = LaunchDataset::from_dataframe(df, None).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidValue { ref column, .. } if column == SRC_LAUNCH_SITE)
        );
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let df = df!(
            "Flight Number" => [1i64, 2],
            SRC_LAUNCH_SITE => ["A", "B"],
            SRC_PAYLOAD_MASS => [100i64, 200],
            SRC_CLASS => [1i64, 0],
            SRC_BOOSTER_CATEGORY => ["FT", "B4"]
        )
        .unwrap();

        let ds = LaunchDataset::from_dataframe(df, None).unwrap();
        assert_eq!(ds.frame().width(), 4);
        assert_eq!(ds.payload_bounds(), PayloadBounds { min: 100.0, max: 200.0 });
        assert!(ds.source_path().is_none());
    }
}
