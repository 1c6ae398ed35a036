//! Error types for the launch dashboard
//!
//! Loading problems are fatal at startup and are reported through
//! [`LoadError`]. Malformed filter selections are described by
//! [`SelectionError`]; the widgets never produce them, so they only reach
//! the user as a rejected web request. [`DashError`] wraps both together with
//! the runtime failures of the shells.

use thiserror::Error;

/// Errors raised while reading the launch dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("Failed to access dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Polars could not parse the file
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// A required column is absent from the header
    #[error("Required column '{column}' not found in dataset")]
    MissingColumn { column: String },

    /// No rows at all, so payload bounds are undefined
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,

    /// A cell violates the record schema
    #[error("Invalid value in column '{column}': {reason}")]
    InvalidValue { column: String, reason: String },
}

/// Errors describing a filter selection that cannot be evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Payload range bound is not a finite number")]
    NotFinite,

    #[error("Payload range is inverted: {min} > {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("Payload range [{min}, {max}] is outside the dataset bounds [{lower}, {upper}]")]
    OutOfBounds {
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    },

    #[error("Unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("Malformed value for '{key}': {value}")]
    Malformed { key: String, value: String },
}

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Polars failure while filtering or aggregating a loaded frame
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Socket or file I/O outside of dataset loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Native window failed to start or crashed
    #[error("UI error: {0}")]
    Ui(String),

    /// Chart could not be drawn to SVG
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

/// UI-friendly error message formatting
impl DashError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashError::Load(LoadError::Io(e)) => format!("File error: {}", e),
            DashError::Load(LoadError::Parse(e)) => format!("Data error: {}", e),
            DashError::Load(LoadError::UnsupportedFormat { extension }) => {
                format!("Unsupported file format: '.{}'", extension)
            }
            DashError::Load(LoadError::MissingColumn { column }) => {
                format!("Column '{}' not found", column)
            }
            DashError::Load(LoadError::EmptyDataset) => "Dataset is empty".to_string(),
            DashError::Load(LoadError::InvalidValue { column, reason }) => {
                format!("Bad value in '{}': {}", column, reason)
            }
            DashError::Selection(e) => format!("Invalid selection: {}", e),
            DashError::Polars(e) => format!("Data error: {}", e),
            DashError::Io(e) => format!("I/O error: {}", e),
            DashError::Config(msg) => format!("Config error: {}", msg),
            DashError::Json(e) => format!("JSON error: {}", e),
            DashError::Ui(msg) => format!("UI error: {}", msg),
            DashError::Render(msg) => format!("Chart rendering failed: {}", msg),
        }
    }

    /// Get a short title for the error (for the UI error banner)
    pub fn title(&self) -> &'static str {
        match self {
            DashError::Load(_) => "Dataset Error",
            DashError::Selection(_) => "Invalid Selection",
            DashError::Polars(_) => "Data Error",
            DashError::Io(_) => "I/O Error",
            DashError::Config(_) => "Configuration Error",
            DashError::Json(_) => "JSON Error",
            DashError::Ui(_) => "UI Error",
            DashError::Render(_) => "Render Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: DashError = LoadError::MissingColumn {
            column: "Launch Site".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Column 'Launch Site' not found");
        assert_eq!(err.title(), "Dataset Error");

        let err: DashError = SelectionError::InvertedRange {
            min: 5000.0,
            max: 1000.0,
        }
        .into();
        assert_eq!(
            err.user_message(),
            "Invalid selection: Payload range is inverted: 5000 > 1000"
        );
        assert_eq!(err.title(), "Invalid Selection");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));

        let dash_err: DashError = load_err.into();
        assert!(matches!(dash_err, DashError::Load(LoadError::Io(_))));
    }
}
