//! Application-wide constants and default values
//!
//! This module centralizes the dataset contract, widget defaults and layout
//! numbers used throughout the application.

/// Column names of the launch dataset
pub mod columns {
    /// Launch site column as it appears in the source file
    pub const SRC_LAUNCH_SITE: &str = "Launch Site";

    /// Payload mass column as it appears in the source file
    pub const SRC_PAYLOAD_MASS: &str = "Payload Mass (kg)";

    /// Outcome class column as it appears in the source file
    pub const SRC_CLASS: &str = "class";

    /// Booster version category column as it appears in the source file
    pub const SRC_BOOSTER_CATEGORY: &str = "Booster Version Category";

    /// Normalized names used inside the loaded frame
    pub const LAUNCH_SITE: &str = "LaunchSite";
    pub const PAYLOAD_MASS: &str = "PayloadMass";
    pub const CLASS: &str = "class";
    pub const BOOSTER_CATEGORY: &str = "BoosterVersionCategory";

    /// Aggregated value column produced by the engine
    pub const COUNT: &str = "count";
}

/// Site selector values
pub mod sites {
    /// Wire value of the "all sites" sentinel
    pub const ALL_VALUE: &str = "ALL";

    /// Display label of the "all sites" sentinel
    pub const ALL_LABEL: &str = "ALL SITES";

    /// Dropdown placeholder text
    pub const PLACEHOLDER: &str = "Select a Launch Site here";
}

/// Outcome class values
pub mod outcome {
    pub const SUCCESS: i32 = 1;
    pub const FAILURE: i32 = 0;

    pub const SUCCESS_LABEL: &str = "Success";
    pub const FAILURE_LABEL: &str = "Failure";
}

/// Payload range slider defaults
pub mod slider {
    /// Slider step in kilograms
    pub const DEFAULT_STEP: f64 = 1000.0;

    /// Inset applied to both ends of the initial range
    pub const DEFAULT_INITIAL_INSET: f64 = 0.0;
}

/// Chart text
pub mod charts {
    pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
    pub const PAYLOAD_AXIS: &str = "Payload Mass (kg)";
    pub const CLASS_AXIS: &str = "class";
    pub const PAYLOAD_RANGE_LABEL: &str = "Payload range (Kg):";
}

/// Web shell defaults
pub mod server {
    /// Default listen address
    pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";

    /// SVG canvas sizes
    pub const PIE_SIZE: u32 = 420;
    pub const SCATTER_WIDTH: u32 = 900;
    pub const SCATTER_HEIGHT: u32 = 420;
}

/// UI layout defaults
pub mod layout {
    /// Initial native window size
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 900.0;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;

    /// Minimum chart height
    pub const MIN_CHART_HEIGHT: f32 = 200.0;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;

    /// Number of line segments used to approximate a full pie circle
    pub const PIE_SEGMENTS: usize = 128;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "spacex_dash.json";

    /// Dataset file name used when nothing else is configured
    pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

    /// Native window title
    pub const DEFAULT_WINDOW_TITLE: &str = "SpaceX Launch Records Dashboard";
}
