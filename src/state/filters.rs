//! Filter selection: the launch site and payload range chosen by the user

use serde::Serialize;
use std::fmt;

use crate::constants::sites::{ALL_LABEL, ALL_VALUE};
use crate::data::{LaunchDataset, PayloadBounds};
use crate::error::SelectionError;

/// Site selector value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum SiteChoice {
    /// Every launch site
    #[default]
    All,
    /// A single named site
    Site(String),
}

impl SiteChoice {
    /// Parse a dropdown value, mapping the `ALL` sentinel to [`SiteChoice::All`]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_VALUE {
            SiteChoice::All
        } else {
            SiteChoice::Site(value.to_string())
        }
    }

    /// Value submitted by the dropdown
    pub fn value(&self) -> &str {
        match self {
            SiteChoice::All => ALL_VALUE,
            SiteChoice::Site(name) => name,
        }
    }

    /// Text shown in the dropdown
    pub fn label(&self) -> &str {
        match self {
            SiteChoice::All => ALL_LABEL,
            SiteChoice::Site(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteChoice::All)
    }
}

impl fmt::Display for SiteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SiteChoice> for String {
    fn from(choice: SiteChoice) -> Self {
        choice.value().to_string()
    }
}

/// Inclusive payload range, always finite with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    min: f64,
    max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Result<Self, SelectionError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SelectionError::NotFinite);
        }
        if min > max {
            return Err(SelectionError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Check the range lies within the dataset bounds
    pub fn within(self, bounds: PayloadBounds) -> Result<Self, SelectionError> {
        if bounds.contains(self.min) && bounds.contains(self.max) {
            Ok(self)
        } else {
            Err(SelectionError::OutOfBounds {
                min: self.min,
                max: self.max,
                lower: bounds.min,
                upper: bounds.max,
            })
        }
    }

    /// Clamp both ends into the dataset bounds
    pub fn clamp_to(self, bounds: PayloadBounds) -> Self {
        Self {
            min: bounds.clamp(self.min),
            max: bounds.clamp(self.max),
        }
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

/// Current site and payload range chosen in the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    site: SiteChoice,
    payload_range: PayloadRange,
}

impl FilterSelection {
    pub fn new(site: SiteChoice, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }

    /// All sites and the full payload range
    pub fn all(bounds: PayloadBounds) -> Self {
        Self::new(SiteChoice::All, bounds.into())
    }

    /// All sites with the payload range shrunk by `inset` at both ends
    ///
    /// Falls back to the full range when the inset would invert it.
    pub fn initial(bounds: PayloadBounds, inset: f64) -> Self {
        let inset = inset.max(0.0);
        let range = PayloadRange::new(bounds.min + inset, bounds.max - inset)
            .unwrap_or_else(|_| bounds.into());
        Self::new(SiteChoice::All, range)
    }

    pub fn site(&self) -> &SiteChoice {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    pub fn set_site(&mut self, site: SiteChoice) {
        self.site = site;
    }

    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.payload_range = range;
    }

    /// Check the selection against a loaded dataset: known site and in-bounds range
    pub fn validate(&self, dataset: &LaunchDataset) -> Result<(), SelectionError> {
        if let SiteChoice::Site(name) = &self.site {
            if !dataset.has_site(name) {
                return Err(SelectionError::UnknownSite(name.clone()));
            }
        }
        self.payload_range.within(dataset.payload_bounds())?;
        Ok(())
    }
}
