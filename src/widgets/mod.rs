//! Reusable UI widgets for the dashboard controls

mod range_slider;
mod site_dropdown;

pub use range_slider::{PayloadRangeSlider, link_range};
pub use site_dropdown::SiteDropdown;
