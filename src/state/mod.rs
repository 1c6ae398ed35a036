//! Application state management
//!
//! The dataset is shared and immutable; everything else here is the
//! ephemeral state of one native dashboard window.

mod filters;
mod ui;

pub use filters::{FilterSelection, PayloadRange, SiteChoice};
pub use ui::UiState;

use crate::callbacks::{CallbackRegistry, InputId, OutputId};
use crate::charts::ChartSpec;
use crate::config::DashboardConfig;
use crate::data::LaunchDataset;
use std::collections::HashMap;
use std::sync::Arc;

/// Main application state container
pub struct AppState {
    /// Launch data, loaded once before the window opens
    pub dataset: Arc<LaunchDataset>,

    /// Current widget values
    pub selection: FilterSelection,

    /// Latest chart for each output area
    pub charts: HashMap<OutputId, ChartSpec>,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    /// Create the state for the default selection; charts are filled by [`AppState::render_all`]
    pub fn new(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Self {
        let selection =
            FilterSelection::initial(dataset.payload_bounds(), config.initial_range_inset);
        Self {
            dataset,
            selection,
            charts: HashMap::new(),
            ui: UiState {
                dark_mode: config.dark_mode,
                slider_step: config.slider_step,
                error_message: None,
            },
        }
    }

    /// Render every output for the current selection
    pub fn render_all(&mut self, registry: &CallbackRegistry) {
        match registry.render_all(&self.dataset, &self.selection) {
            Ok(charts) => {
                self.charts.extend(charts);
                self.ui.clear_error();
            }
            Err(e) => {
                tracing::error!(error = %e, "initial render failed");
                self.ui.set_error(e.user_message());
            }
        }
    }

    /// Re-render the outputs that depend on `input`, keeping old charts on failure
    pub fn apply_change(&mut self, input: InputId, registry: &CallbackRegistry) {
        match registry.on_change(input, &self.dataset, &self.selection) {
            Ok(charts) => {
                self.charts.extend(charts);
                self.ui.clear_error();
            }
            Err(e) => {
                tracing::error!(error = %e, %input, "chart update failed");
                self.ui.set_error(e.user_message());
            }
        }
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.charts.get(&output)
    }

    /// Dropdown options: the sentinel first, then every site in the dataset
    pub fn site_options(&self) -> Vec<SiteChoice> {
        std::iter::once(SiteChoice::All)
            .chain(self.dataset.sites().iter().cloned().map(SiteChoice::Site))
            .collect()
    }
}
